//! Page views.
//!
//! ARCHITECTURE
//! ============
//! Each view is a pull-based render function: the route handler resolves
//! provider snapshots for the request and passes them in, and the view
//! returns the page body as plain text. Views hold no state and never
//! reach for ambient globals, so each one unit tests as a pure function.

pub mod auth_token;
pub mod home;
pub mod user_profile;

/// Body text shown while the auth subscription has not resolved.
pub const LOADING_TEXT: &str = "Loading...";

/// Body text prompting a signed-out visitor.
pub const SIGN_IN_PROMPT: &str = "Sign in to view this page";
