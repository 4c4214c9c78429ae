//! User-profile view.
//!
//! Same three-state shape as the auth-token page, driven by a
//! [`UserSnapshot`]. The trailing `") "` is part of the greeting's fixed
//! output format; a user with no email addresses renders an empty email
//! rather than failing.

use crate::identity::UserSnapshot;

/// Render the page body for the given user snapshot.
#[must_use]
pub fn render(snapshot: &UserSnapshot) -> String {
    if !snapshot.is_loaded {
        return super::LOADING_TEXT.to_string();
    }

    if !snapshot.is_signed_in {
        return super::SIGN_IN_PROMPT.to_string();
    }

    let Some(user) = &snapshot.user else {
        return super::SIGN_IN_PROMPT.to_string();
    };
    let email = user.primary_email().unwrap_or_default();
    format!("Hello {} {} - {email}) ", user.first_name, user.last_name)
}

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod tests;
