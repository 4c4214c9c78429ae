//! Outbound service clients used by pages.
//!
//! ARCHITECTURE
//! ============
//! Service modules own HTTP plumbing to third-party APIs so page render
//! functions can stay focused on state branching and text output.

pub mod external_api;
