use super::*;
use crate::state::test_helpers;

#[test]
fn app_state_without_identity() {
    let state = test_helpers::test_app_state();
    assert!(state.identity.is_none());
}

#[test]
fn app_state_with_identity() {
    let mock = Arc::new(test_helpers::MockIdentity::signed_out());
    let state = test_helpers::test_app_state_with_identity(mock);
    assert!(state.identity.is_some());
}

#[test]
fn app_state_is_cloneable() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    assert!(clone.identity.is_none());
}
