use super::*;

#[test]
fn fetch_starts_loading_with_no_data() {
    let state: FetchState<Vec<i64>> = FetchState::default();
    assert!(state.loading);
    assert_eq!(state.data, None);
    assert_eq!(state.error, None);
}

#[test]
fn resolve_lands_data_and_clears_flags() {
    let mut state = FetchState::default();
    state.resolve(vec![1, 2]);
    assert_eq!(state.data, Some(vec![1, 2]));
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn reject_keeps_prior_data_visible() {
    let mut state = FetchState::default();
    state.resolve(vec![1]);
    state.start();
    state.reject("Network request failed".to_owned());
    assert_eq!(state.data, Some(vec![1]));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Network request failed"));
}

#[test]
fn restart_drops_stale_error_but_not_data() {
    let mut state = FetchState::default();
    state.resolve(vec![1]);
    state.reject("boom".to_owned());
    state.start();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.data, Some(vec![1]));
}
