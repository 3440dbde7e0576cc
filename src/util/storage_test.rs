use super::*;

#[test]
fn memory_store_round_trips_pair() {
    let tokens = MemoryTokens::default();
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);

    tokens.store_pair("A1", "R1");
    assert_eq!(tokens.access_token().as_deref(), Some("A1"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("R1"));
}

#[test]
fn store_access_leaves_refresh_untouched() {
    let tokens = MemoryTokens::default();
    tokens.store_pair("A1", "R1");
    tokens.store_access("A2");
    assert_eq!(tokens.access_token().as_deref(), Some("A2"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("R1"));
}

#[test]
fn clear_drops_both_tokens() {
    let tokens = MemoryTokens::default();
    tokens.store_pair("A1", "R1");
    tokens.clear();
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}

#[test]
fn clones_share_the_same_cell() {
    let tokens = MemoryTokens::default();
    let view = tokens.clone();
    tokens.store_pair("A1", "R1");
    assert_eq!(view.access_token().as_deref(), Some("A1"));
}

#[test]
fn browser_store_is_inert_without_a_window() {
    let tokens = BrowserTokens;
    tokens.store_pair("A1", "R1");
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}
