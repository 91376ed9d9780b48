use super::*;

#[test]
fn resolve_known_id_returns_campaign() {
    let campaign = resolve_campaign(Some("5")).expect("campaign 5");
    assert_eq!(campaign.title, "Kinfolk Health");
}

#[test]
fn resolve_unknown_or_missing_id_is_none() {
    assert!(resolve_campaign(Some("999")).is_none());
    assert!(resolve_campaign(Some("")).is_none());
    assert!(resolve_campaign(None).is_none());
}
