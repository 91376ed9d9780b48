use super::*;

#[test]
fn categories_start_with_all_and_are_distinct() {
    let list = categories(dummy_campaigns());
    assert_eq!(list[0], ALL_CATEGORIES);
    let mut deduped = list.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), list.len());
    assert!(list.iter().any(|c| c == "Clean Energy"));
}

#[test]
fn all_category_keeps_every_campaign() {
    assert_eq!(filter_by_category(dummy_campaigns(), ALL_CATEGORIES).len(), dummy_campaigns().len());
}

#[test]
fn category_filter_matches_exactly() {
    let filtered = filter_by_category(dummy_campaigns(), "Mobility");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Tidewater Bikes");
    assert!(filter_by_category(dummy_campaigns(), "mobility").is_empty());
}
