use super::*;
use ventureboard::campaign::get_campaign_by_id;

fn original() -> &'static Campaign {
    get_campaign_by_id("3").expect("catalogue entry")
}

#[test]
fn prefill_mirrors_record() {
    let fields = EditFormFields::from_campaign(original());
    assert_eq!(fields.title, "Lumen Learning");
    assert_eq!(fields.goal_amount, "400000");
    assert_eq!(fields.min_investment, "1000");
}

#[test]
fn untouched_form_has_nothing_to_update() {
    let fields = EditFormFields::from_campaign(original());
    assert_eq!(build_detail_update(original(), &fields), Err("Nothing to update."));
}

#[test]
fn whitespace_only_edits_are_not_changes() {
    let mut fields = EditFormFields::from_campaign(original());
    fields.title = format!("  {}  ", fields.title);
    assert_eq!(build_detail_update(original(), &fields), Err("Nothing to update."));
}

#[test]
fn only_changed_fields_are_sent() {
    let mut fields = EditFormFields::from_campaign(original());
    fields.tagline = "Tablets for every classroom".to_owned();
    fields.goal_amount = "$450,000".to_owned();

    let update = build_detail_update(original(), &fields).expect("valid update");

    assert_eq!(update.tagline.as_deref(), Some("Tablets for every classroom"));
    assert_eq!(update.goal_amount, Some(450_000));
    assert!(update.title.is_none());
    assert!(update.min_investment.is_none());
    assert!(update.image_url.is_none());
}

#[test]
fn invalid_values_are_rejected_before_diffing() {
    let mut fields = EditFormFields::from_campaign(original());
    fields.title = " ".to_owned();
    assert_eq!(build_detail_update(original(), &fields), Err("Title cannot be empty."));

    let mut fields = EditFormFields::from_campaign(original());
    fields.goal_amount = "0".to_owned();
    assert_eq!(build_detail_update(original(), &fields), Err("Enter a funding goal in whole dollars."));

    let mut fields = EditFormFields::from_campaign(original());
    fields.min_investment = "many".to_owned();
    assert_eq!(build_detail_update(original(), &fields), Err("Enter the minimum investment in whole dollars."));

    let mut fields = EditFormFields::from_campaign(original());
    fields.min_investment = "500000".to_owned();
    assert_eq!(build_detail_update(original(), &fields), Err("Minimum investment cannot exceed the funding goal."));
}
