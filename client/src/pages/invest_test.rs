use super::*;

fn filled_input() -> CheckoutInput {
    CheckoutInput {
        amount: "$1,000".to_owned(),
        card_holder: "  Ada Lovelace ".to_owned(),
        card_number: format_card_number("4111111111111111"),
        expiry: format_expiry_date("0528"),
        cvv: format_cvv("123"),
    }
}

#[test]
fn complete_form_produces_summary() {
    let summary = validate_checkout(&filled_input(), 500).expect("valid checkout");
    assert_eq!(summary.amount, 1_000);
    assert_eq!(summary.card_holder, "Ada Lovelace");
    assert_eq!(summary.card_last_four, "1111");
    assert_eq!(summary.expiry, "05/28");
}

#[test]
fn amount_must_be_positive_whole_dollars() {
    let mut input = filled_input();
    input.amount = "12.5".to_owned();
    assert_eq!(validate_checkout(&input, 0), Err("Enter a whole-dollar amount."));
    input.amount = "0".to_owned();
    assert_eq!(validate_checkout(&input, 0), Err("Enter a whole-dollar amount."));
}

#[test]
fn amount_below_minimum_is_rejected() {
    assert_eq!(validate_checkout(&filled_input(), 2_500), Err("Amount is below the minimum investment."));
}

#[test]
fn missing_card_fields_are_reported_in_order() {
    let mut input = filled_input();
    input.card_holder = "   ".to_owned();
    assert_eq!(validate_checkout(&input, 0), Err("Enter the name on the card."));

    let mut input = filled_input();
    input.card_number = String::new();
    assert_eq!(validate_checkout(&input, 0), Err("Enter a card number."));

    let mut input = filled_input();
    input.expiry = format_expiry_date("05");
    assert_eq!(validate_checkout(&input, 0), Err("Enter the expiry as MM/YY."));

    let mut input = filled_input();
    input.cvv = "12".to_owned();
    assert_eq!(validate_checkout(&input, 0), Err("Enter the 3 or 4 digit security code."));
}

#[test]
fn short_card_number_uses_all_digits_as_last_four() {
    let mut input = filled_input();
    input.card_number = format_card_number("42");
    let summary = validate_checkout(&input, 0).expect("valid checkout");
    assert_eq!(summary.card_last_four, "42");
}

#[test]
fn confirmation_mentions_amount_title_and_card() {
    let summary = validate_checkout(&filled_input(), 0).expect("valid checkout");
    assert_eq!(
        confirmation_message(&summary, "HarvestIQ"),
        "$1,000 pledged to HarvestIQ with the card ending 1111."
    );
}

#[test]
fn open_campaign_is_checkout_target() {
    assert!(matches!(checkout_target(Some("1")), CheckoutTarget::Open(c) if c.id == "1"));
}

#[test]
fn closed_campaign_cannot_be_checked_out() {
    assert!(matches!(checkout_target(Some("2")), CheckoutTarget::Closed(c) if c.title == "HarvestIQ"));
}

#[test]
fn unknown_or_missing_id_is_not_found() {
    assert_eq!(checkout_target(Some("nope")), CheckoutTarget::Missing);
    assert_eq!(checkout_target(None), CheckoutTarget::Missing);
}
