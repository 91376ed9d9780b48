use super::*;

fn filled() -> CampaignFormFields {
    CampaignFormFields {
        title: "  Night Market  ".to_owned(),
        tagline: "Street food, every Friday".to_owned(),
        description: "A rotating hawker market.".to_owned(),
        category: "Food".to_owned(),
        founder: "Sam Lee".to_owned(),
        location: " Taipei ".to_owned(),
        goal_amount: "$20,000".to_owned(),
        min_investment: "50".to_owned(),
    }
}

#[test]
fn filled_form_builds_trimmed_payload() {
    let detail = build_basic_detail(&filled()).expect("valid form");
    assert_eq!(detail.title, "Night Market");
    assert_eq!(detail.location, "Taipei");
    assert_eq!(detail.goal_amount, 20_000);
    assert_eq!(detail.min_investment, 50);
    assert!(detail.validate().is_ok());
}

#[test]
fn blank_title_is_rejected() {
    let fields = CampaignFormFields { title: "   ".to_owned(), ..filled() };
    assert_eq!(build_basic_detail(&fields), Err("Give your campaign a title."));
}

#[test]
fn goal_must_be_positive_whole_dollars() {
    for goal in ["", "0", "12.50", "lots"] {
        let fields = CampaignFormFields { goal_amount: goal.to_owned(), ..filled() };
        assert_eq!(build_basic_detail(&fields), Err("Enter a funding goal in whole dollars."), "goal {goal:?}");
    }
}

#[test]
fn blank_minimum_defaults_to_zero() {
    let fields = CampaignFormFields { min_investment: "  ".to_owned(), ..filled() };
    assert_eq!(build_basic_detail(&fields).map(|d| d.min_investment), Ok(0));
}

#[test]
fn malformed_minimum_is_rejected() {
    let fields = CampaignFormFields { min_investment: "-5".to_owned(), ..filled() };
    assert_eq!(build_basic_detail(&fields), Err("Enter the minimum investment in whole dollars."));
}

#[test]
fn minimum_above_goal_is_rejected() {
    let fields = CampaignFormFields { goal_amount: "100".to_owned(), min_investment: "101".to_owned(), ..filled() };
    assert_eq!(build_basic_detail(&fields), Err("Minimum investment cannot exceed the funding goal."));
}
