use super::*;

#[test]
fn days_left_label_handles_closed_and_singular() {
    assert_eq!(days_left_label(0), "Funding closed");
    assert_eq!(days_left_label(1), "1 day left");
    assert_eq!(days_left_label(18), "18 days left");
}
