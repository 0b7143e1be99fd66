use super::*;

#[test]
fn rating_label_shows_truncated_value() {
    assert_eq!(rating_label(Rating::Rated(1999.9)), "Contest Rating: 1999");
}

#[test]
fn rating_label_shows_unavailable() {
    assert_eq!(rating_label(Rating::Unavailable), "Contest Rating: N/A");
}
