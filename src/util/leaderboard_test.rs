use super::*;

fn member(id: &str, rating: Rating) -> Member {
    Member { id: id.to_owned(), name: id.to_uppercase(), avatar: String::new(), rating }
}

fn ranked_ids(entries: &[LeaderboardEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.member.id.as_str()).collect()
}

// =============================================================
// Medal
// =============================================================

#[test]
fn medal_for_top_three_ranks_only() {
    assert_eq!(Medal::for_rank(1), Some(Medal::Gold));
    assert_eq!(Medal::for_rank(2), Some(Medal::Silver));
    assert_eq!(Medal::for_rank(3), Some(Medal::Bronze));
    assert_eq!(Medal::for_rank(4), None);
    assert_eq!(Medal::for_rank(0), None);
}

#[test]
fn medal_glyphs() {
    assert_eq!(Medal::Gold.glyph(), "🥇");
    assert_eq!(Medal::Silver.glyph(), "🥈");
    assert_eq!(Medal::Bronze.glyph(), "🥉");
}

// =============================================================
// rank_members
// =============================================================

#[test]
fn ranks_descending_with_medals() {
    let members = vec![
        member("a", Rating::Rated(10.0)),
        member("b", Rating::Rated(30.0)),
        member("c", Rating::Rated(20.0)),
    ];
    let entries = rank_members(&members);
    assert_eq!(ranked_ids(&entries), vec!["b", "c", "a"]);
    let medals: Vec<&str> = entries
        .iter()
        .map(|e| e.medal.map_or("", Medal::glyph))
        .collect();
    assert_eq!(medals, vec!["🥇", "🥈", "🥉"]);
    assert_eq!(entries.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn positions_after_third_are_unmarked() {
    let members: Vec<Member> = (1..=5)
        .map(|i| member(&format!("m{i}"), Rating::Rated(f64::from(i))))
        .collect();
    let entries = rank_members(&members);
    assert!(entries[3].medal.is_none());
    assert!(entries[4].medal.is_none());
    assert_eq!(entries[4].member.id, "m1");
}

#[test]
fn unavailable_ranks_below_rated() {
    let members = vec![
        member("unrated", Rating::Unavailable),
        member("low", Rating::Rated(1.5)),
        member("high", Rating::Rated(2100.0)),
    ];
    let entries = rank_members(&members);
    assert_eq!(ranked_ids(&entries), vec!["high", "low", "unrated"]);
}

#[test]
fn unavailable_ranks_below_negative_rating() {
    let members = vec![member("unrated", Rating::Unavailable), member("neg", Rating::Rated(-4.0))];
    let entries = rank_members(&members);
    assert_eq!(ranked_ids(&entries), vec!["neg", "unrated"]);
}

#[test]
fn ties_keep_member_list_order() {
    let members = vec![
        member("first", Rating::Rated(1500.0)),
        member("second", Rating::Rated(1500.0)),
        member("u1", Rating::Unavailable),
        member("u2", Rating::Unavailable),
    ];
    let entries = rank_members(&members);
    assert_eq!(ranked_ids(&entries), vec!["first", "second", "u1", "u2"]);
}

#[test]
fn ranking_does_not_reorder_input() {
    let members = vec![member("a", Rating::Rated(1.0)), member("b", Rating::Rated(2.0))];
    let _ = rank_members(&members);
    assert_eq!(members[0].id, "a");
}

#[test]
fn empty_member_list_ranks_empty() {
    assert!(rank_members(&[]).is_empty());
}
