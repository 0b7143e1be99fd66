//! Leaderboard ranking: members ordered by contest rating, top three medalled.
//!
//! Unrated members rank below every rated member. The sort is stable, so
//! members with equal ratings keep their member-list order.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use std::cmp::Ordering;

use crate::net::types::{Member, Rating};

/// Rank marker for the first three leaderboard positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based rank, if any.
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub medal: Option<Medal>,
    pub member: Member,
}

/// Descending rating order with `Unavailable` last.
pub fn compare_ratings_desc(a: Rating, b: Rating) -> Ordering {
    match (a, b) {
        (Rating::Rated(x), Rating::Rated(y)) => y.total_cmp(&x),
        (Rating::Rated(_), Rating::Unavailable) => Ordering::Less,
        (Rating::Unavailable, Rating::Rated(_)) => Ordering::Greater,
        (Rating::Unavailable, Rating::Unavailable) => Ordering::Equal,
    }
}

/// Rank members for display.
pub fn rank_members(members: &[Member]) -> Vec<LeaderboardEntry> {
    let mut sorted = members.to_vec();
    sorted.sort_by(|a, b| compare_ratings_desc(a.rating, b.rating));
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, member)| {
            let rank = index + 1;
            LeaderboardEntry { rank, medal: Medal::for_rank(rank), member }
        })
        .collect()
}
