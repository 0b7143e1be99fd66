//! Document schemas for the `groups` and `users` collections plus the
//! projected view types built from them.
//!
//! DESIGN
//! ======
//! Stored documents use camelCase keys and deeply optional nesting (user
//! records are written by a separate profile sync job). Records are decoded
//! leniently here (missing or `null` text fields read as empty strings) and
//! projected into flat view types so components never walk optional chains
//! themselves.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A group document as stored in the `groups` collection.
///
/// The document key is the group identifier and is not repeated in the body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    /// User id of the creator, who administers the group.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub created_by: String,
    /// Member user ids in insertion order.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub members: Vec<String>,
}

/// A user document as stored in the `users` collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default)]
    pub leetcode_data: Option<LeetcodeData>,
}

/// Contest and profile data synced from the user's LeetCode account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeetcodeData {
    #[serde(default)]
    pub profile: Option<LeetcodeProfile>,
    #[serde(default)]
    pub contest: Option<LeetcodeContest>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeetcodeProfile {
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetcodeContest {
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub contest_rating: Option<f64>,
}

/// A loaded group with its identifier attached.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub member_ids: Vec<String>,
}

impl Group {
    pub fn from_record(id: impl Into<String>, record: GroupRecord) -> Self {
        Self {
            id: id.into(),
            name: record.name,
            description: record.description,
            created_by: record.created_by,
            member_ids: record.members,
        }
    }
}

/// Contest rating of a member, or the "unavailable" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rating {
    Rated(f64),
    #[default]
    Unavailable,
}

impl Rating {
    /// Build a rating from a stored value. Missing, zero, and non-finite
    /// values are all unavailable.
    pub fn from_stored(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && v != 0.0 => Self::Rated(v),
            _ => Self::Unavailable,
        }
    }

    /// Rating truncated toward zero, if rated.
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncated(self) -> Option<i64> {
        match self {
            Self::Rated(v) => Some(v.trunc() as i64),
            Self::Unavailable => None,
        }
    }

    /// Display text: the truncated rating or `N/A`.
    pub fn display(self) -> String {
        self.truncated()
            .map_or_else(|| "N/A".to_owned(), |v| v.to_string())
    }
}

/// A member as shown on the group page: a user record joined for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
    /// Avatar image URL; empty when the user has none.
    pub avatar: String,
    pub rating: Rating,
}

impl Member {
    pub fn project(id: impl Into<String>, record: UserRecord) -> Self {
        let leetcode = record.leetcode_data.unwrap_or_default();
        let avatar = leetcode
            .profile
            .and_then(|p| p.avatar)
            .unwrap_or_default();
        let rating = Rating::from_stored(leetcode.contest.and_then(|c| c.contest_rating));
        Self { id: id.into(), name: record.name, avatar, rating }
    }
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier; matches document keys in `users`.
    pub uid: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Display text fields: `null` or a non-string value reads as empty.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        _ => String::new(),
    })
}

/// `null` reads as an empty list; any other non-list is still an error.
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ratings arrive as numbers from the sync job but older records hold
/// strings such as `"1843.27"` or `"N/A"`. Anything unparseable is absent.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}
