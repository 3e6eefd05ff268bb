//! Frontend Models
//!
//! Data structures matching the GraphQL schema.

use serde::{Deserialize, Serialize};

/// Dream (campaign) record as returned by queries and mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dream {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub min_goal: Option<i64>,
    #[serde(default)]
    pub max_goal: Option<i64>,
    #[serde(default)]
    pub min_goal_grants: Option<i64>,
    #[serde(default)]
    pub max_goal_grants: Option<i64>,
    #[serde(default)]
    pub current_number_of_grants: i64,
    #[serde(default)]
    pub approved: bool,
    /// Absent in older responses; treated as published
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    #[serde(default)]
    pub number_of_comments: i64,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub cocreators: Vec<Cocreator>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Dream {
    /// Grant target shown on cards: max when set, otherwise min
    pub fn goal_grants(&self) -> Option<i64> {
        nonzero(self.max_goal_grants).or(nonzero(self.min_goal_grants))
    }

    pub fn is_cocreator(&self, user_id: &str) -> bool {
        self.cocreators.iter().any(|c| c.user.id == user_id)
    }
}

fn nonzero(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

fn default_true() -> bool {
    true
}

/// Image URL pair. Queries may echo the server type tag back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub small: String,
    pub large: String,
    #[serde(rename = "__typename", default, skip_serializing_if = "Option::is_none")]
    pub typename: Option<String>,
}

impl Image {
    pub fn new(small: impl Into<String>, large: impl Into<String>) -> Self {
        Self {
            small: small.into(),
            large: large.into(),
            typename: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub description: String,
    pub min: i64,
    #[serde(default)]
    pub max: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocreator {
    pub id: String,
    pub user: UserRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Event a dream belongs to; used for routing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
}

/// Logged-in viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub membership: Option<Membership>,
}

impl CurrentUser {
    pub fn is_member(&self) -> bool {
        self.membership.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Result of `toggleFavorite`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteState {
    pub id: String,
    pub favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dream_defaults_from_mutation_response() {
        let json = r#"{
            "id": "d1",
            "title": "Sauna",
            "slug": "sauna",
            "images": [{"small": "https://img/s.jpg", "large": "https://img/l.jpg", "__typename": "ImageType"}],
            "budgetItems": [{"description": "Wood", "min": 100, "max": null}],
            "maxGoalGrants": 20
        }"#;
        let dream: Dream = serde_json::from_str(json).unwrap();

        assert!(dream.published);
        assert!(!dream.favorite);
        assert_eq!(dream.images[0].typename.as_deref(), Some("ImageType"));
        assert_eq!(dream.budget_items[0].max, None);
        assert_eq!(dream.goal_grants(), Some(20));
    }

    #[test]
    fn test_goal_grants_prefers_max_and_ignores_zero() {
        let mut dream: Dream = serde_json::from_str(r#"{"id":"1","title":"t","slug":"t"}"#).unwrap();
        assert_eq!(dream.goal_grants(), None);

        dream.min_goal_grants = Some(5);
        dream.max_goal_grants = Some(0);
        assert_eq!(dream.goal_grants(), Some(5));

        dream.max_goal_grants = Some(9);
        assert_eq!(dream.goal_grants(), Some(9));
    }

    #[test]
    fn test_membership_gates_member_flag() {
        let visitor = CurrentUser { id: "u".into(), name: None, membership: None };
        assert!(!visitor.is_member());

        let member = CurrentUser {
            id: "u".into(),
            name: None,
            membership: Some(Membership { id: "m".into(), is_admin: false }),
        };
        assert!(member.is_member());
    }
}
