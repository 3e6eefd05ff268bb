//! Data Access
//!
//! The GraphQL operations the UI consumes, behind an injectable trait so
//! components and workflows can run against fakes.

mod documents;
mod graphql;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::{CurrentUser, Dream, Event, FavoriteState, Image};

pub use graphql::GraphqlClient;

/// Failures of the data layer. `Display` is the message shown to users.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Messages reported in the GraphQL `errors` array
    #[error("{0}")]
    GraphQl(String),
    #[error("Response contained no data")]
    EmptyData,
    #[error("{0} not found")]
    NotFound(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

// ========================
// Mutation Inputs
// ========================

/// Full field set of a create or edit mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamInput {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub summary: String,
    pub images: Vec<ImageInput>,
    pub min_goal: Option<i64>,
    pub max_goal: Option<i64>,
    pub budget_items: Vec<BudgetItemInput>,
}

/// `ImageInput` carries only the URL pair; the transport rejects the echoed
/// `__typename` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInput {
    pub small: String,
    pub large: String,
}

impl From<&Image> for ImageInput {
    fn from(image: &Image) -> Self {
        Self {
            small: image.small.clone(),
            large: image.large.clone(),
        }
    }
}

/// Drop server type tags from a list of images
pub fn strip_type_tags(images: &[Image]) -> Vec<ImageInput> {
    images.iter().map(ImageInput::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetItemInput {
    pub description: String,
    pub min: i64,
    pub max: Option<i64>,
}

// ========================
// Query Results
// ========================

/// Event page: the event, its dreams, and the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct EventPage {
    pub event: Event,
    pub dreams: Vec<Dream>,
    pub current_user: Option<CurrentUser>,
}

/// Detail/edit page: one dream with its event and the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct DreamPage {
    pub event: Event,
    pub dream: Dream,
    pub current_user: Option<CurrentUser>,
}

/// GraphQL operations consumed by the UI
#[async_trait(?Send)]
pub trait DreamApi: Send + Sync {
    async fn toggle_favorite(&self, dream_id: &str) -> ApiResult<FavoriteState>;

    async fn create_dream(&self, event_id: &str, input: &DreamInput) -> ApiResult<Dream>;

    async fn edit_dream(&self, dream_id: &str, input: &DreamInput) -> ApiResult<Dream>;

    async fn event_page(&self, event_slug: &str) -> ApiResult<EventPage>;

    async fn dream_page(&self, event_slug: &str, dream_slug: &str) -> ApiResult<DreamPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_type_tags_drops_typename() {
        let mut image = Image::new("https://img/s.jpg", "https://img/l.jpg");
        image.typename = Some("ImageType".to_string());

        let inputs = strip_type_tags(&[image]);
        let json = serde_json::to_value(&inputs).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{"small": "https://img/s.jpg", "large": "https://img/l.jpg"}])
        );
    }

    #[test]
    fn test_dream_input_serializes_camel_case() {
        let input = DreamInput {
            title: "Sauna".into(),
            slug: "sauna".into(),
            description: String::new(),
            summary: "Hot".into(),
            images: vec![],
            min_goal: Some(100),
            max_goal: None,
            budget_items: vec![BudgetItemInput { description: "Wood".into(), min: 10, max: None }],
        };
        let json = serde_json::to_value(&input).unwrap();

        assert_eq!(json["minGoal"], 100);
        assert!(json["maxGoal"].is_null());
        assert_eq!(json["budgetItems"][0]["min"], 10);
    }

    #[test]
    fn test_graphql_error_displays_raw_message() {
        let err = ApiError::GraphQl("Slug already taken".into());
        assert_eq!(err.to_string(), "Slug already taken");
    }
}
