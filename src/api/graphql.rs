//! GraphQL Client
//!
//! `DreamApi` over HTTP: POSTs `{query, variables}` and unwraps the
//! `{data, errors}` envelope.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::documents;
use super::{ApiError, ApiResult, DreamApi, DreamInput, DreamPage, EventPage};
use crate::models::{CurrentUser, Dream, Event, FavoriteState};

// ========================
// Envelope
// ========================

#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

/// Response body of any operation
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl<T> GraphqlResponse<T> {
    /// Any reported error wins over partial data
    pub fn into_result(self) -> ApiResult<T> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            let message = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::GraphQl(message));
        }
        self.data.ok_or(ApiError::EmptyData)
    }
}

// ========================
// Variables
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DreamIdVars<'a> {
    dream_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDreamVars<'a> {
    event_id: &'a str,
    #[serde(flatten)]
    input: &'a DreamInput,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditDreamVars<'a> {
    dream_id: &'a str,
    #[serde(flatten)]
    input: &'a DreamInput,
}

#[derive(Serialize)]
struct SlugVars<'a> {
    slug: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DreamPageVars<'a> {
    event_slug: &'a str,
    slug: &'a str,
}

// ========================
// Data
// ========================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleFavoriteData {
    toggle_favorite: FavoriteState,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateDreamData {
    create_dream: Dream,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditDreamData {
    edit_dream: Dream,
}

#[derive(Deserialize)]
struct EventWithDreams {
    #[serde(flatten)]
    event: Event,
    #[serde(default)]
    dreams: Vec<Dream>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventPageData {
    event: Option<EventWithDreams>,
    current_user: Option<CurrentUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DreamPageData {
    event: Option<Event>,
    dream: Option<Dream>,
    current_user: Option<CurrentUser>,
}

impl EventPageData {
    fn into_page(self, event_slug: &str) -> ApiResult<EventPage> {
        let EventWithDreams { event, dreams } = self
            .event
            .ok_or_else(|| ApiError::NotFound(format!("Event '{}'", event_slug)))?;
        Ok(EventPage {
            event,
            dreams,
            current_user: self.current_user,
        })
    }
}

impl DreamPageData {
    fn into_page(self, event_slug: &str, dream_slug: &str) -> ApiResult<DreamPage> {
        let event = self
            .event
            .ok_or_else(|| ApiError::NotFound(format!("Event '{}'", event_slug)))?;
        let dream = self
            .dream
            .ok_or_else(|| ApiError::NotFound(format!("Dream '{}'", dream_slug)))?;
        Ok(DreamPage {
            event,
            dream,
            current_user: self.current_user,
        })
    }
}

// ========================
// Client
// ========================

/// GraphQL endpoint client. Session cookies ride along with every request.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> ApiResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(operation, endpoint = %self.endpoint, "graphql request");
        let body = GraphqlRequest { query, variables };
        let result = self.post::<_, T>(&body).await.and_then(GraphqlResponse::into_result);
        if let Err(err) = &result {
            tracing::warn!(operation, error = %err, "graphql operation failed");
        }
        result
    }

    #[cfg(target_arch = "wasm32")]
    async fn post<V, T>(&self, body: &GraphqlRequest<'_, V>) -> ApiResult<GraphqlResponse<T>>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let response = Request::post(&self.endpoint)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to create request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let status_text = response.status_text();

        match response.json::<GraphqlResponse<T>>().await {
            Ok(envelope) if ok || envelope.errors.is_some() => Ok(envelope),
            Ok(_) => Err(ApiError::Http { status, message: status_text }),
            Err(_) if !ok => Err(ApiError::Http { status, message: status_text }),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post<V, T>(&self, _body: &GraphqlRequest<'_, V>) -> ApiResult<GraphqlResponse<T>>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        Err(ApiError::Network(
            "GraphQL transport is only available in the browser".to_string(),
        ))
    }
}

#[async_trait(?Send)]
impl DreamApi for GraphqlClient {
    async fn toggle_favorite(&self, dream_id: &str) -> ApiResult<FavoriteState> {
        let data: ToggleFavoriteData = self
            .execute("ToggleFavorite", documents::TOGGLE_FAVORITE, DreamIdVars { dream_id })
            .await?;
        Ok(data.toggle_favorite)
    }

    async fn create_dream(&self, event_id: &str, input: &DreamInput) -> ApiResult<Dream> {
        let data: CreateDreamData = self
            .execute("CreateDream", documents::CREATE_DREAM, CreateDreamVars { event_id, input })
            .await?;
        Ok(data.create_dream)
    }

    async fn edit_dream(&self, dream_id: &str, input: &DreamInput) -> ApiResult<Dream> {
        let data: EditDreamData = self
            .execute("EditDream", documents::EDIT_DREAM, EditDreamVars { dream_id, input })
            .await?;
        Ok(data.edit_dream)
    }

    async fn event_page(&self, event_slug: &str) -> ApiResult<EventPage> {
        let data: EventPageData = self
            .execute("EventPage", documents::EVENT_PAGE, SlugVars { slug: event_slug })
            .await?;
        data.into_page(event_slug)
    }

    async fn dream_page(&self, event_slug: &str, dream_slug: &str) -> ApiResult<DreamPage> {
        let data: DreamPageData = self
            .execute(
                "DreamPage",
                documents::DREAM_PAGE,
                DreamPageVars { event_slug, slug: dream_slug },
            )
            .await?;
        data.into_page(event_slug, dream_slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BudgetItemInput, ImageInput};

    fn sample_input() -> DreamInput {
        DreamInput {
            title: "My Great Idea!".into(),
            slug: "my-great-idea".into(),
            description: "".into(),
            summary: "Short".into(),
            images: vec![ImageInput { small: "https://s".into(), large: "https://l".into() }],
            min_goal: None,
            max_goal: Some(500),
            budget_items: vec![BudgetItemInput { description: "Tent".into(), min: 50, max: Some(80) }],
        }
    }

    #[test]
    fn test_create_variables_flatten_input() {
        let input = sample_input();
        let body = GraphqlRequest {
            query: documents::CREATE_DREAM,
            variables: CreateDreamVars { event_id: "ev1", input: &input },
        };
        let json = serde_json::to_value(&body).unwrap();
        let vars = &json["variables"];

        assert_eq!(vars["eventId"], "ev1");
        assert_eq!(vars["slug"], "my-great-idea");
        assert_eq!(vars["maxGoal"], 500);
        assert_eq!(vars["images"][0], serde_json::json!({"small": "https://s", "large": "https://l"}));
        assert_eq!(vars["budgetItems"][0]["max"], 80);
    }

    #[test]
    fn test_edit_variables_use_dream_id() {
        let input = sample_input();
        let json = serde_json::to_value(EditDreamVars { dream_id: "d9", input: &input }).unwrap();
        assert_eq!(json["dreamId"], "d9");
        assert!(json.get("eventId").is_none());
    }

    #[test]
    fn test_envelope_errors_win() {
        let response: GraphqlResponse<ToggleFavoriteData> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Not a member"}, {"message": "Try again"}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_result().err(),
            Some(ApiError::GraphQl("Not a member; Try again".into()))
        );
    }

    #[test]
    fn test_envelope_data() {
        let response: GraphqlResponse<ToggleFavoriteData> = serde_json::from_str(
            r#"{"data": {"toggleFavorite": {"id": "d1", "favorite": true}}}"#,
        )
        .unwrap();
        let data = response.into_result().unwrap();
        assert_eq!(data.toggle_favorite, FavoriteState { id: "d1".into(), favorite: true });
    }

    #[test]
    fn test_envelope_without_data_or_errors() {
        let response: GraphqlResponse<ToggleFavoriteData> =
            serde_json::from_str(r#"{"data": null, "errors": []}"#).unwrap();
        assert_eq!(response.into_result().err(), Some(ApiError::EmptyData));
    }

    #[test]
    fn test_event_page_data_missing_event_is_not_found() {
        let data: EventPageData =
            serde_json::from_str(r#"{"event": null, "currentUser": null}"#).unwrap();
        assert_eq!(
            data.into_page("nowhere").err(),
            Some(ApiError::NotFound("Event 'nowhere'".into()))
        );
    }

    #[test]
    fn test_event_page_data_flattens_event() {
        let data: EventPageData = serde_json::from_str(
            r#"{
                "event": {"id": "e1", "slug": "borderland", "title": "Borderland",
                          "dreams": [{"id": "d1", "title": "Sauna", "slug": "sauna"}]},
                "currentUser": {"id": "u1", "membership": {"id": "m1"}}
            }"#,
        )
        .unwrap();
        let page = data.into_page("borderland").unwrap();

        assert_eq!(page.event.slug, "borderland");
        assert_eq!(page.dreams.len(), 1);
        assert!(page.current_user.unwrap().is_member());
    }

    #[tokio::test]
    async fn test_native_transport_reports_network_error() {
        let client = GraphqlClient::new("/graphql");
        let result = client.toggle_favorite("d1").await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
