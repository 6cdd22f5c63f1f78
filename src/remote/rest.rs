//! REST Task Store
//!
//! PostgREST (Supabase-style) client for the task table.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

use super::TaskStore;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{CompletionPatch, NewTask, Task, TaskId};

/// Ask PostgREST to echo affected rows back
const RETURN_REPRESENTATION: &str = "return=representation";

/// Error body returned by PostgREST on failure
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn id_filter(id: TaskId) -> [(&'static str, String); 1] {
        [("id", format!("eq.{id}"))]
    }
}

/// Turn a non-2xx response into [`StoreError::Status`]
async fn check(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => status.canonical_reason().unwrap_or("request failed").to_string(),
        Err(_) => body,
    };
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait(?Send)]
impl TaskStore for RestStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let request = self
            .client
            .get(self.config.table_url())
            .query(&[("select", "*"), ("order", "id.desc")]);
        let response = check(self.authorized(request).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn insert(&self, task: &NewTask) -> StoreResult<Vec<Task>> {
        let request = self
            .client
            .post(self.config.table_url())
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&[task]);
        let response = check(self.authorized(request).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> StoreResult<Vec<Task>> {
        let request = self
            .client
            .patch(self.config.table_url())
            .query(&Self::id_filter(id))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&CompletionPatch { completed });
        let response = check(self.authorized(request).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.config.table_url())
            .query(&Self::id_filter(id));
        check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TABLE_PATH: &str = "/rest/v1/todos";

    fn store_for(server: &MockServer) -> RestStore {
        RestStore::new(StoreConfig::from_values(Some(server.uri().as_str()), Some("anon-key"), None))
    }

    fn row(id: TaskId, text: &str, completed: bool) -> serde_json::Value {
        json!({
            "id": id,
            "text": text,
            "description": "",
            "completed": completed,
            "time": "2026-10-16 09:00:00"
        })
    }

    #[tokio::test]
    async fn test_list_orders_newest_first_and_authenticates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .and(query_param("select", "*"))
            .and(query_param("order", "id.desc"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                row(2, "second", false),
                row(1, "first", true),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = store_for(&server).list().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 2);
        assert!(tasks[1].completed);
    }

    #[tokio::test]
    async fn test_insert_sends_row_and_returns_representation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .and(header("prefer", "return=representation"))
            .and(body_json(json!([{
                "text": "water plants",
                "description": "balcony",
                "completed": false,
                "time": "2026-10-16 09:00:00"
            }])))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
                "id": 9,
                "text": "water plants",
                "description": "balcony",
                "completed": false,
                "time": "2026-10-16 09:00:00"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let new_task =
            NewTask::from_input("water plants", "balcony", "2026-10-16 09:00:00".to_string()).unwrap();
        let rows = store_for(&server).insert(&new_task).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 9);
    }

    #[tokio::test]
    async fn test_set_completed_filters_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.2"))
            .and(body_json(json!({ "completed": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([row(2, "second", true)])))
            .expect(1)
            .mount(&server)
            .await;

        let rows = store_for(&server).set_completed(2, true).await.unwrap();
        assert!(rows[0].completed);
    }

    #[tokio::test]
    async fn test_delete_filters_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server).delete(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_carries_store_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "PGRST301",
                "message": "JWT expired",
                "details": null,
                "hint": null
            })))
            .mount(&server)
            .await;

        let err = store_for(&server).delete(1).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::Status {
                status: 401,
                message: "JWT expired".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_falls_back_to_body_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let err = store_for(&server).list().await.unwrap_err();
        assert_eq!(
            err,
            StoreError::Status {
                status: 503,
                message: "upstream unavailable".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = store_for(&server).list().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_store_is_transport_error() {
        let store = RestStore::new(StoreConfig::from_values(Some("http://127.0.0.1:9"), Some("k"), None));
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }
}
