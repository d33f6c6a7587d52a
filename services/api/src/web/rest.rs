//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::protocol::QuickActionView;
use axum::response::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_quick_actions_handler,
        health_handler,
    ),
    components(
        schemas(QuickActionView, HealthResponse)
    ),
    tags(
        (name = "Project Support Guide API", description = "Endpoints for the keyword-driven project support chat.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List the quick actions in display order.
#[utoipa::path(
    get,
    path = "/quick-actions",
    responses(
        (status = 200, description = "The fixed quick actions", body = [QuickActionView])
    )
)]
pub async fn list_quick_actions_handler() -> Json<Vec<QuickActionView>> {
    Json(QuickActionView::all())
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "The service is running", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn quick_actions_are_listed_in_order() {
        let Json(actions) = list_quick_actions_handler().await;
        let queries: Vec<_> = actions.iter().map(|a| a.query.as_str()).collect();
        assert_eq!(
            queries,
            [
                "Suggest a project idea",
                "What are the development phases?",
                "What technologies should I use?",
                "Provide learning resources",
            ]
        );
    }

    #[tokio::test]
    async fn quick_actions_use_socket_wire_names() {
        let Json(actions) = list_quick_actions_handler().await;
        let json = serde_json::to_value(&actions).unwrap();
        assert_eq!(json[0]["action"], "project_ideas");
        assert_eq!(json[0]["label"], "Project Ideas");
        assert_eq!(json[3]["action"], "learning_resources");
    }

    #[test]
    fn openapi_document_lists_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/quick-actions"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
