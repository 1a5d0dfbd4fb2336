//! HTTP Handlers

use axum::{Json, http::StatusCode};
use serde::Serialize;

use portfolio_advisor::{AdvisorError, BotResponse, IntentRequest, handle_event};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Intent fulfillment endpoint. The bot platform posts the invocation event
/// here and receives the dialog action to execute next.
pub async fn fulfillment_handler(
    Json(event): Json<IntentRequest>,
) -> Result<Json<BotResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = uuid::Uuid::new_v4();
    tracing::info!(
        %request_id,
        intent = %event.current_intent.name,
        source = ?event.invocation_source,
        "fulfillment event received"
    );

    match handle_event(&event) {
        Ok(response) => Ok(Json(response)),
        Err(err @ AdvisorError::UnsupportedIntent(_)) => {
            tracing::warn!(%request_id, error = %err, "rejecting event");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: "UNSUPPORTED_INTENT".into(),
                }),
            ))
        }
        Err(err) => {
            tracing::error!(%request_id, error = %err, "fulfillment failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: "INTERNAL_ERROR".into(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_advisor::DialogAction;

    fn sample_event(intent: &str) -> IntentRequest {
        serde_json::from_value(serde_json::json!({
            "currentIntent": {
                "name": intent,
                "slots": {
                    "firstName": "Ana",
                    "age": "30",
                    "investmentAmount": "10000",
                    "riskLevel": "Medium"
                }
            },
            "invocationSource": "FulfillmentCodeHook",
            "sessionAttributes": {}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_fulfillment_handler_happy_path() {
        let response = fulfillment_handler(Json(sample_event("RecommendPortfolio")))
            .await
            .unwrap();
        assert!(matches!(
            response.0.dialog_action,
            DialogAction::Close { .. }
        ));
    }

    #[tokio::test]
    async fn test_fulfillment_handler_unknown_intent() {
        let (status, body) = fulfillment_handler(Json(sample_event("Unknown")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.code, "UNSUPPORTED_INTENT");
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await;
        assert_eq!(response.0.status, "healthy");
    }
}
