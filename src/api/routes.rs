//! API Routes
//!
//! HTTP endpoint definitions and wire types.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Account, Operation, OperationOutcome};
use crate::error::{AppError, AppResult};
use crate::handlers::OperationHandler;
use crate::store::AccountStore;

// =========================================================================
// Request/Response types
// =========================================================================

/// Inbound operation description for POST /event.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(rename = "type")]
    pub kind: String,

    /// Accepts a JSON string or a JSON number. Numbers are carried as their
    /// decimal text and validated by the operation handler.
    #[serde(deserialize_with = "amount_as_string")]
    pub amount: String,

    #[serde(default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub destination: Option<String>,
}

impl From<EventRequest> for Operation {
    fn from(request: EventRequest) -> Self {
        Operation {
            kind: request.kind,
            amount: request.amount,
            origin: request.origin,
            destination: request.destination,
        }
    }
}

fn amount_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AmountRepr {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Text(text) => text,
        AmountRepr::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct DepositResponse {
    pub destination: Account,
}

#[derive(Debug, Serialize)]
pub struct WithdrawResponse {
    pub origin: Account,
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub origin: Account,
    pub destination: Account,
}

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub account_id: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<Arc<AccountStore>> {
    Router::new()
        .route("/event", post(handle_event))
        .route("/balance", get(get_balance))
        .route("/reset", get(reset).post(reset))
}

// =========================================================================
// POST /event
// =========================================================================

/// Apply a deposit, withdraw, or transfer operation
async fn handle_event(
    State(store): State<Arc<AccountStore>>,
    Json(request): Json<EventRequest>,
) -> AppResult<Response> {
    let handler = OperationHandler::new(store);
    let operation = Operation::from(request);

    let outcome = handler.execute(&operation)?;

    let response = match outcome {
        OperationOutcome::Deposit { destination } => {
            Json(DepositResponse { destination }).into_response()
        }
        OperationOutcome::Withdraw { origin } => {
            Json(WithdrawResponse { origin }).into_response()
        }
        OperationOutcome::Transfer {
            origin,
            destination,
        } => Json(TransferResponse {
            origin,
            destination,
        })
        .into_response(),
    };

    Ok(response)
}

// =========================================================================
// GET /balance
// =========================================================================

/// Look up an account's balance, returned as bare text
async fn get_balance(
    State(store): State<Arc<AccountStore>>,
    Query(query): Query<BalanceQuery>,
) -> AppResult<String> {
    let account = store
        .get(&query.account_id)
        .ok_or_else(|| AppError::AccountNotFound(query.account_id))?;

    Ok(account.balance.to_string())
}

// =========================================================================
// GET|POST /reset
// =========================================================================

/// Clear every account. Succeeds unconditionally and is idempotent.
async fn reset(State(store): State<Arc<AccountStore>>) -> StatusCode {
    store.reset();
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_request_deserialize_string_amount() {
        let json = r#"{"type": "deposit", "amount": "10", "destination": "100"}"#;

        let request: EventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, "deposit");
        assert_eq!(request.amount, "10");
        assert_eq!(request.destination.as_deref(), Some("100"));
        assert!(request.origin.is_none());
    }

    #[test]
    fn test_event_request_deserialize_numeric_amount() {
        let json = r#"{"type": "deposit", "amount": 10, "destination": "100"}"#;

        let request: EventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, "10");
    }

    #[test]
    fn test_event_request_carries_non_integer_number_as_text() {
        // The handler, not the deserializer, decides the amount is invalid
        let json = r#"{"type": "deposit", "amount": 10.5, "destination": "100"}"#;

        let request: EventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, "10.5");
    }

    #[test]
    fn test_event_request_requires_type_and_amount() {
        assert!(serde_json::from_str::<EventRequest>(r#"{"amount": "10"}"#).is_err());
        assert!(serde_json::from_str::<EventRequest>(r#"{"type": "deposit"}"#).is_err());
    }

    #[test]
    fn test_transfer_response_shape() {
        let response = TransferResponse {
            origin: Account::new("100", 700),
            destination: Account::new("200", 300),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "origin": {"id": "100", "balance": 700},
                "destination": {"id": "200", "balance": 300},
            })
        );
    }
}
