use planner::PlannerError;
use reqwest::StatusCode;
use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors talking to the planner API or handling what it returns.
///
/// None of these leave the planning state half-changed: a layout is only
/// restored once it has been fetched and parsed in full.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
