pub use crate::{
    error::{ApiError, ApiResult},
    leads::NewLead,
    startup::AppState,
};

pub use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
};
pub use interfacing::{LeadAck, LeadForm};
