use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use hyper::StatusCode;
use interfacing::ErrorBody;

use crate::leads::LeadError;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Json is rejected")]
    JsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    InvalidLead(#[from] LeadError),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::JsonRejection(_) => StatusCode::BAD_REQUEST,
            Self::InvalidLead(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the caller gets to read.
    fn public_message(&self) -> String {
        match self {
            Self::JsonRejection(rejection) => rejection.body_text(),
            Self::UnexpectedError(_) => "Internal server error".into(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let trace_message = match &self {
            Self::JsonRejection(rejection) => format!("{}: {}", self, rejection),
            Self::UnexpectedError(e) => format!("{:?}", e),
            _ => self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("{}", trace_message);
        } else {
            tracing::warn!("{}", trace_message);
        }

        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
