use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Debug;

pub const ENV_VAR: i32 = 1;
pub const DATABASE: i32 = 2;
pub const REQWEST: i32 = 3;
pub const UPSTREAM: i32 = 4;
pub const UNEXPECTED: i32 = 5;

pub const INVALID_STATE: i32 = 100;
pub const INVALID_INPUT: i32 = 101;
pub const INSUFFICIENT_PLACES: i32 = 102;
pub const ROUTE_NOT_FOUND: i32 = 103;
pub const NOT_FOUND: i32 = 104;
pub const UNAUTHENTICATED: i32 = 105;
pub const UNAUTHORIZED: i32 = 106;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<oso::OsoError> for Error {
    fn from(err: oso::OsoError) -> Self {
        unexpected_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            ROUTE_NOT_FOUND | NOT_FOUND => (StatusCode::NOT_FOUND, self.message.as_str()),
            UNAUTHENTICATED => (StatusCode::UNAUTHORIZED, self.message.as_str()),
            UNAUTHORIZED => (StatusCode::FORBIDDEN, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "success": false,
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: INVALID_STATE,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: INVALID_INPUT,
        message: "invalid input".into(),
    }
}

pub fn insufficient_places_error() -> Error {
    Error {
        code: INSUFFICIENT_PLACES,
        message: "a route requires exactly two saved places".into(),
    }
}

pub fn route_not_found_error() -> Error {
    Error {
        code: ROUTE_NOT_FOUND,
        message: "no route found between the given points".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: NOT_FOUND,
        message: "not found".into(),
    }
}

pub fn unauthenticated_error() -> Error {
    Error {
        code: UNAUTHENTICATED,
        message: "authentication required".into(),
    }
}

pub fn unauthorized_error() -> Error {
    Error {
        code: UNAUTHORIZED,
        message: "unauthorized".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: ENV_VAR,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(_: T) -> Error {
    Error {
        code: DATABASE,
        message: "database error".into(),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: REQWEST,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: UPSTREAM,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error<T: Debug>(_: T) -> Error {
    Error {
        code: UNEXPECTED,
        message: "unexpected error".into(),
    }
}
