// src/common/response.rs

use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::{ListPage, MAX_PAGE_SIZE};

pub const RESULT_LIMIT_HEADER: HeaderName = HeaderName::from_static("x-result-limit");
pub const RESULT_TRUNCATED_HEADER: HeaderName = HeaderName::from_static("x-result-truncated");

// O corpo continua sendo um array JSON simples; o corte no teto vai nos cabeçalhos.
impl<T: Serialize> IntoResponse for ListPage<T> {
    fn into_response(self) -> Response {
        let truncated = if self.truncated { "true" } else { "false" };
        (
            [
                (RESULT_LIMIT_HEADER, HeaderValue::from(MAX_PAGE_SIZE)),
                (RESULT_TRUNCATED_HEADER, HeaderValue::from_static(truncated)),
            ],
            Json(self.items),
        )
            .into_response()
    }
}
