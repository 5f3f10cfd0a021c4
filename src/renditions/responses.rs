use crate::pipeline::driver::Rendition;
use axum::response::{IntoResponse, Response};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderValue, StatusCode};

pub fn rendition(rendition: Rendition) -> Response {
    // The content type is fixed to image/jpeg regardless of the encoded
    // format; existing consumers depend on it.
    let headers = [
        (CONTENT_TYPE, HeaderValue::from_static("image/jpeg")),
        (CONTENT_LENGTH, HeaderValue::from(rendition.bytes.len())),
    ];
    (StatusCode::OK, headers, rendition.bytes).into_response()
}

pub fn bad_request(err: impl std::fmt::Display) -> Response {
    (StatusCode::BAD_REQUEST, err.to_string()).into_response()
}

pub fn internal_error() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
