use axum::{
    body::{Bytes, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    response::{JsonApiResponse, log_app_error},
};

const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Rewrites plain-text rejections (unknown routes, bad JSON, wrong method)
/// into the JSON error envelope. Responses that are already JSON pass through.
pub async fn json_error_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if !response.status().is_client_error() && !response.status().is_server_error() {
        return response;
    }

    if is_json_response(&response) {
        return response;
    }

    let status = response.status();
    let (parts, body) = response.into_parts();
    let message = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => body_bytes_to_message(status, bytes),
        Err(_) => default_message(status),
    };
    let app_error = app_error_from_status(status, message);
    if status.is_server_error() {
        log_app_error(&app_error, status);
    }

    let mut new_response = JsonApiResponse::from_error(&app_error).into_response();
    copy_headers(&parts.headers, &mut new_response);
    new_response
}

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let value = value.to_ascii_lowercase();
            value.starts_with("application/json") || value.contains("+json")
        })
        .unwrap_or(false)
}

fn body_bytes_to_message(status: StatusCode, bytes: Bytes) -> String {
    let message = String::from_utf8_lossy(&bytes).trim().to_string();
    if message.is_empty() {
        return default_message(status);
    }
    message
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

fn app_error_from_status(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::BAD_REQUEST => AppError::bad_request(message),
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::METHOD_NOT_ALLOWED => AppError::method_not_allowed(message),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::unsupported_media_type(message),
        StatusCode::UNPROCESSABLE_ENTITY => AppError::bad_request(message),
        _ if status.is_client_error() => AppError::bad_request(message),
        _ => AppError::internal(message),
    }
}

fn copy_headers(src: &HeaderMap, dest: &mut Response) {
    for (name, value) in src {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        dest.headers_mut().insert(name.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_statuses_keep_their_meaning() {
        let err = app_error_from_status(StatusCode::METHOD_NOT_ALLOWED, "nope".into());
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);

        let err = app_error_from_status(StatusCode::UNPROCESSABLE_ENTITY, "bad json".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = app_error_from_status(StatusCode::PAYLOAD_TOO_LARGE, "too big".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_bodies_fall_back_to_reason_phrase() {
        assert_eq!(
            body_bytes_to_message(StatusCode::NOT_FOUND, Bytes::new()),
            "Not Found"
        );
    }
}
