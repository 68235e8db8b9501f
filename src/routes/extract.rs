use axum::{
    Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

const ACCEPTED_PATCH_TYPES: [&str; 2] = ["application/merge-patch+json", "application/json"];

/// JSON body restricted to the merge-patch content types.
pub struct MergePatch<T>(pub T);

impl<S, T> FromRequest<S> for MergePatch<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_patch_content_type(&content_type) {
            return Err(AppError::unsupported_media_type(format!(
                "Content-Type '{content_type}' is not supported, expected one of {}",
                ACCEPTED_PATCH_TYPES.join(", ")
            )));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn is_patch_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    ACCEPTED_PATCH_TYPES.contains(&mime.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_merge_patch_and_plain_json() {
        assert!(is_patch_content_type("application/merge-patch+json"));
        assert!(is_patch_content_type("application/json; charset=utf-8"));
        assert!(is_patch_content_type("Application/JSON"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_patch_content_type(""));
        assert!(!is_patch_content_type("text/plain"));
        assert!(!is_patch_content_type("application/vnd.smartwake+json"));
    }
}
