use std::fmt::Display;

use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponseParts, ResponseParts},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::AppError;

/// Characters left as-is in an identifier echoed into an alert header.
const IDENTIFIER: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `X-<app>-alert` / `X-<app>-params` headers attached to mutation responses.
///
/// The identifier is percent-encoded, so any path id yields a valid header.
#[derive(Debug, Clone)]
pub struct EntityAlert {
    application: String,
    message: String,
    param: String,
}

impl EntityAlert {
    pub fn created(application: &str, entity: &str, id: impl Display) -> Self {
        let id = encode_identifier(id);
        Self::new(
            application,
            format!("A new {entity} is created with identifier {id}"),
            id,
        )
    }

    pub fn updated(application: &str, entity: &str, id: impl Display) -> Self {
        let id = encode_identifier(id);
        Self::new(
            application,
            format!("A {entity} is updated with identifier {id}"),
            id,
        )
    }

    pub fn deleted(application: &str, entity: &str, id: impl Display) -> Self {
        let id = encode_identifier(id);
        Self::new(
            application,
            format!("A {entity} is deleted with identifier {id}"),
            id,
        )
    }

    fn new(application: &str, message: String, param: String) -> Self {
        Self {
            application: application.to_string(),
            message,
            param,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponseParts for EntityAlert {
    type Error = AppError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let alert = alert_header_name(&self.application, "alert")
            .map_err(|err| AppError::internal(format!("invalid alert header name: {err}")))?;
        let params = alert_header_name(&self.application, "params")
            .map_err(|err| AppError::internal(format!("invalid alert header name: {err}")))?;
        res.headers_mut().insert(alert, header_value(&self.message)?);
        res.headers_mut().insert(params, header_value(&self.param)?);
        Ok(res)
    }
}

/// Builds `x-<application>-<suffix>`; config validation uses it to reject
/// application names that cannot appear in a header name.
pub fn alert_header_name(
    application: &str,
    suffix: &str,
) -> Result<HeaderName, axum::http::header::InvalidHeaderName> {
    HeaderName::from_bytes(format!("x-{application}-{suffix}").as_bytes())
}

fn encode_identifier(id: impl Display) -> String {
    utf8_percent_encode(&id.to_string(), IDENTIFIER).to_string()
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|err| AppError::internal(format!("invalid alert header value: {err}")))
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn messages_follow_the_operation() {
        assert_eq!(
            EntityAlert::created("smartwakeApp", "alarm", "a1").message(),
            "A new alarm is created with identifier a1"
        );
        assert_eq!(
            EntityAlert::updated("smartwakeApp", "userLogin", 4).message(),
            "A userLogin is updated with identifier 4"
        );
        assert_eq!(
            EntityAlert::deleted("smartwakeApp", "userLogin", 4).message(),
            "A userLogin is deleted with identifier 4"
        );
    }

    #[test]
    fn headers_are_prefixed_with_the_application_name() {
        let response = (EntityAlert::deleted("smartwakeApp", "alarm", "a1"), "").into_response();
        let headers = response.headers();

        assert_eq!(
            headers.get("x-smartwakeapp-alert").and_then(|v| v.to_str().ok()),
            Some("A alarm is deleted with identifier a1")
        );
        assert_eq!(
            headers.get("X-smartwakeApp-params").and_then(|v| v.to_str().ok()),
            Some("a1")
        );
    }

    #[test]
    fn control_characters_in_identifiers_are_encoded() {
        let alert = EntityAlert::deleted("smartwakeApp", "alarm", "a\nb c");
        assert_eq!(alert.message(), "A alarm is deleted with identifier a%0Ab%20c");

        let response = (alert, "").into_response();
        assert_eq!(
            response
                .headers()
                .get("x-smartwakeapp-params")
                .and_then(|v| v.to_str().ok()),
            Some("a%0Ab%20c")
        );
    }

    #[test]
    fn uuid_identifiers_pass_through_unchanged() {
        let id = "0f8fad5b-d9cb-469f-a165-70867728950e";
        assert_eq!(
            EntityAlert::created("smartwakeApp", "alarm", id).message(),
            format!("A new alarm is created with identifier {id}")
        );
    }

    #[test]
    fn application_names_with_spaces_are_not_header_names() {
        assert!(alert_header_name("smart wake", "alert").is_err());
        assert!(alert_header_name("smartwakeApp", "alert").is_ok());
    }
}
