//! Field-filtered envelope serialization and the response type handlers return.
//!
//! [`render`] never fails: a filtered encoding is tried first, then an
//! unfiltered EXCEPTION envelope, and finally a fixed body.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::api::envelope::{GenericApiResponse, ResponseCode};
use crate::api::filter::FieldFilter;
use crate::error::{AppError, SERIALIZATION_FAILED};

/// Body emitted when even the fallback envelope cannot be encoded.
pub const FALLBACK_BODY: &str =
    r#"{"responseCode":"EXCEPTION","responseData":null,"errorMessage":"Internal Server Error."}"#;

/// An encoded envelope, always sent as `200 OK` with a JSON content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeResponse(String);

impl EnvelopeResponse {
    pub fn body(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.0,
        )
            .into_response()
    }
}

/// Encodes an envelope, restricting `responseData` to `filter` when given.
///
/// Without a filter every field is emitted.
///
/// # Errors
///
/// Returns [`AppError::Serialization`] if the payload cannot be encoded.
pub fn to_json<T: Serialize>(
    envelope: &GenericApiResponse<T>,
    filter: Option<&FieldFilter>,
) -> Result<String, AppError> {
    let mut value = serde_json::to_value(envelope)?;

    if let Some(filter) = filter
        && let Some(data) = value.get_mut("responseData")
    {
        filter.apply(data);
    }

    Ok(serde_json::to_string(&value)?)
}

/// Encodes an envelope for the wire, degrading instead of failing.
pub fn render<T: Serialize>(
    envelope: GenericApiResponse<T>,
    filter: Option<&FieldFilter>,
) -> EnvelopeResponse {
    let e = match to_json(&envelope, filter) {
        Ok(body) => return EnvelopeResponse(body),
        Err(e) => e,
    };
    tracing::error!(
        error = %e,
        filter = ?filter.map(FieldFilter::name),
        code = ?envelope.response_code,
        "envelope serialization failed"
    );

    let fallback = GenericApiResponse::<T>::failure(ResponseCode::Exception, SERIALIZATION_FAILED);
    match to_json(&fallback, None) {
        Ok(body) => EnvelopeResponse(body),
        Err(e) => {
            tracing::error!(error = %e, "fallback envelope serialization failed");
            EnvelopeResponse(FALLBACK_BODY.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::filter::{USER_DETAIL_FILTER, USER_ROLE_FILTER};
    use axum::body::to_bytes;
    use serde::Serializer;
    use serde_json::{Value, json};

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_filtered_payload_keys() {
        let envelope = GenericApiResponse::success(json!({
            "id": 1,
            "name": "admin",
            "description": "Administrators",
            "internal": 42
        }));

        let body = to_json(&envelope, Some(&USER_ROLE_FILTER)).unwrap();

        assert_eq!(
            parse(&body),
            json!({
                "responseCode": "SUCCESS",
                "responseData": {"id": 1, "name": "admin", "description": "Administrators"},
                "errorMessage": ""
            })
        );
    }

    #[test]
    fn test_no_filter_keeps_everything() {
        let envelope = GenericApiResponse::success(json!({"id": 1, "internal": 42}));

        let body = to_json(&envelope, None).unwrap();

        assert_eq!(parse(&body)["responseData"], json!({"id": 1, "internal": 42}));
    }

    #[test]
    fn test_filter_only_touches_response_data() {
        let envelope = GenericApiResponse::<Value>::not_found(
            ResponseCode::UserNotFound,
            "User not found.",
        );

        let body = to_json(&envelope, Some(&USER_DETAIL_FILTER)).unwrap();

        assert_eq!(
            parse(&body),
            json!({
                "responseCode": "USER_NOT_FOUND",
                "responseData": "",
                "errorMessage": "User not found."
            })
        );
    }

    #[test]
    fn test_field_order_follows_envelope() {
        let body = to_json(&GenericApiResponse::<Value>::done(), None).unwrap();

        assert_eq!(
            body,
            r#"{"responseCode":"SUCCESS","responseData":null,"errorMessage":null}"#
        );
    }

    #[test]
    fn test_to_json_reports_serialization_error() {
        let result = to_json(&GenericApiResponse::success(Unencodable), None);

        assert!(matches!(result, Err(AppError::Serialization { .. })));
    }

    #[test]
    fn test_render_degrades_to_exception_envelope() {
        let response = render(
            GenericApiResponse::success(Unencodable),
            Some(&USER_DETAIL_FILTER),
        );

        assert_eq!(
            parse(response.body()),
            json!({
                "responseCode": "EXCEPTION",
                "responseData": null,
                "errorMessage": "Converting object to JSON failed."
            })
        );
    }

    #[test]
    fn test_fallback_body_is_valid_envelope() {
        let value = parse(FALLBACK_BODY);

        assert_eq!(value["responseCode"], "EXCEPTION");
        assert_eq!(value["responseData"], Value::Null);
        assert_eq!(value["errorMessage"], crate::error::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_envelope_response_is_200_json() {
        let response = render(GenericApiResponse::success(json!([])), None).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(parse(std::str::from_utf8(&bytes).unwrap())["responseData"], json!([]));
    }
}
