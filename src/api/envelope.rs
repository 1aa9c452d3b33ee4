//! The uniform response envelope.
//!
//! Every endpoint answers with
//!
//! ```json
//! { "responseCode": "SUCCESS", "responseData": ..., "errorMessage": "" }
//! ```
//!
//! `responseCode` carries the real outcome; the HTTP status is always `200`.
//! `errorMessage` is null or empty exactly when the code is
//! [`ResponseCode::Success`], which the constructors below guarantee.

use serde::{Deserialize, Serialize, Serializer};

/// Fixed set of outcome codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Success,
    UserNotFound,
    UserRoleNotFound,
    Error,
    Exception,
}

impl ResponseCode {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Payload slot of the envelope.
///
/// Read endpoints start out with [`ResponseData::Blank`] (encoded as `""`),
/// mutations and failures carry [`ResponseData::Null`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData<T> {
    Payload(T),
    Blank,
    Null,
}

impl<T: Serialize> Serialize for ResponseData<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Payload(data) => data.serialize(serializer),
            Self::Blank => serializer.serialize_str(""),
            Self::Null => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericApiResponse<T> {
    pub response_code: ResponseCode,
    pub response_data: ResponseData<T>,
    pub error_message: Option<String>,
}

impl<T> GenericApiResponse<T> {
    /// Successful read: payload with an empty message.
    pub fn success(data: T) -> Self {
        Self {
            response_code: ResponseCode::Success,
            response_data: ResponseData::Payload(data),
            error_message: Some(String::new()),
        }
    }

    /// Successful mutation: payload with a null message.
    pub fn applied(data: T) -> Self {
        Self {
            response_code: ResponseCode::Success,
            response_data: ResponseData::Payload(data),
            error_message: None,
        }
    }

    /// Successful mutation with nothing to return.
    pub fn done() -> Self {
        Self {
            response_code: ResponseCode::Success,
            response_data: ResponseData::Null,
            error_message: None,
        }
    }

    /// Read that found nothing; `responseData` is `""`.
    pub fn not_found(code: ResponseCode, message: impl Into<String>) -> Self {
        Self::unsuccessful(code, ResponseData::Blank, message.into())
    }

    /// Any other failed outcome; `responseData` is `null`.
    pub fn failure(code: ResponseCode, message: impl Into<String>) -> Self {
        Self::unsuccessful(code, ResponseData::Null, message.into())
    }

    fn unsuccessful(code: ResponseCode, data: ResponseData<T>, message: String) -> Self {
        debug_assert!(!code.is_success(), "failure envelope built with SUCCESS");
        debug_assert!(!message.is_empty(), "failure envelope without a message");
        Self {
            response_code: code,
            response_data: data,
            error_message: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code.is_success()
    }
}
