use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Результат обращения к REST API
pub type ApiResult<T> = Result<T, ApiError>;

/// What went wrong talking to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// The request never got a response
    Network,
    /// 4xx carrying a `detail` payload
    Validation,
    /// Any other non-success status
    Http,
    /// The response body could not be parsed
    Decode,
}

impl ApiErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::Validation => "VALIDATION_ERROR",
            Self::Http => "HTTP_ERROR",
            Self::Decode => "DECODE_ERROR",
        }
    }
}

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// `detail` returned by the API, verbatim (structured details pretty-printed)
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn http(status: u16) -> Self {
        Self::new(ApiErrorKind::Http, format!("HTTP {}", status))
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message)
    }

    /// Build an error from a non-success response.
    ///
    /// Error bodies look like `{"detail": "..."}` or `{"detail": [{...}]}`. Anything else
    /// (HTML error pages, empty bodies) falls back to the status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorResponse {
            detail: Option<Value>,
        }

        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.detail)
            .and_then(|d| match d {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => serde_json::to_string_pretty(&other).ok(),
            });

        match detail {
            Some(detail) => {
                let kind = if (400..500).contains(&status) {
                    ApiErrorKind::Validation
                } else {
                    ApiErrorKind::Http
                };
                Self::new(kind, format!("HTTP {}", status)).with_detail(detail)
            }
            None => Self::http(status),
        }
    }

    /// Text shown to the user: the API detail when there is one.
    pub fn user_message(&self) -> String {
        self.detail.clone().unwrap_or_else(|| self.message.clone())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.code(), self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::decode(err.to_string())
    }
}
