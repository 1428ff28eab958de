//! Request correlation ids and request context access.

use std::fmt;

use axum::extract::Request;
use axum::http::{request::Parts, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;
use uuid::Uuid;

/// Response header carrying the request id back to the caller.
pub const REQUEST_ID_HEADER: &str = "x-amz-request-id";

/// Correlation id of one inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Create a new RequestId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random RequestId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string().to_uppercase())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// What an error envelope needs to know about the failed request.
pub trait RequestContext {
    /// Target of the request, sent as `<Resource>`.
    fn resource(&self) -> String;

    /// Correlation id, if one was assigned.
    fn request_id(&self) -> Option<&str>;
}

impl<B> RequestContext for axum::http::Request<B> {
    fn resource(&self) -> String {
        self.uri().to_string()
    }

    fn request_id(&self) -> Option<&str> {
        self.extensions().get::<RequestId>().map(RequestId::as_str)
    }
}

impl RequestContext for Parts {
    fn resource(&self) -> String {
        self.uri.to_string()
    }

    fn request_id(&self) -> Option<&str> {
        self.extensions.get::<RequestId>().map(RequestId::as_str)
    }
}

/// Middleware assigning every request a fresh [`RequestId`].
///
/// The id is stored as a request extension and echoed in the
/// [`REQUEST_ID_HEADER`] response header.
pub async fn assign_request_id(mut request: Request, next: Next) -> Response {
    let id = RequestId::generate();
    debug!(request_id = %id, uri = %request.uri(), "Assigned request id");
    request.extensions_mut().insert(id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}
