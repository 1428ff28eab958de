//! Writing error responses.
//!
//! Two independent paths: [`ErrorCode::serve_response`] renders any catalog
//! code through the XML serializer, while
//! [`serve_internal_static_error_response`] emits a fixed `InternalError`
//! body assembled from string literals and never fails.

use std::io;

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, info, warn};

use crate::context::RequestContext;
use crate::envelope::{ErrorEnvelope, XML_HEADER};
use crate::error::GatewayError;
use crate::error_code::ErrorCode;

/// Content type of every error body.
pub const CONTENT_TYPE_XML: &str = "application/xml";

/// Outbound response channel.
///
/// Mirrors an HTTP response writer: headers must be set before
/// `write_header`, and the first status written wins.
pub trait ResponseWriter {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn write_header(&mut self, status: StatusCode);

    fn write(&mut self, body: &[u8]) -> io::Result<()>;
}

/// In-memory response that converts into an axum [`Response`].
#[derive(Debug, Default)]
pub struct BufferedResponse {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status written so far, 200 if none was.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ResponseWriter for BufferedResponse {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if self.status.is_some() {
            warn!(header = %name, "Header set after status was written, ignoring");
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_header(&mut self, status: StatusCode) {
        match self.status {
            Some(current) => warn!(%current, ignored = %status, "Superfluous write_header call"),
            None => self.status = Some(status),
        }
    }

    fn write(&mut self, body: &[u8]) -> io::Result<()> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(body);
        Ok(())
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        (self.status(), self.headers, self.body).into_response()
    }
}

impl ErrorCode {
    /// Write this error to `writer` as an XML envelope.
    ///
    /// Fails only when the envelope cannot be serialized or the body write
    /// fails; the caller decides whether to log it or fall back to
    /// [`serve_internal_static_error_response`].
    pub fn serve_response<W, C>(&self, writer: &mut W, ctx: &C) -> Result<(), GatewayError>
    where
        W: ResponseWriter + ?Sized,
        C: RequestContext + ?Sized,
    {
        let envelope = ErrorEnvelope::new(self, ctx);
        let marshaled = envelope.to_xml()?;

        writer.set_header(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_XML));
        writer.write_header(self.status_code());
        info!(
            code = self.code(),
            status = self.status_code().as_u16(),
            request_id = %envelope.request_id,
            "Error info: {}",
            marshaled
        );
        writer.write(marshaled.as_bytes())?;
        Ok(())
    }

    /// Render this error into a response, falling back to the static
    /// internal error if rendering fails.
    pub fn to_response<C: RequestContext + ?Sized>(&self, ctx: &C) -> Response {
        let mut writer = BufferedResponse::new();
        match self.serve_response(&mut writer, ctx) {
            Ok(()) => writer.into_response(),
            Err(e) => {
                error!(code = self.code(), error = %e, "Failed to render error response");
                let mut fallback = BufferedResponse::new();
                serve_internal_static_error_response(&mut fallback, ctx);
                fallback.into_response()
            }
        }
    }
}

/// Write the fixed `InternalError` response without the XML serializer.
///
/// Best effort: a failed body write is logged and dropped.
pub fn serve_internal_static_error_response<W, C>(writer: &mut W, ctx: &C)
where
    W: ResponseWriter + ?Sized,
    C: RequestContext + ?Sized,
{
    writer.set_header(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_XML));
    writer.write_header(StatusCode::INTERNAL_SERVER_ERROR);

    let mut body = String::with_capacity(256);
    body.push_str(XML_HEADER);
    body.push_str("<Error><Code>InternalError</Code><Message>We encountered an internal error. Please try again.</Message><Resource>");
    push_escaped(&mut body, &ctx.resource());
    body.push_str("</Resource><RequestId>");
    push_escaped(&mut body, ctx.request_id().unwrap_or(""));
    body.push_str("</RequestId></Error>");

    if let Err(e) = writer.write(body.as_bytes()) {
        warn!(error = %e, "Failed to write static error response");
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestId;

    fn request(uri: &str, id: Option<&str>) -> axum::http::Request<()> {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(id) = id {
            builder = builder.extension(RequestId::new(id));
        }
        builder.body(()).unwrap()
    }

    fn parse(writer: &BufferedResponse) -> ErrorEnvelope {
        ErrorEnvelope::from_xml(std::str::from_utf8(writer.body()).unwrap()).unwrap()
    }

    /// Writer whose body writes always fail.
    #[derive(Default)]
    struct BrokenPipe {
        status: Option<StatusCode>,
    }

    impl ResponseWriter for BrokenPipe {
        fn set_header(&mut self, _name: HeaderName, _value: HeaderValue) {}

        fn write_header(&mut self, status: StatusCode) {
            self.status = Some(status);
        }

        fn write(&mut self, _body: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"))
        }
    }

    #[test]
    fn test_serve_response_status_and_code() {
        let req = request("/bucket/obj", Some("req-7"));

        for code in ErrorCode::catalog() {
            let mut writer = BufferedResponse::new();
            code.serve_response(&mut writer, &req).unwrap();

            assert_eq!(writer.status(), code.status_code());
            assert_eq!(writer.headers()[header::CONTENT_TYPE], CONTENT_TYPE_XML);

            let envelope = parse(&writer);
            assert_eq!(envelope.code, code.code());
            assert_eq!(envelope.resource, req.resource());
            assert_eq!(Some(envelope.request_id.as_str()), req.request_id());
        }
    }

    #[test]
    fn test_serve_response_without_request_id() {
        let req = request("/bucket", None);
        let mut writer = BufferedResponse::new();
        ErrorCode::NO_SUCH_BUCKET
            .serve_response(&mut writer, &req)
            .unwrap();

        let envelope = parse(&writer);
        assert_eq!(envelope.request_id, "");
        assert_eq!(writer.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_serve_response_write_failure() {
        let req = request("/bucket", Some("req-1"));
        let mut writer = BrokenPipe::default();

        let result = ErrorCode::ACCESS_DENIED.serve_response(&mut writer, &req);
        assert!(matches!(result, Err(GatewayError::Io(_))));
        assert_eq!(writer.status, Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn test_static_response_is_fixed() {
        for req in [
            request("/bucket/key", Some("req-9")),
            request("/bucket/key", None),
            request("/", None),
        ] {
            let mut writer = BufferedResponse::new();
            serve_internal_static_error_response(&mut writer, &req);

            assert_eq!(writer.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(writer.headers()[header::CONTENT_TYPE], CONTENT_TYPE_XML);

            let envelope = parse(&writer);
            assert_eq!(envelope.code, ErrorCode::INTERNAL_ERROR.code());
            assert_eq!(envelope.message, ErrorCode::INTERNAL_ERROR.message());
            assert_eq!(envelope.resource, req.resource());
            assert_eq!(envelope.request_id, req.request_id().unwrap_or(""));
        }
    }

    #[test]
    fn test_static_response_escapes_resource() {
        let req = request("/b/k?tag=%3Cx%3E&v=1", Some("r&1<'2'>"));
        let mut writer = BufferedResponse::new();
        serve_internal_static_error_response(&mut writer, &req);

        let text = std::str::from_utf8(writer.body()).unwrap();
        assert!(text.contains("<RequestId>r&amp;1&lt;&apos;2&apos;&gt;</RequestId>"));
        assert!(text.contains("<Resource>/b/k?tag=%3Cx%3E&amp;v=1</Resource>"));

        let envelope = parse(&writer);
        assert_eq!(envelope.resource, "/b/k?tag=%3Cx%3E&v=1");
        assert_eq!(envelope.request_id, "r&1<'2'>");
    }

    #[test]
    fn test_static_response_swallows_write_failure() {
        let req = request("/bucket", None);
        let mut writer = BrokenPipe::default();
        serve_internal_static_error_response(&mut writer, &req);
        assert_eq!(writer.status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_first_status_wins() {
        let mut writer = BufferedResponse::new();
        writer.write_header(StatusCode::CONFLICT);
        writer.write_header(StatusCode::OK);
        writer.set_header(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert_eq!(writer.status(), StatusCode::CONFLICT);
        assert!(writer.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_to_response() {
        let req = request("/bucket", Some("req-2"));
        let response = ErrorCode::BUCKET_NOT_EMPTY.to_response(&req);
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(response.headers()[header::CONTENT_TYPE], CONTENT_TYPE_XML);
    }
}
