//! Object gateway error responses.
//!
//! Provides:
//! - The fixed catalog of gateway error codes ([`ErrorCode`])
//! - The XML error envelope ([`ErrorEnvelope`])
//! - Request id assignment and lookup ([`RequestId`], [`RequestContext`])
//! - The structured and the static error response paths

pub mod context;
pub mod envelope;
pub mod error;
pub mod error_code;
pub mod response;

pub use context::{assign_request_id, RequestContext, RequestId, REQUEST_ID_HEADER};
pub use envelope::ErrorEnvelope;
pub use error::GatewayError;
pub use error_code::ErrorCode;
pub use response::{serve_internal_static_error_response, BufferedResponse, ResponseWriter};
