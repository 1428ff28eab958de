//! Catalog of gateway error codes.

use std::fmt;

use axum::http::StatusCode;

/// A named error condition reported to gateway callers.
///
/// Only the associated constants below exist; call sites pick one of them
/// rather than building codes of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    code: &'static str,
    message: &'static str,
    status: StatusCode,
}

impl ErrorCode {
    const fn new(code: &'static str, message: &'static str, status: StatusCode) -> Self {
        Self {
            code,
            message,
            status,
        }
    }

    /// Machine-readable identifier sent as `<Code>`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Default description sent as `<Message>`. Empty when the caller must supply context.
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub const UNSUPPORTED_OPERATION: Self = Self::new(
        "UnsupportedOperation",
        "Operation is not supported",
        StatusCode::BAD_REQUEST,
    );
    pub const ACCESS_DENIED: Self =
        Self::new("AccessDenied", "Access Denied", StatusCode::FORBIDDEN);
    pub const BAD_DIGEST: Self = Self::new(
        "BadDigest",
        "The Content-MD5 you specified did not match what we received.",
        StatusCode::BAD_REQUEST,
    );
    pub const BUCKET_NOT_EXISTED: Self = Self::new(
        "BucketNotExisted",
        "The requested bucket name is not existed.",
        StatusCode::NOT_FOUND,
    );
    /// Same condition as [`BUCKET_NOT_EXISTED`](Self::BUCKET_NOT_EXISTED), reported on HEAD.
    pub const BUCKET_NOT_EXISTED_FOR_HEAD: Self = Self::new(
        "BucketNotExisted",
        "The requested bucket name is not existed.",
        StatusCode::CONFLICT,
    );
    pub const BUCKET_NOT_EMPTY: Self = Self::new(
        "BucketNotEmpty",
        "The bucket you tried to delete is not empty.",
        StatusCode::CONFLICT,
    );
    pub const BUCKET_NOT_OWNED_BY_YOU: Self = Self::new(
        "BucketNotOwnedByYou",
        "The bucket is not owned by you.",
        StatusCode::CONFLICT,
    );
    pub const KEY_TOO_LONG_ERROR: Self =
        Self::new("KeyTooLongError", "", StatusCode::BAD_REQUEST);
    pub const INVALID_KEY: Self =
        Self::new("InvalidKey", "Object key is Illegal", StatusCode::BAD_REQUEST);
    pub const ENTITY_TOO_SMALL: Self = Self::new(
        "EntityTooSmall",
        "Your proposed upload is smaller than the minimum allowed object size.",
        StatusCode::BAD_REQUEST,
    );
    pub const ENTITY_TOO_LARGE: Self = Self::new(
        "EntityTooLarge",
        "Your proposed upload exceeds the maximum allowed object size.",
        StatusCode::BAD_REQUEST,
    );
    pub const INCORRECT_NUMBER_OF_FILES_IN_POST_REQUEST: Self = Self::new(
        "IncorrectNumberOfFilesInPostRequest",
        "POST requires exactly one file upload per request.",
        StatusCode::BAD_REQUEST,
    );
    pub const INTERNAL_ERROR: Self = Self::new(
        "InternalError",
        "We encountered an internal error. Please try again.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const INVALID_ARGUMENT: Self =
        Self::new("InvalidArgument", "Invalid Argument", StatusCode::BAD_REQUEST);
    pub const INVALID_BUCKET_NAME: Self = Self::new(
        "InvalidBucketName",
        "The specified bucket is not valid.",
        StatusCode::BAD_REQUEST,
    );
    pub const INVALID_RANGE: Self = Self::new(
        "InvalidRange",
        "The requested range cannot be satisfied.",
        StatusCode::RANGE_NOT_SATISFIABLE,
    );
    pub const MISSING_CONTENT_LENGTH: Self = Self::new(
        "MissingContentLength",
        "You must provide the Content-Length HTTP header.",
        StatusCode::LENGTH_REQUIRED,
    );
    pub const NO_SUCH_BUCKET: Self = Self::new(
        "NoSuchBucket",
        "The specified bucket does not exist.",
        StatusCode::NOT_FOUND,
    );
    pub const NO_SUCH_KEY: Self = Self::new(
        "NoSuchKey",
        "The specified key does not exist.",
        StatusCode::NOT_FOUND,
    );
    pub const PRECONDITION_FAILED: Self = Self::new(
        "PreconditionFailed",
        "At least one of the preconditions you specified did not hold.",
        StatusCode::PRECONDITION_FAILED,
    );
    pub const MAX_CONTENT_LENGTH: Self = Self::new(
        "MaxContentLength",
        "Content-Length is bigger than 20KB.",
        StatusCode::LENGTH_REQUIRED,
    );

    /// Every registered code.
    pub fn catalog() -> &'static [ErrorCode] {
        &CATALOG
    }

    /// Find the first registered code with the given identifier.
    pub fn lookup(code: &str) -> Option<ErrorCode> {
        CATALOG.iter().find(|c| c.code == code).copied()
    }
}

static CATALOG: [ErrorCode; 21] = [
    ErrorCode::UNSUPPORTED_OPERATION,
    ErrorCode::ACCESS_DENIED,
    ErrorCode::BAD_DIGEST,
    ErrorCode::BUCKET_NOT_EXISTED,
    ErrorCode::BUCKET_NOT_EXISTED_FOR_HEAD,
    ErrorCode::BUCKET_NOT_EMPTY,
    ErrorCode::BUCKET_NOT_OWNED_BY_YOU,
    ErrorCode::KEY_TOO_LONG_ERROR,
    ErrorCode::INVALID_KEY,
    ErrorCode::ENTITY_TOO_SMALL,
    ErrorCode::ENTITY_TOO_LARGE,
    ErrorCode::INCORRECT_NUMBER_OF_FILES_IN_POST_REQUEST,
    ErrorCode::INTERNAL_ERROR,
    ErrorCode::INVALID_ARGUMENT,
    ErrorCode::INVALID_BUCKET_NAME,
    ErrorCode::INVALID_RANGE,
    ErrorCode::MISSING_CONTENT_LENGTH,
    ErrorCode::NO_SUCH_BUCKET,
    ErrorCode::NO_SUCH_KEY,
    ErrorCode::PRECONDITION_FAILED,
    ErrorCode::MAX_CONTENT_LENGTH,
];

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.status.as_u16())
    }
}
