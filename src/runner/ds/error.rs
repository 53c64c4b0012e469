use thiserror::Error;

/// Errors visible to script code, raised by native functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JErrorType {
    #[error("Uncaught type error: {0}.")]
    TypeError(String),
}
