// ============================================================================
// Order Rejection Errors
// ============================================================================
//
// None of these are fatal: each is reported as a diagnostic and the caller
// either returns without a product or skips the offending input.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Pizza type cannot be empty")]
    EmptyKind,

    #[error("Invalid pizza type: {0}")]
    UnknownKind(String),

    #[error("Unknown topping: {0}")]
    UnknownTopping(String),
}
