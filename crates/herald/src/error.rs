use thiserror::Error;

// ---------------------------------------------------------------------------
// EmitterError
// ---------------------------------------------------------------------------

/// Failures reported by the strict `try_*` registration methods.
///
/// The lenient methods (`on`, `once`, `off`, `offs`) swallow these and return
/// `None` / do nothing instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitterError {
    #[error("Event name is empty: expected at least one whitespace-separated name")]
    EmptyName,
}

/// Convenience alias — the default error type is `EmitterError`.
pub type Result<T, E = EmitterError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
