//! # SAFE CALL
//!
//! Runs a computation and hands back its outcome as a value: either
//! `Result(T)` or `Error(E)`, never both. Nothing is logged, retried or
//! wrapped; the error is the one the computation produced.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

/// Payload of a caught panic, exactly as passed to `panic!` / `panic_any`.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Outcome of a guarded call. Serializes as `{"result": ...}` or
/// `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeCallResult<T, E> {
    Result(T),
    Error(E),
}

/// Run `f`, catching an unwinding panic.
///
/// Requires `panic = "unwind"`; under `abort` the process still terminates.
pub fn safe_call<T, F>(f: F) -> SafeCallResult<T, PanicPayload>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => SafeCallResult::Result(value),
        Err(payload) => SafeCallResult::Error(payload),
    }
}

/// Run a fallible `f` and keep its error as a value.
pub fn safe_try<T, E, F>(f: F) -> SafeCallResult<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    f().into()
}

impl<T, E> SafeCallResult<T, E> {
    pub fn is_result(&self) -> bool {
        matches!(self, SafeCallResult::Result(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SafeCallResult::Error(_))
    }

    pub fn result(self) -> Option<T> {
        match self {
            SafeCallResult::Result(value) => Some(value),
            SafeCallResult::Error(_) => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            SafeCallResult::Result(_) => None,
            SafeCallResult::Error(err) => Some(err),
        }
    }

    pub fn as_ref(&self) -> SafeCallResult<&T, &E> {
        match self {
            SafeCallResult::Result(value) => SafeCallResult::Result(value),
            SafeCallResult::Error(err) => SafeCallResult::Error(err),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SafeCallResult<U, E> {
        match self {
            SafeCallResult::Result(value) => SafeCallResult::Result(f(value)),
            SafeCallResult::Error(err) => SafeCallResult::Error(err),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for SafeCallResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => SafeCallResult::Result(value),
            Err(err) => SafeCallResult::Error(err),
        }
    }
}

impl<T, E> From<SafeCallResult<T, E>> for Result<T, E> {
    fn from(outcome: SafeCallResult<T, E>) -> Self {
        match outcome {
            SafeCallResult::Result(value) => Ok(value),
            SafeCallResult::Error(err) => Err(err),
        }
    }
}
