use async_trait::async_trait;

use crate::types::{RawResult, SqlValue};

/// Trait for a native prepared-statement handle.
/// Handles are produced by [`NativeConnection::prepare_statement`] and are
/// exclusively owned by the `Statement` that prepared them.
///
/// [`NativeConnection::prepare_statement`]: crate::traits::NativeConnection::prepare_statement
#[async_trait]
pub trait NativeStatement: Send {
    /// Bind positional values in one call: `signature` carries one type
    /// code per position ('i', 'd' or 's'), `values` the matching values.
    /// The slice is mutable because the native client may need writable
    /// storage for the bound values.
    async fn bind_params(&mut self, signature: &str, values: &mut [SqlValue]);

    /// Run the statement. `false` signals failure; the detail is available
    /// from [`NativeStatement::last_error`].
    async fn run(&mut self) -> bool;

    /// Error message for the most recent failed run.
    fn last_error(&self) -> String;

    /// Raw result produced by the most recent successful run. Called by the
    /// result factory, not by the statement adapter itself.
    fn take_result(&mut self) -> RawResult;
}
