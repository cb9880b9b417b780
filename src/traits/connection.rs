use async_trait::async_trait;

use crate::traits::NativeStatement;

/// Error details reported by the native client after a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    pub message: String,
    pub code: u32,
}

impl NativeError {
    pub fn new(message: impl Into<String>, code: u32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

/// Trait for the native connection handle a statement borrows.
/// The connection's lifecycle (open/close) is managed outside this crate;
/// statements only ask it to compile SQL into prepared handles.
#[async_trait]
pub trait NativeConnection: Send + Sync {
    /// Compile `sql` into a native prepared-statement handle.
    ///
    /// Returns `None` when the native client rejects the text; the details
    /// are then available from [`NativeConnection::last_error`].
    async fn prepare_statement(&self, sql: &str) -> Option<Box<dyn NativeStatement>>;

    /// Error detail for the most recent failed call on this connection.
    fn last_error(&self) -> NativeError;
}
