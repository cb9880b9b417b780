use crate::traits::NativeStatement;
use crate::types::QueryResult;

/// Trait for the driver-owned result factory.
/// After a successful run the statement adapter hands the native handle
/// over and returns whatever wrapper the factory produces; the adapter
/// never shapes the result itself.
pub trait ResultFactory: Send + Sync {
    fn create_result(&self, statement: &mut dyn NativeStatement) -> QueryResult;
}
