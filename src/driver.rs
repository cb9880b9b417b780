use std::sync::Arc;

use crate::statement::Statement;
use crate::traits::{NativeConnection, NativeStatement, ResultFactory};
use crate::types::QueryResult;

/// Driver-level entry point.
/// Owns the shared native connection and the result factory, and creates
/// statements wired to both.
pub struct MyRsDriver {
    connection: Arc<dyn NativeConnection>,
    factory: Arc<dyn ResultFactory>,
}

impl MyRsDriver {
    /// Wrap an already-opened native connection.
    ///
    /// # Example
    /// ```ignore
    /// let driver = MyRsDriver::new(connection);
    /// let mut statement = driver.create_statement("SELECT * FROM t WHERE id = ?");
    /// ```
    pub fn new(connection: Arc<dyn NativeConnection>) -> Self {
        Self {
            connection,
            factory: Arc::new(DefaultResultFactory),
        }
    }

    /// Replace the result factory.
    /// Useful for testing or for layers that shape results differently.
    pub fn with_factory(mut self, factory: Arc<dyn ResultFactory>) -> Self {
        self.factory = factory;
        self
    }

    pub fn connection(&self) -> &Arc<dyn NativeConnection> {
        &self.connection
    }

    /// Create a statement for `sql`, borrowing this driver's connection and
    /// result factory.
    pub fn create_statement(&self, sql: impl Into<String>) -> Statement {
        let mut statement = Statement::new(
            Arc::clone(&self.connection),
            Arc::clone(&self.factory),
        );
        statement.set_sql(sql);
        statement
    }
}

/// The factory a driver owns unless one is injected: wraps the raw native
/// result into a [`QueryResult`] without reshaping it.
pub struct DefaultResultFactory;

impl ResultFactory for DefaultResultFactory {
    fn create_result(&self, statement: &mut dyn NativeStatement) -> QueryResult {
        QueryResult::from_raw(statement.take_result())
    }
}
