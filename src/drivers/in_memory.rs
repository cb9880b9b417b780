use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{NativeConnection, NativeError, NativeStatement};
use crate::types::{RawResult, SqlValue};

/// A bind call recorded by an in-memory statement handle.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBind {
    pub signature: String,
    pub values: Vec<SqlValue>,
}

/// An in-memory native connection for testing.
///
/// Allows scripting prepare/run failures and queued raw results, and
/// verifying the prepare, bind and run calls a statement issued. The
/// handles it produces share its state, so calls stay observable after a
/// handle moves into a `Statement`.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use myrs::drivers::{InMemoryConnection, RawResultBuilder};
///
/// let connection = Arc::new(
///     InMemoryConnection::new().with_result(
///         RawResultBuilder::new()
///             .columns(&["id", "name"])
///             .row(&["1", "Alice"])
///             .build(),
///     ),
/// );
/// ```
pub struct InMemoryConnection {
    state: Arc<SharedState>,
}

#[derive(Default)]
struct SharedState {
    prepared_sql: Mutex<Vec<String>>,
    binds: Mutex<Vec<RecordedBind>>,
    runs: Mutex<usize>,
    results: Mutex<VecDeque<RawResult>>,
    results_taken: Mutex<usize>,
    prepare_error: Mutex<Option<NativeError>>,
    run_error: Mutex<Option<String>>,
}

impl InMemoryConnection {
    /// Create a connection with no scripted responses or failures.
    pub fn new() -> Self {
        Self {
            state: Arc::new(SharedState::default()),
        }
    }

    /// Queue a raw result for the next successful run. FIFO order.
    pub fn with_result(self, result: RawResult) -> Self {
        self.state.results.lock().unwrap().push_back(result);
        self
    }

    /// Queue multiple raw results for subsequent runs.
    pub fn with_results(self, results: impl IntoIterator<Item = RawResult>) -> Self {
        let mut queue = self.state.results.lock().unwrap();
        for result in results {
            queue.push_back(result);
        }
        drop(queue);
        self
    }

    /// Make every prepare call fail with the given native error detail.
    pub fn with_prepare_error(self, message: &str, code: u32) -> Self {
        *self.state.prepare_error.lock().unwrap() = Some(NativeError::new(message, code));
        self
    }

    /// Make every run call fail with the given native error message.
    pub fn with_run_error(self, message: &str) -> Self {
        *self.state.run_error.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Stop failing prepare calls, simulating a recovered connection.
    pub fn clear_prepare_error(&self) {
        *self.state.prepare_error.lock().unwrap() = None;
    }

    /// Hand out a prepared handle directly, bypassing a prepare call.
    pub fn handle(&self) -> Box<dyn NativeStatement> {
        Box::new(InMemoryStatement {
            state: Arc::clone(&self.state),
        })
    }

    /// SQL texts received by prepare calls, in order.
    pub fn prepared_sql(&self) -> Vec<String> {
        self.state.prepared_sql.lock().unwrap().clone()
    }

    /// All recorded bind calls, in order.
    pub fn recorded_binds(&self) -> Vec<RecordedBind> {
        self.state.binds.lock().unwrap().clone()
    }

    /// The last recorded bind call, if any.
    pub fn last_bind(&self) -> Option<RecordedBind> {
        self.state.binds.lock().unwrap().last().cloned()
    }

    /// Number of run calls issued so far.
    pub fn run_count(&self) -> usize {
        *self.state.runs.lock().unwrap()
    }

    /// Number of raw results pulled off handles (i.e. result-factory calls).
    pub fn results_taken(&self) -> usize {
        *self.state.results_taken.lock().unwrap()
    }

    /// Assert that the last bind call matches the expected signature and
    /// values.
    pub fn assert_last_bind(&self, expected_signature: &str, expected_values: &[SqlValue]) {
        let last = self.last_bind().expect("No bind calls were recorded");
        assert_eq!(
            last.signature, expected_signature,
            "Bind signature mismatch.\nExpected: {}\nActual: {}",
            expected_signature, last.signature
        );
        assert_eq!(
            last.values, expected_values,
            "Bound values mismatch.\nExpected: {:?}\nActual: {:?}",
            expected_values, last.values
        );
    }

    /// Assert that exactly n prepare calls were issued.
    pub fn assert_prepare_count(&self, expected: usize) {
        let actual = self.state.prepared_sql.lock().unwrap().len();
        assert_eq!(
            actual, expected,
            "Prepare count mismatch. Expected: {}, Actual: {}",
            expected, actual
        );
    }

    /// Assert that exactly n bind calls were issued.
    pub fn assert_bind_count(&self, expected: usize) {
        let actual = self.state.binds.lock().unwrap().len();
        assert_eq!(
            actual, expected,
            "Bind count mismatch. Expected: {}, Actual: {}",
            expected, actual
        );
    }
}

impl Default for InMemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NativeConnection for InMemoryConnection {
    async fn prepare_statement(&self, sql: &str) -> Option<Box<dyn NativeStatement>> {
        self.state
            .prepared_sql
            .lock()
            .unwrap()
            .push(sql.to_string());

        if self.state.prepare_error.lock().unwrap().is_some() {
            return None;
        }

        Some(Box::new(InMemoryStatement {
            state: Arc::clone(&self.state),
        }))
    }

    fn last_error(&self) -> NativeError {
        self.state
            .prepare_error
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| NativeError::new("", 0))
    }
}

/// Prepared-handle half of the in-memory driver.
struct InMemoryStatement {
    state: Arc<SharedState>,
}

#[async_trait]
impl NativeStatement for InMemoryStatement {
    async fn bind_params(&mut self, signature: &str, values: &mut [SqlValue]) {
        self.state.binds.lock().unwrap().push(RecordedBind {
            signature: signature.to_string(),
            values: values.to_vec(),
        });
    }

    async fn run(&mut self) -> bool {
        *self.state.runs.lock().unwrap() += 1;
        self.state.run_error.lock().unwrap().is_none()
    }

    fn last_error(&self) -> String {
        self.state.run_error.lock().unwrap().clone().unwrap_or_default()
    }

    fn take_result(&mut self) -> RawResult {
        *self.state.results_taken.lock().unwrap() += 1;
        self.state
            .results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(RawResult::empty)
    }
}

/// Builder for creating raw results easily.
pub struct RawResultBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawResultBuilder {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set the column names for the result.
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add a row of string values.
    pub fn row(mut self, values: &[&str]) -> Self {
        self.rows
            .push(values.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Build the RawResult.
    pub fn build(self) -> RawResult {
        RawResult::new(self.columns, self.rows)
    }
}

impl Default for RawResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}
