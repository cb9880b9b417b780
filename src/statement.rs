use std::sync::Arc;

use crate::error::{MyRsError, Result};
use crate::traits::{NativeConnection, NativeStatement, ResultFactory};
use crate::types::{ParameterContainer, ParameterInput, QueryResult};

/// A prepared-statement adapter over a native connection.
///
/// Holds SQL text and an optional typed parameter container, produces and
/// owns the native prepared handle, and on execute binds parameters in
/// positional order, runs the handle and hands the raw result to the
/// driver's result factory.
///
/// Lifecycle is one-way: a statement moves from unprepared to prepared
/// once (explicitly, on first execute, or by handle injection) and stays
/// prepared for the rest of its life. There is no reset or close.
pub struct Statement {
    connection: Arc<dyn NativeConnection>,
    factory: Arc<dyn ResultFactory>,
    sql: String,
    parameters: Option<ParameterContainer>,
    resource: Option<Box<dyn NativeStatement>>,
    is_prepared: bool,
}

impl Statement {
    /// Create an empty statement over a borrowed connection.
    /// The connection's lifecycle is managed by the caller.
    pub fn new(connection: Arc<dyn NativeConnection>, factory: Arc<dyn ResultFactory>) -> Self {
        Self {
            connection,
            factory,
            sql: String::new(),
            parameters: None,
            resource: None,
            is_prepared: false,
        }
    }

    /// Store the SQL text. Not validated here; callable before or after
    /// preparation, though an already-prepared handle is unaffected.
    pub fn set_sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.sql = sql.into();
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Store a typed parameter container, replacing any previous one.
    pub fn set_parameters(&mut self, parameters: ParameterContainer) -> &mut Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn parameters(&self) -> Option<&ParameterContainer> {
        self.parameters.as_ref()
    }

    pub fn is_prepared(&self) -> bool {
        self.is_prepared
    }

    /// Inject an externally prepared native handle and mark the statement
    /// prepared.
    pub fn set_resource(&mut self, resource: Box<dyn NativeStatement>) -> &mut Self {
        self.resource = Some(resource);
        self.is_prepared = true;
        self
    }

    pub fn resource(&self) -> Option<&dyn NativeStatement> {
        self.resource.as_deref()
    }

    /// Prepare the statement on the connection.
    ///
    /// Fails with [`MyRsError::AlreadyPrepared`] on a second attempt and
    /// with [`MyRsError::InvalidQuery`] when the native client yields no
    /// handle; the statement then stays unprepared.
    ///
    /// The text sent to the connection is always the stored SQL; an
    /// explicit `sql` argument only reaches the failure message.
    /// TODO: confirm whether an explicit argument should instead be the
    /// text that is actually sent.
    pub async fn prepare(&mut self, sql: Option<&str>) -> Result<()> {
        if self.is_prepared {
            return Err(MyRsError::AlreadyPrepared);
        }

        match self.connection.prepare_statement(&self.sql).await {
            Some(resource) => {
                self.resource = Some(resource);
                self.is_prepared = true;
                Ok(())
            }
            None => {
                let sql = sql.unwrap_or(&self.sql).to_string();
                let native = self.connection.last_error();
                Err(MyRsError::InvalidQuery {
                    sql,
                    message: native.message,
                    code: native.code,
                })
            }
        }
    }

    /// Execute the statement, preparing it first with the stored SQL if
    /// needed.
    ///
    /// Parameters resolve as: the explicit argument if given (a plain
    /// value list normalizes to the typed form), else the stored
    /// container, else none. Non-empty parameters rebind on every
    /// execution; empty ones perform no native bind call at all.
    ///
    /// A failed native run surfaces [`MyRsError::Execution`] and the
    /// result factory is not called.
    pub async fn execute(&mut self, parameters: Option<ParameterInput>) -> Result<QueryResult> {
        if !self.is_prepared {
            self.prepare(None).await?;
        }

        let container = match parameters {
            Some(input) => Some(input.into_container()),
            None => self.parameters.clone(),
        };

        // Both writers of `is_prepared` also set the handle.
        let resource = self
            .resource
            .as_mut()
            .expect("prepared statement without native handle");

        if let Some(container) = container.filter(|c| !c.is_empty()) {
            let (signature, mut values) = container.bind_args();
            resource.bind_params(&signature, &mut values).await;
        }

        if !resource.run().await {
            return Err(MyRsError::Execution(resource.last_error()));
        }

        Ok(self.factory.create_result(resource.as_mut()))
    }
}
