//! myrs - a MySQL-style prepared-statement adapter layer
//!
//! Wraps a native prepared-statement handle behind a uniform
//! statement/parameter/result model: a [`Statement`] stores SQL text and a
//! typed positional [`ParameterContainer`], prepares once on the borrowed
//! connection, binds parameters with a per-position type-signature string,
//! runs the handle and forwards the raw native result to the owning
//! driver's result factory. The native client itself stays behind the
//! [`traits`] seam.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use myrs::{MyRsDriver, ParamType, ParameterContainer};
//!
//! let driver = Arc::new(MyRsDriver::new(connection));
//! let mut statement = driver.create_statement("SELECT * FROM t WHERE id = ?");
//!
//! let mut params = ParameterContainer::new();
//! params.push_typed(5, ParamType::Integer);
//! statement.set_parameters(params);
//!
//! let result = statement.execute(None).await?;
//! println!("{} row(s)", result.len());
//! ```

pub mod drivers;
pub mod error;
pub mod statement;
pub mod traits;
pub mod types;

mod driver;

// Re-export main types for convenient access
pub use driver::{DefaultResultFactory, MyRsDriver};
pub use error::{MyRsError, Result};
pub use statement::Statement;
pub use traits::{NativeConnection, NativeError, NativeStatement, ResultFactory};
pub use types::{ParamType, ParameterContainer, ParameterInput, QueryResult, RawResult, SqlValue};
