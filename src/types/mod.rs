mod container;
mod result;
mod sql_value;

pub use container::{ParameterContainer, ParameterInput};
pub use result::{QueryResult, RawResult};
pub use sql_value::{ParamType, SqlValue};
