mod connection;
mod factory;
mod statement;

pub use connection::{NativeConnection, NativeError};
pub use factory::ResultFactory;
pub use statement::NativeStatement;
