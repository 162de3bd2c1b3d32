//! Connection management: one write connection behind an async mutex.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
