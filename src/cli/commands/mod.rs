//! Command implementations

pub mod fleet;
pub mod init;
pub mod quote;
pub mod tax;
pub mod truck;
