//! TQT: Truck Quote Toolkit
//!
//! Trip cost estimation and quoting for owner-operator trucking, with quotes
//! managed as plain text files under version control.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
