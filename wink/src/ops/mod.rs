//! Core operations.
//!
//! This module contains the business logic for wink commands,
//! separated from CLI argument parsing and output rendering.

pub mod connect;
pub mod generate;
pub mod init;
pub mod tables;

pub use connect::{ConnectionTarget, open_reader};
pub use generate::generate;
pub use init::init;
pub use tables::tables;
