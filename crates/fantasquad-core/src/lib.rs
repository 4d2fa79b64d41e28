// Library root: re-exports all modules so integration tests and the command
// line front end can access the crate's public API.

pub mod config;
pub mod lineup;
pub mod source;
