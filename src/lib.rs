//! Command-line preflight: pull the program name, a leading site alias and a
//! small set of global options off a raw argument list, leaving everything
//! else for the real command parser.

pub mod args;
pub mod config;
pub mod logging;
pub mod site;
