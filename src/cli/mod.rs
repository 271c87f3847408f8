//! Command-line front end
//!
//! Argument parsing, the interactive loop and text rendering. Everything here
//! goes through the public game API; none of it is needed to use the engine
//! as a library.

pub mod commands;
pub mod config;
pub mod output;
pub mod session;
