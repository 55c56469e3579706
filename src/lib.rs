//! Library surface shared by the `quizbench` binary and its integration
//! tests.

pub mod backend;
pub mod cli;
pub mod config;
pub mod logging;
