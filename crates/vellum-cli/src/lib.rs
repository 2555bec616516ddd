//! Library components of the `vellum` command line tool.

pub mod config;
pub mod logging;
pub mod project;
pub mod report;
