//! Unit tests for flowviz-cli, organized by module.
//!
//! Tests are named by scenario; the longer ones spell out Given/When/Then in their docs.

mod args;
