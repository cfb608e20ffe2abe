//! Integration tests for async extensions.

mod future_ext_tests;
