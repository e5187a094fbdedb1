//! Unit test suite entry point.

mod catalog_tests;
mod form_tests;
