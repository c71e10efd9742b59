//! Unit tests for `astmatch_core`.

mod captures_tests;
mod extract_tests;
mod length_tests;
