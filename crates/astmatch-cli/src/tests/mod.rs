//! Unit tests for the `astmatch` runtime.
