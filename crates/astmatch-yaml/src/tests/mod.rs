//! Unit tests for `astmatch_yaml` document compilation.
