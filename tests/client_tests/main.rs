//! Client end-to-end test suite
