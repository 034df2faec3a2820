//! Protocol test suite

mod reply_tests;
