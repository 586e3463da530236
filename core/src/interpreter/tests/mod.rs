//! Tests for the interpreter
//!
//! Organized by feature area

mod helpers;
mod outline_tests;
