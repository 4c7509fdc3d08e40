//! Chat panel tests
//!
//! - buffer_tests: cursor-aware text editing
//! - input_tests: key and paste mapping
//! - render_tests: drawing into a test backend
//! - scroll_tests: scroll offset and epoch following
//! - wrap_tests: input wrapping against the core sizer

pub mod buffer_tests;
pub mod input_tests;
pub mod scroll_tests;
