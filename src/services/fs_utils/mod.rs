pub mod file_utils;

pub use file_utils::{ensure_dir, write_atomic};

#[cfg(test)]
#[path = "tests/file_utils_tests.rs"]
mod file_utils_tests;
