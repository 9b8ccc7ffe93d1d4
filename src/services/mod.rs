pub mod archive;
pub mod config;
pub mod emitter;
pub mod fs_utils;
pub mod loader;
pub mod pipeline;
pub mod registry;
