pub mod colors;
pub mod file;
pub mod hook;
pub mod log;
pub mod task;
