//! Input sources for guide generation

pub mod programs_file;

pub use programs_file::{load_channel_directory, parse_channel_directory};
