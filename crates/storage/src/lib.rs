#![warn(clippy::pedantic)]

#[allow(clippy::module_name_repetitions)]
pub mod file_storage;

pub use file_storage::FileStorage;
