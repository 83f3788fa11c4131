//! Local adapters that don't need the database

mod local_files;
mod progress;

pub use local_files::LocalFileStorage;
pub use progress::DashMapProgressStore;
