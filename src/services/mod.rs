// Service exports
pub mod loader;

pub use loader::{load_participants, parse_participants, LoaderError};
