// Service exports
pub mod profiles;

pub use profiles::{ProfileStore, ProfileStoreError};
