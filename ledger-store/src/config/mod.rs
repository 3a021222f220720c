//! Store configuration

pub mod defaults;
mod settings;

pub use settings::{DatabaseSettings, StoreConfig};
