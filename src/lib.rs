//! netconsole library
//!
//! Utility layer of a network management console: input validators,
//! display formatting, random fixtures, deep cloning, activity icons and
//! setup-key request shaping. Modules are exposed for integration testing.

pub mod activity;
pub mod config;
pub mod setup_key;
pub mod traits;
pub mod utils;

// Re-export commonly used types for testing
pub use activity::ActivityIcon;
pub use config::{Config, SetupKeyDefaults};
pub use setup_key::{create_setup_key, CreateSetupKeyRequest, SetupKey, SetupKeyForm, SetupKeyType};
pub use traits::{CloneStrategy, RandomSource, SetupKeyApi};
pub use utils::clone::clone_deep;
pub use utils::validation::DomainOptions;
