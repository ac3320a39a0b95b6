//! CLI configuration for HashCheck

mod settings;

pub use settings::*;
