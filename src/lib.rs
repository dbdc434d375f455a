#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use core::{engine::ReplaceEngine, transformer::LineTransformer};
pub use domain::model::{ReplacementCounter, ReplacementRule, RuleSet, RunSummary};
pub use utils::error::{ReplaceError, Result};
