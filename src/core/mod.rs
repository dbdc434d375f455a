pub mod engine;
pub mod report;
pub mod transformer;

pub use crate::domain::model::{ReplacementCounter, ReplacementRule, RuleSet, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
