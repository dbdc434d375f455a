use crate::core::report::write_report;
use crate::core::transformer::LineTransformer;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{RuleSet, RunSummary};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct ReplaceEngine<S: Storage, C: ConfigProvider + Validate> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider + Validate> ReplaceEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        // 先驗證，確保錯誤時不會寫出任何一行
        self.config.validate()?;

        let rules = RuleSet::from_pairs(self.config.replacements())?;
        tracing::debug!("Loaded {} replacement rules", rules.len());

        let input = self.storage.open_input(self.config.input_path())?;
        let output = self.storage.create_output(self.config.output_path())?;
        tracing::debug!(
            "Reading from {}, writing to {}",
            self.config.input_path().unwrap_or("stdin"),
            self.config.output_path().unwrap_or("stdout")
        );

        let mut transformer = LineTransformer::new(rules);
        let lines = transformer.process(input, output)?;
        tracing::info!("✅ {} lines processed", lines);

        let summary = transformer.into_summary();
        if self.config.report_counts() {
            write_report(&summary, self.storage.diagnostics())?;
        }

        Ok(summary)
    }
}
