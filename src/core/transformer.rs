use crate::domain::model::{ReplacementCounter, RuleSet, RunSummary};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Applies a rule set to lines one at a time, counting what it changes.
///
/// Rules are chained: each rule sees the output of the rule before it on the
/// same line. A rule counts at most once per line, however many occurrences it
/// replaced there.
pub struct LineTransformer {
    rules: RuleSet,
    counter: ReplacementCounter,
    lines_processed: u64,
}

impl LineTransformer {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            counter: ReplacementCounter::new(),
            lines_processed: 0,
        }
    }

    /// Transforms a single line, given without its terminator.
    pub fn transform_line(&mut self, line: &[u8]) -> Vec<u8> {
        let mut current = line.to_vec();

        for rule in self.rules.rules() {
            if let Some(replaced) = rule.apply(&current) {
                self.counter.increment(&rule.old);
                current = replaced;
            }
        }

        self.lines_processed += 1;
        current
    }

    /// Streams `input` to `output` line by line. Every line written ends with a
    /// single `\n`, whatever terminator it had on input.
    pub fn process<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<u64> {
        let start = self.lines_processed;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = trim_line_ending(&buf);
            let transformed = self.transform_line(line);
            output.write_all(&transformed)?;
            output.write_all(b"\n")?;
        }

        output.flush()?;

        let processed = self.lines_processed - start;
        tracing::debug!("Processed {} lines", processed);
        Ok(processed)
    }

    pub fn lines_processed(&self) -> u64 {
        self.lines_processed
    }

    pub fn counter(&self) -> &ReplacementCounter {
        &self.counter
    }

    pub fn into_summary(self) -> RunSummary {
        RunSummary {
            lines_processed: self.lines_processed,
            counter: self.counter,
            rules: self.rules,
        }
    }
}

// 去掉行尾的 \n 以及其前面的一個 \r
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
