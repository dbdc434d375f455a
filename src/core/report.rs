use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use std::io::Write;

/// Writes the end-of-run count report.
///
/// Rows follow the declared rule order. Rules sharing an `old` string each get
/// their own row, all showing the shared count.
pub fn write_report<W: Write>(summary: &RunSummary, mut out: W) -> Result<()> {
    writeln!(out, "{} lines processed", summary.lines_processed)?;

    for (rule, count) in summary.rule_counts() {
        writeln!(
            out,
            "{} lines replaced \"{}\" with \"{}\"",
            count, rule.old, rule.new
        )?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transformer::LineTransformer;
    use crate::domain::model::RuleSet;

    fn report_for(pairs: &[&str], input: &str) -> String {
        let mut transformer = LineTransformer::new(RuleSet::from_pairs(pairs).unwrap());
        transformer.process(input.as_bytes(), std::io::sink()).unwrap();

        let mut out = Vec::new();
        write_report(&transformer.into_summary(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_format() {
        let report = report_for(&["cat", "dog", "red", ""], "red cat\ncat cat\nblue\n");
        assert_eq!(
            report,
            "3 lines processed\n\
             2 lines replaced \"cat\" with \"dog\"\n\
             1 lines replaced \"red\" with \"\"\n"
        );
    }

    #[test]
    fn test_report_repeats_duplicate_rules_with_shared_count() {
        // 第二條規則永遠不會再匹配到 x，但共用同一個計數
        let report = report_for(&["x", "y", "x", "z"], "x\nx\nq\n");
        assert_eq!(
            report,
            "3 lines processed\n\
             2 lines replaced \"x\" with \"y\"\n\
             2 lines replaced \"x\" with \"z\"\n"
        );
    }
}
