pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_old, validate_pair_count, Validate};
use clap::Parser;
use std::ffi::OsString;

pub const USAGE: &str = "replace-strings [--in inputfile] [--out outputfile] [--counts] oldstring1 newstring1 oldstring2 newstring2 ...";

#[derive(Debug, Clone, Parser)]
#[command(name = "replace-strings", version)]
#[command(about = "Replace literal strings in each line of text")]
#[command(override_usage = USAGE)]
pub struct CliConfig {
    /// Name of input file to process (default stdin)
    #[arg(long = "in", value_name = "FILE")]
    pub input_file: Option<String>,

    /// Name of the output file to create (default stdout)
    #[arg(long = "out", value_name = "FILE")]
    pub output_file: Option<String>,

    /// Report counts of replacements on stderr
    #[arg(long)]
    pub counts: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Replacement pairs: oldstring1 newstring1 oldstring2 newstring2 ...
    #[arg(value_name = "REPLACEMENTS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub replacements: Vec<String>,
}

impl CliConfig {
    /// Parses the process arguments, accepting `-in`, `-out` and `-counts` as
    /// well as their `--` spellings.
    pub fn parse_args() -> Self {
        Self::parse_from(expand_single_dash_flags(std::env::args_os()))
    }
}

const KNOWN_FLAGS: &[&str] = &["-v", "--verbose", "-h", "--help", "-V", "--version"];

/// Rewrites `-in`, `-out` and `-counts` (with or without `=value`) to their
/// `--` form. Only the leading option region is touched; scanning stops at the
/// first replacement value or at `--`.
pub fn expand_single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut expanded: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str().map(str::to_owned) else {
            expanded.push(arg);
            break;
        };

        if text == "--" || !text.starts_with('-') || text == "-" {
            expanded.push(arg);
            break;
        }

        let name = text.trim_start_matches('-');
        let (flag, inline_value) = match name.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (name, None),
        };

        match flag {
            "in" | "out" => {
                expanded.push(format!("--{}", name).into());
                if inline_value.is_none() {
                    // 參數值原樣保留，即使以 - 開頭
                    if let Some(value) = args.next() {
                        expanded.push(value);
                    }
                }
            }
            "counts" => expanded.push(format!("--{}", name).into()),
            _ if KNOWN_FLAGS.contains(&text.as_str()) => expanded.push(arg),
            _ => {
                // 第一個替換字串，之後皆為值
                expanded.push(arg);
                break;
            }
        }
    }

    expanded.extend(args);
    expanded
}

impl ConfigProvider for CliConfig {
    // 空字串與未指定相同，使用標準輸入輸出
    fn input_path(&self) -> Option<&str> {
        self.input_file.as_deref().filter(|p| !p.is_empty())
    }

    fn output_path(&self) -> Option<&str> {
        self.output_file.as_deref().filter(|p| !p.is_empty())
    }

    fn report_counts(&self) -> bool {
        self.counts
    }

    fn replacements(&self) -> &[String] {
        &self.replacements
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_pair_count("replacements", self.replacements.as_slice())?;
        validate_non_empty_old(self.replacements.as_slice())?;
        Ok(())
    }
}
