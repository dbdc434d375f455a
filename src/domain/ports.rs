use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Where lines come from and where transformed lines and the report go.
pub trait Storage {
    fn open_input(&self, path: Option<&str>) -> Result<Box<dyn BufRead>>;
    fn create_output(&self, path: Option<&str>) -> Result<Box<dyn Write>>;
    fn diagnostics(&self) -> Box<dyn Write>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn report_counts(&self) -> bool;
    /// Flattened `old1 new1 old2 new2 ...` list.
    fn replacements(&self) -> &[String];
}
