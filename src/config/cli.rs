use crate::core::Storage;
use crate::utils::error::{ReplaceError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Files when a path is given, standard streams otherwise.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn open_input(&self, path: Option<&str>) -> Result<Box<dyn BufRead>> {
        match path {
            None => Ok(Box::new(io::stdin().lock())),
            Some(path) => {
                let file = File::open(path).map_err(|source| ReplaceError::InputError {
                    path: path.to_string(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    fn create_output(&self, path: Option<&str>) -> Result<Box<dyn Write>> {
        match path {
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            Some(path) => {
                let file = File::create(path).map_err(|source| ReplaceError::OutputError {
                    path: path.to_string(),
                    source,
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }

    fn diagnostics(&self) -> Box<dyn Write> {
        Box::new(io::stderr())
    }
}
