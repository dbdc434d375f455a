use crate::utils::error::{ReplaceError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The flattened replacement list must hold complete `old new` pairs, at least one of them.
pub fn validate_pair_count<S: AsRef<str>>(field_name: &str, values: &[S]) -> Result<()> {
    if values.len() < 2 || values.len() % 2 != 0 {
        return Err(ReplaceError::UsageError {
            message: format!(
                "{} must be old/new pairs, got {} value(s)",
                field_name,
                values.len()
            ),
        });
    }
    Ok(())
}

/// An empty old string would match at every position.
pub fn validate_non_empty_old<S: AsRef<str>>(values: &[S]) -> Result<()> {
    if values.chunks(2).any(|pair| pair[0].as_ref().is_empty()) {
        return Err(ReplaceError::ValidationError {
            message: "old strings to replace must be non-empty".to_string(),
        });
    }
    Ok(())
}
