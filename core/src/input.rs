use crate::error::{Result, StoreError};

/// Parses a todo id as typed on the command line. Ids start at 1.
pub fn parse_id(input: &str) -> Result<u64> {
    match input.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(StoreError::InvalidId(input.to_string())),
    }
}

pub fn validate_title(input: &str) -> Result<String> {
    let title = input.trim();
    if title.is_empty() {
        return Err(StoreError::InvalidTitle);
    }
    Ok(title.to_string())
}
