//! Bridge between `validator` derive output and [`CoreError`].

use validator::Validate;

use crate::error::CoreError;

/// Names of the fields that fail `input`'s `validator` rules.
pub fn invalid_fields<T: Validate>(input: &T) -> Vec<String> {
    match input.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => {
            let field_errors = errors.field_errors();
            let fields: Vec<String> = field_errors.keys().map(|k| k.to_string()).collect();
            fields
        }
    }
}

/// Fold a list of offending field names into one [`CoreError::Validation`].
///
/// Names are sorted and deduplicated so the message is deterministic.
pub fn fields_error(mut fields: Vec<String>) -> CoreError {
    fields.sort_unstable();
    fields.dedup();
    CoreError::Validation(format!("missing or invalid fields: {}", fields.join(", ")))
}
