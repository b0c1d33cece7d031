use std::fmt::Write;
use validator::ValidationErrors;

/// Renders validation failures one per line.
///
/// Rules that carry an explicit message are reported verbatim; the rest fall
/// back to `field: description` built from the rule code. Fields are sorted
/// so the output is stable.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut result = String::new();

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, field_errors) in fields {
        for err in field_errors {
            match err.message.as_ref() {
                Some(message) => {
                    let _ = writeln!(&mut result, "{message}");
                }
                None => {
                    let message = match err.code.as_ref() {
                        "range" => "value out of range",
                        "required" => "required",
                        "custom" => "custom validation failed",
                        _ => "invalid value",
                    };
                    let _ = writeln!(&mut result, "{field}: {message}");
                }
            }
        }
    }

    if result.is_empty() {
        "Validation failed".to_string()
    } else {
        result.trim().to_string()
    }
}
