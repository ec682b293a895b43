use crate::error::{ErrorContext, JartenderError};

pub fn format_error_chain(error: &JartenderError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}
