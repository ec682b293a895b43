use crate::error::JartenderError;

pub fn get_exit_code(error: &JartenderError) -> i32 {
    match error {
        JartenderError::InvalidConfig(_) | JartenderError::ConfigError(_) => 2,

        JartenderError::PermissionDenied(_) => 13,

        JartenderError::ProbeTimeout { .. } => 124, // Same as coreutils `timeout`

        JartenderError::ExecutableNotFound(_) => 127, // Standard "command not found" exit code

        _ => 1,
    }
}
