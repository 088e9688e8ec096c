//! Error macros for oma

/// Return a manifest validation error for the given field path
#[macro_export]
macro_rules! bail_manifest {
    ($field:expr) => {
        return Err($crate::error::OmaError::manifest($field))
    };
}

/// Return a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::OmaError::UsageError($msg.to_string()))
    };
}
