/// Constructs a [`crate::Error::InvalidConfiguration`] for the given format string.
#[macro_export]
macro_rules! errconfig {
    ($($args:tt)*) => { $crate::Error::InvalidConfiguration(format!($($args)*)).into() };
}

/// Constructs a [`crate::Error::InvariantViolation`] for the given format string.
#[macro_export]
macro_rules! errinvariant {
    ($($args:tt)*) => { $crate::Error::InvariantViolation(format!($($args)*)).into() };
}
