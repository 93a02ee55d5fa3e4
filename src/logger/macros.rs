//! Logging macros with inline metadata.
//!
//! ```ignore
//! ctx_info!(logger, "payment accepted", orderId = order.id, amount = 12.5);
//! ```
//!
//! Keys are written as-is, values go through `serde` serialization.

/// Emit at an explicit level with `key = value` metadata.
#[macro_export]
macro_rules! ctx_log {
    ($logger:expr, $level:expr, $message:expr $(,)?) => {
        $logger.emit($level, $message, ())
    };
    ($logger:expr, $level:expr, $message:expr, $($key:ident = $value:expr),+ $(,)?) => {{
        let mut fields = $crate::record::Fields::new();
        $(
            fields.insert(
                stringify!($key).to_string(),
                $crate::record::field_value(&$value),
            );
        )+
        $logger.emit($level, $message, fields)
    }};
}

/// Log an error message with metadata.
#[macro_export]
macro_rules! ctx_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::ctx_log!($logger, $crate::Level::Error, $($rest)+)
    };
}

/// Log a warning message with metadata.
#[macro_export]
macro_rules! ctx_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::ctx_log!($logger, $crate::Level::Warn, $($rest)+)
    };
}

/// Log an info message with metadata.
#[macro_export]
macro_rules! ctx_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::ctx_log!($logger, $crate::Level::Info, $($rest)+)
    };
}

/// Log a debug message with metadata.
#[macro_export]
macro_rules! ctx_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::ctx_log!($logger, $crate::Level::Debug, $($rest)+)
    };
}
