//! Small crate-wide convenience macros.

/// Debug-level log line routed through `tracing`.
///
/// Kept as a macro so call sites read the same as the rest of the frontend
/// and so the level can be changed in one place.
///
/// ```rust,ignore
/// debug_log!("resolved {} -> {:?}", path, page);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}
