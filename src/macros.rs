//! Macros for building metadata and for internal diagnostics.

/// Builds a [`Metadata`](crate::Metadata) mapping in insertion order.
///
/// # Examples
///
/// ```
/// use trace_rail::{metadata, Reason};
///
/// let reason = Reason::from_parts(
///     "slow query",
///     Some(metadata! { "table" => "orders", "elapsed_ms" => 812u64 }),
/// );
///
/// let keys: Vec<&str> = reason.metadata().keys().collect();
/// assert_eq!(keys, ["table", "elapsed_ms"]);
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Metadata::new()$(.with($key, $value))+
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!(target: "trace_rail", $($arg)+)
    };
}

/// Expands to nothing; the arguments are not evaluated.
#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ()
    };
}
