//! Logging facilities.
//!
//! The workspace is instrumented with the `tracing` crate. Nothing is printed
//! until the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("secure_field::visibility=debug")
//!     .init();
//! ```
//!
//! Every event is tagged with one of the [`targets`] below so that individual
//! subsystems can be enabled on their own.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "secure_field_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "secure_field_core::property";
    /// Object identity target.
    pub const OBJECT: &str = "secure_field_core::object";
    /// Visibility state and cell swaps.
    pub const VISIBILITY: &str = "secure_field::visibility";
    /// Toggle button interaction.
    pub const BUTTON: &str = "secure_field::button";
    /// Cell attribute transfer and drawing.
    pub const CELL: &str = "secure_field::cell";
    /// Field options loading.
    pub const OPTIONS: &str = "secure_field::options";
}

/// Span names used for instrumented operations.
pub mod span_names {
    /// A presentation strategy swap.
    pub const CELL_SWAP: &str = "secure_field::cell_swap";
}
