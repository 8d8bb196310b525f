//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and panel lifecycle operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during power sequencing and mode registration
//!
//! ## Example
//!
//! ```
//! use dsi_panel::{Builder, BuilderError};
//!
//! // Missing panel descriptor
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingPanel)));
//! ```

use embedded_hal::digital::ErrorKind;

/// Errors that can occur while sequencing the panel
///
/// Generic over the transmission channel error (`TE`) and the supply error
/// (`PE`) so callers can match on the underlying collaborator error.
#[derive(Debug, PartialEq)]
pub enum Error<TE, PE> {
    /// A write or DCS command failed on the transmission channel
    Transmission(TE),
    /// Bulk enable or disable of the supplies failed
    PowerResource(PE),
    /// Driving the reset, enable or TE line failed
    ControlLine(ErrorKind),
    /// The mode registration target could not duplicate the mode
    Allocation,
}

impl<TE: core::fmt::Debug, PE: core::fmt::Debug> core::fmt::Display for Error<TE, PE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transmission(e) => write!(f, "Transmission error: {e:?}"),
            Self::PowerResource(e) => write!(f, "Power resource error: {e:?}"),
            Self::ControlLine(kind) => write!(f, "Control line error: {kind}"),
            Self::Allocation => write!(f, "Failed to duplicate display mode"),
        }
    }
}

impl<TE: core::fmt::Debug, PE: core::fmt::Debug> core::error::Error for Error<TE, PE> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the panel is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// No panel descriptor was specified
    ///
    /// [`Builder::panel()`](crate::config::Builder::panel) must be called before building.
    MissingPanel,
    /// The descriptor names no supplies
    NoSupplies,
    /// Mode timings are zero or out of order
    ///
    /// See [`ModeDescriptor::validate()`](crate::mode::ModeDescriptor::validate).
    InvalidMode {
        /// Active width of the rejected mode
        hdisplay: u16,
        /// Active height of the rejected mode
        vdisplay: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingPanel => write!(f, "Panel descriptor must be specified"),
            Self::NoSupplies => write!(f, "Panel descriptor names no supplies"),
            Self::InvalidMode { hdisplay, vdisplay } => {
                write!(f, "Invalid mode {hdisplay}x{vdisplay}")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
