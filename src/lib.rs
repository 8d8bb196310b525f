//! MIPI DSI Panel Driver
//!
//! Power sequencing and command-table driver for MIPI DSI video-mode panels.
//! The driver owns the panel's supplies, control lines and DSI channel and
//! moves the panel through a prepare / enable / disable / unprepare
//! lifecycle, replaying the vendor initialization tables on the way up.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support for control lines and delays
//! - Panel models as `const` command tables ([`panels`])
//! - Rollback to a powered-down panel on any failed power-up step
//! - `embedded-graphics-core` dimensions for the panel mode (with `graphics` feature)
//! - Thread-shared panel handle (with `std` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use dsi_panel::panels::AUO_NOVATEK_720P;
//! use dsi_panel::{Builder, DsiChannel, Panel, Supplies, TransmissionMode};
//!
//! # struct MockDsi;
//! # impl DsiChannel for MockDsi {
//! #     type Error = Infallible;
//! #     fn set_mode(&mut self, _mode: TransmissionMode) {}
//! #     fn dcs_write(&mut self, _address: u8, _payload: &[u8]) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockRegulators;
//! # impl Supplies for MockRegulators {
//! #     type Error = Infallible;
//! #     fn bulk_enable(&mut self, _names: &[&'static str]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn bulk_disable(&mut self, _names: &[&'static str]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let dsi = MockDsi;
//! # let regulators = MockRegulators;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let config = match Builder::new().panel(&AUO_NOVATEK_720P).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut panel = Panel::new(dsi, regulators, config).reset_pin(rst);
//! if panel.prepare(&mut delay).is_ok() {
//!     panel.enable();
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Backlight collaborator
pub mod backlight;
/// DCS command definitions and command tables
pub mod command;
/// Panel configuration types and builder
pub mod config;
/// Error types for the driver
pub mod error;
/// DSI channel abstraction and link settings
pub mod interface;
/// Display mode description and registration
pub mod mode;
/// Panel lifecycle
pub mod panel;
/// Supported panel models
pub mod panels;
/// Supplies and control lines
pub mod power;
/// Command table sequencer
pub mod sequence;
/// Settle delays
pub mod timing;

/// Thread-shared panel handle (requires `std` feature)
#[cfg(feature = "std")]
pub mod shared;

#[cfg(test)]
mod mock;

pub use backlight::{Backlight, BacklightPower, NoBacklight};
pub use command::{Command, CommandSequence, CommandWrite};
pub use config::{Builder, Config};
pub use error::{BuilderError, Error};
pub use interface::{DsiChannel, LinkConfig, ModeFlags, PixelFormat, TransmissionMode};
pub use mode::{Connector, ModeDescriptor, PanelModes};
pub use panel::{Panel, PanelError, PanelState, Parts};
pub use panels::PanelDescriptor;
pub use power::{NoPin, PowerResources, Supplies};
pub use timing::Timings;

#[cfg(feature = "std")]
pub use shared::SharedPanel;
