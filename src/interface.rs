//! Transmission channel abstraction
//!
//! This module provides the [`DsiChannel`] trait, the seam between the
//! sequencing engine and the host's DSI command transport. The host driver
//! owns the electrical layer; this crate only asks it to send one addressed
//! write at a time, in low-power or high-speed mode.
//!
//! It also describes the link settings ([`LinkConfig`]) the host needs when
//! attaching the panel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use dsi_panel::{DsiChannel, TransmissionMode};
//!
//! struct HostDsi;
//!
//! impl DsiChannel for HostDsi {
//!     type Error = Infallible;
//!
//!     fn set_mode(&mut self, _mode: TransmissionMode) {}
//!
//!     fn dcs_write(&mut self, _address: u8, _payload: &[u8]) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let mut dsi = HostDsi;
//! dsi.set_mode(TransmissionMode::LowPower);
//! let _ = dsi.dcs_write(0xFF, &[0xEE]);
//! let _ = dsi.exit_sleep_mode();
//! ```

use core::fmt::Debug;

use crate::command::{ENTER_SLEEP_MODE, EXIT_SLEEP_MODE, SET_DISPLAY_OFF, SET_DISPLAY_ON};

type ChannelResult<E> = core::result::Result<(), E>;

/// Signalling speed used for command transmission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransmissionMode {
    /// Low-power escape mode, used for unlock and init tables
    #[default]
    LowPower,
    /// High-speed mode, used once the panel is stable
    HighSpeed,
}

/// Trait for the host's DSI command transport
///
/// Implementations send exactly one write per call; no batching or
/// coalescing is expected. The mode set by [`DsiChannel::set_mode`] applies
/// to every following write until changed.
///
/// The DCS helpers default to a payload-less [`DsiChannel::dcs_write`] of the
/// standard opcode. Override them if the host exposes dedicated calls.
pub trait DsiChannel {
    /// Error type for channel operations
    type Error: Debug;

    /// Select the transmission mode for subsequent writes
    fn set_mode(&mut self, mode: TransmissionMode);

    /// Send one addressed write
    fn dcs_write(&mut self, address: u8, payload: &[u8]) -> ChannelResult<Self::Error>;

    /// Send DCS exit sleep mode
    fn exit_sleep_mode(&mut self) -> ChannelResult<Self::Error> {
        self.dcs_write(EXIT_SLEEP_MODE, &[])
    }

    /// Send DCS enter sleep mode
    fn enter_sleep_mode(&mut self) -> ChannelResult<Self::Error> {
        self.dcs_write(ENTER_SLEEP_MODE, &[])
    }

    /// Send DCS set display on
    fn set_display_on(&mut self) -> ChannelResult<Self::Error> {
        self.dcs_write(SET_DISPLAY_ON, &[])
    }

    /// Send DCS set display off
    fn set_display_off(&mut self) -> ChannelResult<Self::Error> {
        self.dcs_write(SET_DISPLAY_OFF, &[])
    }
}

impl<T: DsiChannel + ?Sized> DsiChannel for &mut T {
    type Error = T::Error;

    fn set_mode(&mut self, mode: TransmissionMode) {
        T::set_mode(self, mode);
    }

    fn dcs_write(&mut self, address: u8, payload: &[u8]) -> ChannelResult<Self::Error> {
        T::dcs_write(self, address, payload)
    }

    fn exit_sleep_mode(&mut self) -> ChannelResult<Self::Error> {
        T::exit_sleep_mode(self)
    }

    fn enter_sleep_mode(&mut self) -> ChannelResult<Self::Error> {
        T::enter_sleep_mode(self)
    }

    fn set_display_on(&mut self) -> ChannelResult<Self::Error> {
        T::set_display_on(self)
    }

    fn set_display_off(&mut self) -> ChannelResult<Self::Error> {
        T::set_display_off(self)
    }
}

/// Pixel stream format on the DSI link
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 24 bits per pixel
    #[default]
    Rgb888,
    /// 18 bits per pixel, packed
    Rgb666Packed,
    /// 18 bits per pixel, loosely packed
    Rgb666,
    /// 16 bits per pixel
    Rgb565,
}

impl PixelFormat {
    /// Bits per pixel on the wire
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb888 => 24,
            Self::Rgb666Packed | Self::Rgb666 => 18,
            Self::Rgb565 => 16,
        }
    }
}

bitflags::bitflags! {
    /// DSI link mode flags
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ModeFlags: u32 {
        /// Video mode (as opposed to command mode)
        const VIDEO = 1 << 0;
        /// Send hsync-end packets in video mode
        const VIDEO_HSE = 1 << 1;
        /// Clock lane may stop between transmissions
        const CLOCK_NON_CONTINUOUS = 1 << 2;
        /// Send end-of-transmission packets
        const EOT_PACKET = 1 << 3;
    }
}

/// Link settings the host applies when attaching the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkConfig {
    /// Number of data lanes
    pub lanes: u8,
    /// Pixel stream format
    pub format: PixelFormat,
    /// Link mode flags
    pub flags: ModeFlags,
}
