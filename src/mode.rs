//! Display mode descriptor and mode registration
//!
//! A panel exposes one fixed [`ModeDescriptor`]. The host's mode framework
//! queries it through [`Panel::get_modes`](crate::Panel::get_modes), which
//! hands a copy to a [`Connector`]; the panel's own descriptor is never
//! touched by registration.

use core::fmt;

use crate::error::BuilderError;

/// Video timing and geometry of a panel mode
///
/// Horizontal and vertical values are in pixels and lines, counted from the
/// start of the active area, as DRM does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeDescriptor {
    /// Pixel clock in kHz
    pub clock_khz: u32,
    /// Active width
    pub hdisplay: u16,
    /// Start of horizontal sync
    pub hsync_start: u16,
    /// End of horizontal sync
    pub hsync_end: u16,
    /// Total line length
    pub htotal: u16,
    /// Active height
    pub vdisplay: u16,
    /// Start of vertical sync
    pub vsync_start: u16,
    /// End of vertical sync
    pub vsync_end: u16,
    /// Total frame height
    pub vtotal: u16,
    /// Nominal refresh rate in Hz
    pub vrefresh: u16,
    /// Physical width in millimetres
    pub width_mm: u16,
    /// Physical height in millimetres
    pub height_mm: u16,
}

impl ModeDescriptor {
    /// Check that the timings are ordered and non-empty
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidMode` if:
    /// - the active area or the pixel clock is zero
    /// - `display <= sync_start <= sync_end <= total` does not hold on either axis
    pub fn validate(&self) -> Result<(), BuilderError> {
        let horizontal = self.hdisplay <= self.hsync_start
            && self.hsync_start <= self.hsync_end
            && self.hsync_end <= self.htotal;
        let vertical = self.vdisplay <= self.vsync_start
            && self.vsync_start <= self.vsync_end
            && self.vsync_end <= self.vtotal;

        let empty = self.clock_khz == 0 || self.hdisplay == 0 || self.vdisplay == 0;
        if empty || !horizontal || !vertical {
            return Err(BuilderError::InvalidMode {
                hdisplay: self.hdisplay,
                vdisplay: self.vdisplay,
            });
        }
        Ok(())
    }

    /// Mode name, formatted as `{hdisplay}x{vdisplay}`
    pub fn name(&self) -> ModeName {
        ModeName {
            hdisplay: self.hdisplay,
            vdisplay: self.vdisplay,
        }
    }

    /// Refresh rate derived from the pixel clock, in millihertz
    pub fn refresh_mhz(&self) -> u32 {
        let total = u64::from(self.htotal) * u64::from(self.vtotal);
        if total == 0 {
            return 0;
        }
        let mhz = u64::from(self.clock_khz) * 1_000_000 / total;
        u32::try_from(mhz).unwrap_or(u32::MAX)
    }
}

/// Display adapter for a mode's name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeName {
    hdisplay: u16,
    vdisplay: u16,
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.hdisplay, self.vdisplay)
    }
}

/// Result of a mode query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelModes {
    /// The panel's only mode
    pub mode: ModeDescriptor,
    /// Physical width in millimetres
    pub width_mm: u16,
    /// Physical height in millimetres
    pub height_mm: u16,
}

impl From<ModeDescriptor> for PanelModes {
    fn from(mode: ModeDescriptor) -> Self {
        Self {
            mode,
            width_mm: mode.width_mm,
            height_mm: mode.height_mm,
        }
    }
}

/// Trait for the host's mode registration target
pub trait Connector {
    /// Register a duplicate of `mode` as probed
    ///
    /// Returns `false` if the host could not allocate the duplicate.
    fn add_probed_mode(&mut self, mode: ModeDescriptor) -> bool;

    /// Record the physical display size
    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16);
}

impl<T: Connector + ?Sized> Connector for &mut T {
    fn add_probed_mode(&mut self, mode: ModeDescriptor) -> bool {
        T::add_probed_mode(self, mode)
    }

    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16) {
        T::set_physical_size(self, width_mm, height_mm);
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::geometry::OriginDimensions for ModeDescriptor {
    fn size(&self) -> embedded_graphics_core::geometry::Size {
        embedded_graphics_core::geometry::Size::new(
            u32::from(self.hdisplay),
            u32::from(self.vdisplay),
        )
    }
}
