//! Power resource controller
//!
//! Groups the panel's supplies and GPIO control lines and drives them in
//! fixed order. The supplies are switched as one unit through the
//! [`Supplies`] collaborator: one call, one outcome for the whole set.
//!
//! ## Control lines
//!
//! - **RST**: reset line, pulsed after the supplies settle (optional)
//! - **EN**: panel enable line, raised after the supplies settle (optional)
//! - **TE**: tearing-effect line, raised after EN (optional)
//!
//! Absent lines use [`NoPin`] and every step touching them is skipped.
//! Line levels are logical: "assert" drives the pin high.

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, Error as _, ErrorKind, OutputPin};

use crate::timing::Timings;

/// Trait for the regulator collaborator
///
/// Both operations act on every named supply and report a single result.
/// How a partial failure is unwound is up to the implementation.
pub trait Supplies {
    /// Error type for supply operations
    type Error: Debug;

    /// Enable all named supplies
    fn bulk_enable(&mut self, names: &[&'static str]) -> Result<(), Self::Error>;

    /// Disable all named supplies
    fn bulk_disable(&mut self, names: &[&'static str]) -> Result<(), Self::Error>;
}

impl<T: Supplies + ?Sized> Supplies for &mut T {
    type Error = T::Error;

    fn bulk_enable(&mut self, names: &[&'static str]) -> Result<(), Self::Error> {
        T::bulk_enable(self, names)
    }

    fn bulk_disable(&mut self, names: &[&'static str]) -> Result<(), Self::Error> {
        T::bulk_disable(self, names)
    }
}

/// Placeholder for a control line that is not wired
///
/// Uninhabited: an `Option<NoPin>` is always `None`.
pub enum NoPin {}

impl digital::ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

type LineResult = core::result::Result<(), ErrorKind>;

/// Supplies and control lines owned by one panel
pub struct PowerResources<S, RST = NoPin, EN = NoPin, TE = NoPin> {
    supplies: S,
    names: &'static [&'static str],
    reset: Option<RST>,
    enable: Option<EN>,
    te: Option<TE>,
}

impl<S: Supplies> PowerResources<S> {
    /// Create a resource set with supplies only
    ///
    /// `names` are the supply names passed to every bulk call, usually the
    /// panel descriptor's [`supplies`](crate::panels::PanelDescriptor::supplies).
    pub fn new(supplies: S, names: &'static [&'static str]) -> Self {
        Self {
            supplies,
            names,
            reset: None,
            enable: None,
            te: None,
        }
    }
}

impl<S, RST, EN, TE> PowerResources<S, RST, EN, TE>
where
    S: Supplies,
    RST: OutputPin,
    EN: OutputPin,
    TE: OutputPin,
{
    /// Attach a reset line
    pub fn reset_pin<RST2: OutputPin>(self, rst: RST2) -> PowerResources<S, RST2, EN, TE> {
        PowerResources {
            supplies: self.supplies,
            names: self.names,
            reset: Some(rst),
            enable: self.enable,
            te: self.te,
        }
    }

    /// Attach a panel enable line
    pub fn enable_pin<EN2: OutputPin>(self, en: EN2) -> PowerResources<S, RST, EN2, TE> {
        PowerResources {
            supplies: self.supplies,
            names: self.names,
            reset: self.reset,
            enable: Some(en),
            te: self.te,
        }
    }

    /// Attach a tearing-effect line
    pub fn te_pin<TE2: OutputPin>(self, te: TE2) -> PowerResources<S, RST, EN, TE2> {
        PowerResources {
            supplies: self.supplies,
            names: self.names,
            reset: self.reset,
            enable: self.enable,
            te: Some(te),
        }
    }

    /// Supply names used for bulk calls
    pub fn supply_names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Returns `true` if a reset line is attached
    pub fn has_reset(&self) -> bool {
        self.reset.is_some()
    }

    /// Enable every supply as one operation
    pub fn enable_supplies(&mut self) -> Result<(), S::Error> {
        log::trace!("enabling supplies {:?}", self.names);
        self.supplies.bulk_enable(self.names)
    }

    /// Disable every supply as one operation
    pub fn disable_supplies(&mut self) -> Result<(), S::Error> {
        log::trace!("disabling supplies {:?}", self.names);
        self.supplies.bulk_disable(self.names)
    }

    /// Raise the optional enable and TE lines, in that order
    ///
    /// Each raised line is followed by the control line settle time.
    pub fn raise_control_lines<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timings: &Timings,
    ) -> LineResult {
        if let Some(en) = self.enable.as_mut() {
            en.set_high().map_err(|e| e.kind())?;
            delay.delay_us(timings.control_line_settle_us);
        }
        if let Some(te) = self.te.as_mut() {
            te.set_high().map_err(|e| e.kind())?;
            delay.delay_us(timings.control_line_settle_us);
        }
        Ok(())
    }

    /// Drop the optional TE and enable lines, in that order
    ///
    /// Both lines are driven even if the first one fails; the first failure
    /// is returned.
    pub fn lower_control_lines(&mut self) -> LineResult {
        let te = self
            .te
            .as_mut()
            .map_or(Ok(()), |te| te.set_low().map_err(|e| e.kind()));
        let en = self
            .enable
            .as_mut()
            .map_or(Ok(()), |en| en.set_low().map_err(|e| e.kind()));
        te.and(en)
    }

    /// Pulse the reset line: assert, hold, deassert, hold, assert
    ///
    /// No-op without a reset line.
    pub fn pulse_reset<D: DelayNs>(&mut self, delay: &mut D, timings: &Timings) -> LineResult {
        let Some(rst) = self.reset.as_mut() else {
            return Ok(());
        };
        rst.set_high().map_err(|e| e.kind())?;
        delay.delay_ms(timings.reset_assert_ms);
        rst.set_low().map_err(|e| e.kind())?;
        delay.delay_ms(timings.reset_deassert_ms);
        rst.set_high().map_err(|e| e.kind())?;
        Ok(())
    }

    /// Deassert the reset line, no-op without one
    pub fn deassert_reset(&mut self) -> LineResult {
        if let Some(rst) = self.reset.as_mut() {
            rst.set_low().map_err(|e| e.kind())?;
        }
        Ok(())
    }

    /// Release the supplies collaborator and the control lines
    pub fn release(self) -> (S, Option<RST>, Option<EN>, Option<TE>) {
        (self.supplies, self.reset, self.enable, self.te)
    }
}
