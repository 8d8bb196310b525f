//! Backlight collaborator

use core::fmt::Debug;

/// Backlight power state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BacklightPower {
    /// Backlight lit
    On,
    /// Backlight powered down
    #[default]
    Off,
}

/// Trait for the externally owned backlight device
pub trait Backlight {
    /// Error type for backlight updates
    type Error: Debug;

    /// Switch the backlight on or off
    fn set_power(&mut self, power: BacklightPower) -> Result<(), Self::Error>;
}

impl<T: Backlight + ?Sized> Backlight for &mut T {
    type Error = T::Error;

    fn set_power(&mut self, power: BacklightPower) -> Result<(), Self::Error> {
        T::set_power(self, power)
    }
}

/// Placeholder for a panel without a controllable backlight
pub enum NoBacklight {}

impl Backlight for NoBacklight {
    type Error = core::convert::Infallible;

    fn set_power(&mut self, _power: BacklightPower) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, EventLog, MockBacklight};

    #[test]
    fn test_default_is_off() {
        assert_eq!(BacklightPower::default(), BacklightPower::Off);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let log = EventLog::new();
        let mut backlight = MockBacklight::new(&log);

        fn switch_on<B: Backlight>(mut backlight: B) -> Result<(), B::Error> {
            backlight.set_power(BacklightPower::On)
        }
        switch_on(&mut backlight).unwrap();
        assert_eq!(log.events(), alloc::vec![Event::Backlight(BacklightPower::On)]);
    }
}
