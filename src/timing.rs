//! Settle delays between power-sequence phases
//!
//! All values are blocking waits on the calling thread. They model the time
//! the rails, the reset logic and the panel controller need before the next
//! action and must not be shortened or reordered.

/// Named delay table for one panel
///
/// Millisecond fields are applied with [`DelayNs::delay_ms`], the control
/// line settle time with [`DelayNs::delay_us`].
///
/// [`DelayNs::delay_ms`]: embedded_hal::delay::DelayNs::delay_ms
/// [`DelayNs::delay_us`]: embedded_hal::delay::DelayNs::delay_us
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Wait before enabling the supplies
    pub power_on_ms: u32,
    /// Wait after the supplies report enabled
    pub post_power_ms: u32,
    /// Reset line held asserted at the start of the pulse
    pub reset_assert_ms: u32,
    /// Reset line held deasserted before it is asserted again
    pub reset_deassert_ms: u32,
    /// Wait after the reset pulse, before the first command
    pub post_reset_ms: u32,
    /// Wait after exit sleep mode at the end of the main init table
    pub sleep_exit_ms: u32,
    /// Wait after display on
    pub display_on_ms: u32,
    /// Wait after display off and enter sleep mode, before cutting power
    pub display_off_ms: u32,
    /// Wait after driving an optional enable or TE line, in microseconds
    pub control_line_settle_us: u32,
}

impl Timings {
    /// Delay table used by the AUO Novatek 720p panel
    pub const DEFAULT: Self = Self {
        power_on_ms: 200,
        post_power_ms: 10,
        reset_assert_ms: 20,
        reset_deassert_ms: 200,
        post_reset_ms: 20,
        sleep_exit_ms: 50,
        display_on_ms: 40,
        display_off_ms: 100,
        control_line_settle_us: 10,
    };

    /// Total reset pulse duration
    pub const fn reset_pulse_ms(&self) -> u32 {
        self.reset_assert_ms + self.reset_deassert_ms
    }

    /// Phase delays of a successful power-up with a reset line attached
    ///
    /// In-table delays and control line settle times are not included.
    pub const fn prepare_ms(&self) -> u32 {
        self.power_on_ms
            + self.post_power_ms
            + self.reset_pulse_ms()
            + self.post_reset_ms
            + self.sleep_exit_ms
            + self.display_on_ms
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let t = Timings::default();
        assert_eq!(t.power_on_ms, 200);
        assert_eq!(t.post_power_ms, 10);
        assert_eq!(t.reset_assert_ms, 20);
        assert_eq!(t.reset_deassert_ms, 200);
        assert_eq!(t.post_reset_ms, 20);
        assert_eq!(t.sleep_exit_ms, 50);
        assert_eq!(t.display_on_ms, 40);
        assert_eq!(t.display_off_ms, 100);
    }

    #[test]
    fn test_prepare_total() {
        assert_eq!(Timings::DEFAULT.prepare_ms(), 200 + 10 + 20 + 200 + 20 + 50 + 40);
        assert_eq!(Timings::DEFAULT.reset_pulse_ms(), 220);
    }
}
