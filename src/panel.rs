//! Panel lifecycle
//!
//! [`Panel`] moves a display panel between three states:
//!
//! ```text
//! Unprepared --prepare--> Prepared --enable--> Enabled
//! Unprepared <-unprepare- Prepared <-disable-- Enabled
//! ```
//!
//! `prepare` powers the panel up and sends the command tables, `enable` only
//! switches the backlight. Each operation is a no-op returning success when
//! the panel is already in the target state.
//!
//! ## Power-up order
//!
//! 1. power-on delay, enable supplies, post-power delay
//! 2. optional enable and TE lines
//! 3. reset pulse (if a reset line is attached), post-reset delay
//! 4. early init and early on tables, low-power
//! 5. main init table ending in exit sleep mode, low-power, sleep-exit delay
//! 6. display on table, high-speed, display-on delay
//!
//! Any failure after the supplies came up powers the panel back down
//! (supplies off, enable line low, reset deasserted) and returns the
//! original error. Failures during that rollback are logged only.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::backlight::{Backlight, BacklightPower, NoBacklight};
use crate::command::CommandSequence;
use crate::config::Config;
use crate::error::Error;
use crate::interface::{DsiChannel, LinkConfig, TransmissionMode};
use crate::mode::{Connector, PanelModes};
use crate::power::{NoPin, PowerResources, Supplies};
use crate::sequence;

/// Error type returned by [`Panel`] operations
pub type PanelError<C, S> = Error<<C as DsiChannel>::Error, <S as Supplies>::Error>;

type PanelResult<C, S, T = ()> = core::result::Result<T, PanelError<C, S>>;

/// Lifecycle state of a panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Supplies off, panel not initialized
    #[default]
    Unprepared,
    /// Powered, initialized and displaying, backlight off
    Prepared,
    /// Prepared with the backlight on
    Enabled,
}

/// Collaborators handed back by [`Panel::release`]
pub struct Parts<C, S, RST, EN, TE, BL> {
    /// Transmission channel
    pub channel: C,
    /// Supplies collaborator
    pub supplies: S,
    /// Reset line
    pub reset: Option<RST>,
    /// Panel enable line
    pub enable: Option<EN>,
    /// Tearing-effect line
    pub te: Option<TE>,
    /// Backlight
    pub backlight: Option<BL>,
}

/// Lifecycle driver for one panel
///
/// Owns the transmission channel, the supplies and every control line. Calls
/// take `&mut self`, so one handle is never sequenced from two places at
/// once; see [`SharedPanel`](crate::shared::SharedPanel) (feature `std`) to
/// share a handle between threads.
pub struct Panel<C, S, RST = NoPin, EN = NoPin, TE = NoPin, BL = NoBacklight> {
    channel: C,
    power: PowerResources<S, RST, EN, TE>,
    backlight: Option<BL>,
    config: Config,
    state: PanelState,
}

impl<C, S> Panel<C, S>
where
    C: DsiChannel,
    S: Supplies,
{
    /// Create a new, unprepared panel
    ///
    /// The supplies are switched under the names listed by the configured
    /// panel descriptor.
    pub fn new(channel: C, supplies: S, config: Config) -> Self {
        Self {
            channel,
            power: PowerResources::new(supplies, config.panel.supplies),
            backlight: None,
            config,
            state: PanelState::Unprepared,
        }
    }
}

impl<C, S, RST, EN, TE, BL> Panel<C, S, RST, EN, TE, BL>
where
    C: DsiChannel,
    S: Supplies,
    RST: OutputPin,
    EN: OutputPin,
    TE: OutputPin,
    BL: Backlight,
{
    /// Attach a reset line
    pub fn reset_pin<RST2: OutputPin>(self, rst: RST2) -> Panel<C, S, RST2, EN, TE, BL> {
        Panel {
            channel: self.channel,
            power: self.power.reset_pin(rst),
            backlight: self.backlight,
            config: self.config,
            state: self.state,
        }
    }

    /// Attach a panel enable line
    pub fn enable_pin<EN2: OutputPin>(self, en: EN2) -> Panel<C, S, RST, EN2, TE, BL> {
        Panel {
            channel: self.channel,
            power: self.power.enable_pin(en),
            backlight: self.backlight,
            config: self.config,
            state: self.state,
        }
    }

    /// Attach a tearing-effect line
    pub fn te_pin<TE2: OutputPin>(self, te: TE2) -> Panel<C, S, RST, EN, TE2, BL> {
        Panel {
            channel: self.channel,
            power: self.power.te_pin(te),
            backlight: self.backlight,
            config: self.config,
            state: self.state,
        }
    }

    /// Attach a backlight
    pub fn backlight<BL2: Backlight>(self, backlight: BL2) -> Panel<C, S, RST, EN, TE, BL2> {
        Panel {
            channel: self.channel,
            power: self.power,
            backlight: Some(backlight),
            config: self.config,
            state: self.state,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Returns `true` if the panel is prepared (or enabled)
    pub fn is_prepared(&self) -> bool {
        self.state != PanelState::Unprepared
    }

    /// Returns `true` if the backlight has been enabled
    pub fn is_enabled(&self) -> bool {
        self.state == PanelState::Enabled
    }

    /// Panel configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// DSI link settings the host applies when attaching the panel
    pub fn link_config(&self) -> LinkConfig {
        self.config.panel.link
    }

    /// Power up and initialize the panel
    ///
    /// On failure the panel is left powered down and `Unprepared`, ready for
    /// another `prepare` from scratch.
    pub fn prepare<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<C, S> {
        if self.state != PanelState::Unprepared {
            return Ok(());
        }
        log::debug!("prepare");

        let timings = self.config.timings;
        delay.delay_ms(timings.power_on_ms);
        if let Err(e) = self.power.enable_supplies() {
            log::error!("failed to enable supplies: {:?}", e);
            return Err(Error::PowerResource(e));
        }
        delay.delay_ms(timings.post_power_ms);

        if let Err(e) = self.power_up(delay) {
            self.power_down_best_effort();
            return Err(e);
        }

        self.state = PanelState::Prepared;
        Ok(())
    }

    fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<C, S> {
        let timings = self.config.timings;
        let panel = self.config.panel;

        self.power
            .raise_control_lines(delay, &timings)
            .map_err(|kind| {
                log::error!("failed to raise control lines: {}", kind);
                Error::ControlLine(kind)
            })?;
        self.power.pulse_reset(delay, &timings).map_err(|kind| {
            log::error!("failed to pulse reset: {}", kind);
            Error::ControlLine(kind)
        })?;
        delay.delay_ms(timings.post_reset_ms);

        self.run(delay, &panel.early_init, TransmissionMode::LowPower)
            .inspect_err(|e| log::error!("early init sequence failed: {:?}", e))?;
        self.run(delay, &panel.early_on, TransmissionMode::LowPower)
            .inspect_err(|e| log::error!("early on sequence failed: {:?}", e))?;
        self.run(delay, &panel.main_init, TransmissionMode::LowPower)
            .inspect_err(|e| log::error!("failed to init panel: {:?}", e))?;
        delay.delay_ms(timings.sleep_exit_ms);

        self.run(delay, &panel.display_on, TransmissionMode::HighSpeed)
            .inspect_err(|e| log::error!("failed to set panel on: {:?}", e))?;
        delay.delay_ms(timings.display_on_ms);

        Ok(())
    }

    fn power_down_best_effort(&mut self) {
        if let Err(e) = self.power.disable_supplies() {
            log::warn!("rollback: failed to disable supplies: {:?}", e);
        }
        if let Err(kind) = self.power.lower_control_lines() {
            log::warn!("rollback: failed to lower enable line: {}", kind);
        }
        if let Err(kind) = self.power.deassert_reset() {
            log::warn!("rollback: failed to deassert reset: {}", kind);
        }
    }

    fn run<D: DelayNs>(
        &mut self,
        delay: &mut D,
        sequence: &CommandSequence,
        mode: TransmissionMode,
    ) -> PanelResult<C, S> {
        sequence::run(&mut self.channel, delay, sequence, mode).map_err(Error::Transmission)
    }

    /// Turn the display off, put it to sleep and power it down
    ///
    /// An `Enabled` panel is disabled first. If the display-off table or the
    /// supply disable fails, the error is returned and the panel stays
    /// `Prepared`.
    pub fn unprepare<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<C, S> {
        match self.state {
            PanelState::Unprepared => return Ok(()),
            PanelState::Enabled => self.disable(),
            PanelState::Prepared => {}
        }
        log::debug!("unprepare");

        let timings = self.config.timings;
        let panel = self.config.panel;

        self.run(delay, &panel.display_off, TransmissionMode::HighSpeed)
            .inspect_err(|e| log::error!("failed to set panel off: {:?}", e))?;
        delay.delay_ms(timings.display_off_ms);

        if let Err(e) = self.power.disable_supplies() {
            log::error!("failed to disable supplies: {:?}", e);
            return Err(Error::PowerResource(e));
        }
        if let Err(kind) = self.power.lower_control_lines() {
            log::warn!("failed to lower enable line: {}", kind);
        }
        if let Err(kind) = self.power.deassert_reset() {
            log::warn!("failed to deassert reset: {}", kind);
        }

        self.state = PanelState::Unprepared;
        Ok(())
    }

    /// Switch the backlight on
    ///
    /// Ignored (with a warning) while the panel is unprepared. Backlight
    /// failures are logged and do not block the transition.
    pub fn enable(&mut self) {
        match self.state {
            PanelState::Enabled => return,
            PanelState::Unprepared => {
                log::warn!("enable ignored: panel is not prepared");
                return;
            }
            PanelState::Prepared => {}
        }
        log::debug!("enable");

        self.set_backlight(BacklightPower::On);
        self.state = PanelState::Enabled;
    }

    /// Switch the backlight off
    pub fn disable(&mut self) {
        if self.state != PanelState::Enabled {
            return;
        }
        log::debug!("disable");

        self.set_backlight(BacklightPower::Off);
        self.state = PanelState::Prepared;
    }

    fn set_backlight(&mut self, power: BacklightPower) {
        if let Some(backlight) = self.backlight.as_mut() {
            if let Err(e) = backlight.set_power(power) {
                log::warn!("failed to switch backlight {:?}: {:?}", power, e);
            }
        }
    }

    /// Copy of the panel's mode and physical size
    pub fn modes(&self) -> PanelModes {
        PanelModes::from(self.config.mode)
    }

    /// Register the panel's mode with `connector`
    ///
    /// Returns the number of modes added.
    pub fn get_modes<K: Connector>(&self, connector: &mut K) -> PanelResult<C, S, usize> {
        let mode = self.config.mode;
        if !connector.add_probed_mode(mode) {
            log::error!("failed to add mode {}@{}", mode.name(), mode.vrefresh);
            return Err(Error::Allocation);
        }
        connector.set_physical_size(mode.width_mm, mode.height_mm);
        Ok(1)
    }

    /// Host shutdown hook: switch the backlight off
    pub fn shutdown(&mut self) {
        self.disable();
    }

    /// Force the panel down and hand back its collaborators
    ///
    /// If the orderly unprepare fails, the supplies are cut and the control
    /// lines dropped anyway. Failures while powering down are logged; the
    /// parts are returned regardless.
    pub fn detach<D: DelayNs>(mut self, delay: &mut D) -> Parts<C, S, RST, EN, TE, BL> {
        self.disable();
        if let Err(e) = self.unprepare(delay) {
            log::warn!("failed to unprepare on detach: {:?}", e);
            self.power_down_best_effort();
            self.state = PanelState::Unprepared;
        }
        self.release()
    }

    /// Hand back the collaborators without touching the hardware
    pub fn release(self) -> Parts<C, S, RST, EN, TE, BL> {
        let (supplies, reset, enable, te) = self.power.release();
        Parts {
            channel: self.channel,
            supplies,
            reset,
            enable,
            te,
            backlight: self.backlight,
        }
    }
}
