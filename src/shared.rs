//! Panel handle shared between threads
//!
//! Lifecycle callbacks may arrive from different host threads. [`SharedPanel`]
//! serializes them behind one mutex so a `prepare` never interleaves with an
//! `unprepare` on the same panel. A poisoned lock is recovered: the panel
//! state is only committed after a step completes, so it stays consistent.

use std::sync::{Mutex, MutexGuard, PoisonError};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::backlight::{Backlight, NoBacklight};
use crate::interface::DsiChannel;
use crate::mode::{Connector, PanelModes};
use crate::panel::{Panel, PanelError, PanelState};
use crate::power::{NoPin, Supplies};

/// [`Panel`] behind a mutex
pub struct SharedPanel<C, S, RST = NoPin, EN = NoPin, TE = NoPin, BL = NoBacklight> {
    inner: Mutex<Panel<C, S, RST, EN, TE, BL>>,
}

impl<C, S, RST, EN, TE, BL> SharedPanel<C, S, RST, EN, TE, BL>
where
    C: DsiChannel,
    S: Supplies,
    RST: OutputPin,
    EN: OutputPin,
    TE: OutputPin,
    BL: Backlight,
{
    /// Wrap a panel
    pub fn new(panel: Panel<C, S, RST, EN, TE, BL>) -> Self {
        Self {
            inner: Mutex::new(panel),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Panel<C, S, RST, EN, TE, BL>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the panel
    pub fn with<R>(&self, f: impl FnOnce(&mut Panel<C, S, RST, EN, TE, BL>) -> R) -> R {
        f(&mut *self.lock())
    }

    /// See [`Panel::prepare`]
    pub fn prepare<D: DelayNs>(&self, delay: &mut D) -> Result<(), PanelError<C, S>> {
        self.lock().prepare(delay)
    }

    /// See [`Panel::unprepare`]
    pub fn unprepare<D: DelayNs>(&self, delay: &mut D) -> Result<(), PanelError<C, S>> {
        self.lock().unprepare(delay)
    }

    /// See [`Panel::enable`]
    pub fn enable(&self) {
        self.lock().enable();
    }

    /// See [`Panel::disable`]
    pub fn disable(&self) {
        self.lock().disable();
    }

    /// See [`Panel::shutdown`]
    pub fn shutdown(&self) {
        self.lock().shutdown();
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.lock().state()
    }

    /// See [`Panel::modes`]
    pub fn modes(&self) -> PanelModes {
        self.lock().modes()
    }

    /// See [`Panel::get_modes`]
    pub fn get_modes<K: Connector>(&self, connector: &mut K) -> Result<usize, PanelError<C, S>> {
        self.lock().get_modes(connector)
    }

    /// Unwrap the panel
    pub fn into_inner(self) -> Panel<C, S, RST, EN, TE, BL> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::mock::{EventLog, MockChannel, MockConnector, MockDelay, MockSupplies, TEST};

    fn shared(log: &EventLog) -> SharedPanel<MockChannel, MockSupplies> {
        let config = Builder::new().panel(&TEST).build().unwrap();
        SharedPanel::new(Panel::new(MockChannel::new(log), MockSupplies::new(log), config))
    }

    #[test]
    fn test_lifecycle_through_shared_handle() {
        let log = EventLog::new();
        let panel = shared(&log);
        let mut delay = MockDelay::new(&log);

        panel.prepare(&mut delay).unwrap();
        panel.enable();
        assert_eq!(panel.state(), PanelState::Enabled);
        panel.unprepare(&mut delay).unwrap();
        assert_eq!(panel.state(), PanelState::Unprepared);
    }

    #[test]
    fn test_modes_through_shared_handle() {
        let log = EventLog::new();
        let panel = shared(&log);
        let mut connector = MockConnector::new();

        assert_eq!(panel.get_modes(&mut connector), Ok(1));
        assert_eq!(panel.modes().mode, TEST.mode);
        assert_eq!(panel.with(|p| p.config().mode), TEST.mode);
    }

    #[test]
    fn test_into_inner_keeps_state() {
        let log = EventLog::new();
        let panel = shared(&log);
        let mut delay = MockDelay::new(&log);

        panel.prepare(&mut delay).unwrap();
        let inner = panel.into_inner();
        assert_eq!(inner.state(), PanelState::Prepared);
    }
}
