//! Recording fakes for every collaborator
//!
//! All fakes append to one shared [`EventLog`] so tests can assert ordering
//! across the channel, supplies, control lines, backlight and delays. Every
//! call is recorded when attempted, including the ones set up to fail.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, OutputPin};

use crate::backlight::{Backlight, BacklightPower};
use crate::command::{Command, CommandSequence};
use crate::interface::{DsiChannel, LinkConfig, ModeFlags, PixelFormat, TransmissionMode};
use crate::mode::{Connector, ModeDescriptor};
use crate::panels::PanelDescriptor;
use crate::power::Supplies;
use crate::timing::Timings;

/// Small panel with no in-table delays
pub const TEST_PANEL: PanelDescriptor = PanelDescriptor {
    name: "test",
    compatible: "test,panel",
    supplies: &["vdd", "vdda", "vsp"],
    early_init: CommandSequence::new(
        "early init",
        &[Command::write(0xFF, &[0xEE]), Command::write(0xFF, &[0x00])],
    ),
    early_on: CommandSequence::new(
        "early on",
        &[Command::write(0x51, &[0xFF]), Command::write(0x53, &[0x2C])],
    ),
    main_init: CommandSequence::new(
        "init",
        &[
            Command::write(0xFF, &[0x01]),
            Command::write(0x00, &[0x4A]),
            Command::write(0x01, &[0x43]),
            Command::write(0xFF, &[0x00]),
            Command::ExitSleepMode,
        ],
    ),
    display_on: CommandSequence::new("display on", &[Command::SetDisplayOn]),
    display_off: CommandSequence::new(
        "display off",
        &[Command::SetDisplayOff, Command::EnterSleepMode],
    ),
    mode: ModeDescriptor {
        clock_khz: 71_331,
        hdisplay: 720,
        hsync_start: 856,
        hsync_end: 860,
        htotal: 864,
        vdisplay: 1280,
        vsync_start: 1374,
        vsync_end: 1375,
        vtotal: 1376,
        vrefresh: 60,
        width_mm: 53,
        height_mm: 94,
    },
    timings: Timings::DEFAULT,
    link: LinkConfig {
        lanes: 4,
        format: PixelFormat::Rgb888,
        flags: ModeFlags::VIDEO,
    },
};

pub static TEST: PanelDescriptor = TEST_PANEL;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Mode(TransmissionMode),
    Write(u8, Vec<u8>),
    SuppliesOn(Vec<&'static str>),
    SuppliesOff(Vec<&'static str>),
    Pin(&'static str, bool),
    Backlight(BacklightPower),
    DelayNs(u64),
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(address, payload) => Some((*address, payload.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockChannel {
    log: EventLog,
    attempts: usize,
    fail_on: Option<usize>,
}

impl MockChannel {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            attempts: 0,
            fail_on: None,
        }
    }

    /// Fail the n-th write, counting from 1 across all calls
    pub fn fail_on_write(mut self, n: usize) -> Self {
        self.fail_on = Some(n);
        self
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl DsiChannel for MockChannel {
    type Error = MockError;

    fn set_mode(&mut self, mode: TransmissionMode) {
        self.log.push(Event::Mode(mode));
    }

    fn dcs_write(&mut self, address: u8, payload: &[u8]) -> Result<(), Self::Error> {
        self.attempts += 1;
        self.log.push(Event::Write(address, payload.to_vec()));
        if self.fail_on == Some(self.attempts) {
            return Err(MockError);
        }
        Ok(())
    }
}

pub struct MockSupplies {
    log: EventLog,
    fail_enable: bool,
    fail_disable: bool,
}

impl MockSupplies {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail_enable: false,
            fail_disable: false,
        }
    }

    pub fn fail_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    pub fn fail_disable(mut self) -> Self {
        self.fail_disable = true;
        self
    }
}

impl Supplies for MockSupplies {
    type Error = MockError;

    fn bulk_enable(&mut self, names: &[&'static str]) -> Result<(), Self::Error> {
        self.log.push(Event::SuppliesOn(names.to_vec()));
        if self.fail_enable {
            return Err(MockError);
        }
        Ok(())
    }

    fn bulk_disable(&mut self, names: &[&'static str]) -> Result<(), Self::Error> {
        self.log.push(Event::SuppliesOff(names.to_vec()));
        if self.fail_disable {
            return Err(MockError);
        }
        Ok(())
    }
}

pub struct MockPin {
    name: &'static str,
    log: EventLog,
    fail: bool,
}

impl MockPin {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            log: log.clone(),
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn set(&mut self, level: bool) -> Result<(), MockError> {
        self.log.push(Event::Pin(self.name, level));
        if self.fail {
            return Err(MockError);
        }
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

pub struct MockBacklight {
    log: EventLog,
    fail: bool,
}

impl MockBacklight {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Backlight for MockBacklight {
    type Error = MockError;

    fn set_power(&mut self, power: BacklightPower) -> Result<(), Self::Error> {
        self.log.push(Event::Backlight(power));
        if self.fail {
            return Err(MockError);
        }
        Ok(())
    }
}

/// Delay that returns immediately and records the requested time
pub struct MockDelay {
    log: EventLog,
    total_ns: u64,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            total_ns: 0,
        }
    }

    fn record(&mut self, ns: u64) {
        self.total_ns += ns;
        self.log.push(Event::DelayNs(ns));
    }

    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

#[derive(Default)]
pub struct MockConnector {
    pub modes: Vec<ModeDescriptor>,
    pub size: Option<(u16, u16)>,
    fail: bool,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Connector for MockConnector {
    fn add_probed_mode(&mut self, mode: ModeDescriptor) -> bool {
        if self.fail {
            return false;
        }
        self.modes.push(mode);
        true
    }

    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16) {
        self.size = Some((width_mm, height_mm));
    }
}
