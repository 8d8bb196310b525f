//! DCS command definitions and command-table data types
//!
//! This module defines the standard MIPI DCS opcodes the lifecycle issues on
//! its own, and the tagged data types vendor command tables are written in.
//! A command table is plain `static` data; the [`sequence`](crate::sequence)
//! module interprets it against a [`DsiChannel`](crate::DsiChannel).
//!
//! ## Example
//!
//! ```
//! use dsi_panel::command::{Command, CommandSequence};
//!
//! static UNLOCK: CommandSequence = CommandSequence::new(
//!     "unlock",
//!     &[
//!         Command::write(0xFF, &[0xEE]),
//!         Command::DelayMs(1),
//!         Command::write(0xFF, &[0x00]),
//!     ],
//! );
//!
//! assert_eq!(UNLOCK.len(), 3);
//! assert_eq!(UNLOCK.delay_ms(), 1);
//! ```

// Standard DCS opcodes

/// Enter sleep mode command (0x10)
///
/// Stops the panel's display and oscillator. The panel needs a settle
/// period before supplies may be cut.
pub const ENTER_SLEEP_MODE: u8 = 0x10;

/// Exit sleep mode command (0x11)
///
/// Must be issued before any command that expects the panel active.
pub const EXIT_SLEEP_MODE: u8 = 0x11;

/// Set display off command (0x28)
pub const SET_DISPLAY_OFF: u8 = 0x28;

/// Set display on command (0x29)
pub const SET_DISPLAY_ON: u8 = 0x29;

/// One addressed register write
///
/// The payload is opaque vendor data and always holds at least one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandWrite {
    /// DCS address (opcode)
    pub address: u8,
    /// Parameter bytes
    pub payload: &'static [u8],
}

/// One entry of a command table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Addressed write with a vendor payload
    Write(CommandWrite),
    /// DCS exit sleep mode
    ExitSleepMode,
    /// DCS enter sleep mode
    EnterSleepMode,
    /// DCS set display on
    SetDisplayOn,
    /// DCS set display off
    SetDisplayOff,
    /// Blocking gap inside a table, in milliseconds
    DelayMs(u32),
}

impl Command {
    /// Shorthand for [`Command::Write`]
    pub const fn write(address: u8, payload: &'static [u8]) -> Self {
        Self::Write(CommandWrite { address, payload })
    }

    /// Returns `true` if this entry is sent over the channel
    pub const fn is_transmitted(&self) -> bool {
        !matches!(self, Self::DelayMs(_))
    }
}

/// Named, ordered list of commands executed start to end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSequence {
    /// Name used in log output
    pub name: &'static str,
    /// Commands in issue order
    pub commands: &'static [Command],
}

impl CommandSequence {
    /// Create a new sequence
    pub const fn new(name: &'static str, commands: &'static [Command]) -> Self {
        Self { name, commands }
    }

    /// Number of entries, delays included
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the sequence has no entries
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of entries sent over the channel
    pub fn transmitted_len(&self) -> usize {
        self.commands.iter().filter(|c| c.is_transmitted()).count()
    }

    /// Sum of the in-table delays in milliseconds
    pub fn delay_ms(&self) -> u32 {
        self.commands
            .iter()
            .map(|c| match c {
                Command::DelayMs(ms) => *ms,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SEQ: CommandSequence = CommandSequence::new(
        "test",
        &[
            Command::write(0xFF, &[0xEE]),
            Command::DelayMs(3),
            Command::ExitSleepMode,
            Command::DelayMs(2),
        ],
    );

    #[test]
    fn test_dcs_opcodes() {
        assert_eq!(ENTER_SLEEP_MODE, 0x10);
        assert_eq!(EXIT_SLEEP_MODE, 0x11);
        assert_eq!(SET_DISPLAY_OFF, 0x28);
        assert_eq!(SET_DISPLAY_ON, 0x29);
    }

    #[test]
    fn test_sequence_counts() {
        assert_eq!(SEQ.len(), 4);
        assert_eq!(SEQ.transmitted_len(), 2);
        assert_eq!(SEQ.delay_ms(), 5);
        assert!(!SEQ.is_empty());
    }

    #[test]
    fn test_write_shorthand() {
        assert_eq!(
            Command::write(0x3B, &[0x03, 0x02]),
            Command::Write(CommandWrite {
                address: 0x3B,
                payload: &[0x03, 0x02],
            })
        );
    }
}
