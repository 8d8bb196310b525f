//! Command sequencer
//!
//! A small interpreter over [`CommandSequence`] tables. Every entry becomes
//! exactly one channel call, in table order. The first failing call ends the
//! run and its error is returned as-is; later entries are never attempted.
//! A partially applied table is a possible outcome and is left to the caller
//! to recover from.

use embedded_hal::delay::DelayNs;

use crate::command::{Command, CommandSequence};
use crate::interface::{DsiChannel, TransmissionMode};

/// Run `sequence` over `channel` with `mode` applied for the whole run
///
/// # Errors
///
/// Returns the channel error of the first failed command.
pub fn run<C, D>(
    channel: &mut C,
    delay: &mut D,
    sequence: &CommandSequence,
    mode: TransmissionMode,
) -> Result<(), C::Error>
where
    C: DsiChannel,
    D: DelayNs,
{
    log::debug!(
        "{}: {} commands, {:?}",
        sequence.name,
        sequence.len(),
        mode
    );
    channel.set_mode(mode);

    for (index, command) in sequence.commands.iter().enumerate() {
        let result = match *command {
            Command::Write(write) => {
                log::trace!("{}: {:#04x} {:02x?}", sequence.name, write.address, write.payload);
                channel.dcs_write(write.address, write.payload)
            }
            Command::ExitSleepMode => channel.exit_sleep_mode(),
            Command::EnterSleepMode => channel.enter_sleep_mode(),
            Command::SetDisplayOn => channel.set_display_on(),
            Command::SetDisplayOff => channel.set_display_off(),
            Command::DelayMs(ms) => {
                log::trace!("{}: delay {}ms", sequence.name, ms);
                delay.delay_ms(ms);
                Ok(())
            }
        };

        if let Err(e) = result {
            log::debug!(
                "{}: command {} of {} failed: {:?}",
                sequence.name,
                index + 1,
                sequence.len(),
                e
            );
            return Err(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ENTER_SLEEP_MODE, EXIT_SLEEP_MODE};
    use crate::mock::{Event, EventLog, MockChannel, MockDelay, MockError};

    static TABLE: CommandSequence = CommandSequence::new(
        "table",
        &[
            Command::write(0xFF, &[0xEE]),
            Command::write(0x26, &[0x08]),
            Command::DelayMs(1),
            Command::write(0x26, &[0x00]),
            Command::write(0x3B, &[0x03, 0x02, 0x03, 0x08, 0x04]),
            Command::ExitSleepMode,
        ],
    );

    #[test]
    fn test_runs_every_command_in_order() {
        let log = EventLog::new();
        let mut channel = MockChannel::new(&log);
        let mut delay = MockDelay::new(&log);

        run(&mut channel, &mut delay, &TABLE, TransmissionMode::LowPower).unwrap();

        assert_eq!(
            log.events(),
            alloc::vec![
                Event::Mode(TransmissionMode::LowPower),
                Event::Write(0xFF, alloc::vec![0xEE]),
                Event::Write(0x26, alloc::vec![0x08]),
                Event::DelayNs(1_000_000),
                Event::Write(0x26, alloc::vec![0x00]),
                Event::Write(0x3B, alloc::vec![0x03, 0x02, 0x03, 0x08, 0x04]),
                Event::Write(EXIT_SLEEP_MODE, alloc::vec![]),
            ]
        );
    }

    #[test]
    fn test_mode_is_set_once_before_writes() {
        let log = EventLog::new();
        let mut channel = MockChannel::new(&log);
        let mut delay = MockDelay::new(&log);

        run(&mut channel, &mut delay, &TABLE, TransmissionMode::HighSpeed).unwrap();

        let events = log.events();
        assert_eq!(events.first(), Some(&Event::Mode(TransmissionMode::HighSpeed)));
        assert_eq!(
            events.iter().filter(|e| matches!(e, Event::Mode(_))).count(),
            1
        );
    }

    #[test]
    fn test_stops_at_first_failure() {
        for fail_at in 1..=TABLE.transmitted_len() {
            let log = EventLog::new();
            let mut channel = MockChannel::new(&log).fail_on_write(fail_at);
            let mut delay = MockDelay::new(&log);

            let result = run(&mut channel, &mut delay, &TABLE, TransmissionMode::LowPower);

            assert_eq!(result, Err(MockError));
            assert_eq!(channel.attempts(), fail_at);
            assert_eq!(log.writes().len(), fail_at);
        }
    }

    #[test]
    fn test_failure_skips_trailing_delay() {
        static SEQ: CommandSequence = CommandSequence::new(
            "off",
            &[Command::EnterSleepMode, Command::DelayMs(100)],
        );
        let log = EventLog::new();
        let mut channel = MockChannel::new(&log).fail_on_write(1);
        let mut delay = MockDelay::new(&log);

        assert!(run(&mut channel, &mut delay, &SEQ, TransmissionMode::HighSpeed).is_err());
        assert_eq!(delay.total_ms(), 0);
        assert_eq!(log.writes(), alloc::vec![(ENTER_SLEEP_MODE, alloc::vec![])]);
    }

    #[test]
    fn test_empty_sequence_only_sets_mode() {
        static EMPTY: CommandSequence = CommandSequence::new("empty", &[]);
        let log = EventLog::new();
        let mut channel = MockChannel::new(&log);
        let mut delay = MockDelay::new(&log);

        run(&mut channel, &mut delay, &EMPTY, TransmissionMode::LowPower).unwrap();
        assert_eq!(log.events(), alloc::vec![Event::Mode(TransmissionMode::LowPower)]);
    }
}
