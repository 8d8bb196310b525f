//! Panel descriptors
//!
//! A [`PanelDescriptor`] is everything that differs between panel models:
//! supply names, command tables, the display mode, settle delays and link
//! settings. The lifecycle engine in [`crate::panel`] is the same for all of
//! them.

use crate::command::CommandSequence;
use crate::interface::LinkConfig;
use crate::mode::ModeDescriptor;
use crate::timing::Timings;

mod auo_novatek_720p;

pub use auo_novatek_720p::AUO_NOVATEK_720P;

/// Static description of one panel model
#[derive(Debug)]
pub struct PanelDescriptor {
    /// Short model name
    pub name: &'static str,
    /// Device-tree compatible string
    pub compatible: &'static str,
    /// Supply names, switched together
    pub supplies: &'static [&'static str],
    /// Vendor unlock table, sent in low-power mode
    pub early_init: CommandSequence,
    /// Vendor unlock follow-up, sent in low-power mode
    pub early_on: CommandSequence,
    /// Main register table, ending with exit sleep mode
    pub main_init: CommandSequence,
    /// Display on table, sent in high-speed mode
    pub display_on: CommandSequence,
    /// Display off and enter sleep table, sent in high-speed mode
    pub display_off: CommandSequence,
    /// The panel's only display mode
    pub mode: ModeDescriptor,
    /// Default settle delays
    pub timings: Timings,
    /// DSI link settings
    pub link: LinkConfig,
}

/// Every descriptor shipped with the crate
pub static PANELS: &[&PanelDescriptor] = &[&AUO_NOVATEK_720P];

/// Look up a descriptor by device-tree compatible string
pub fn find_by_compatible(compatible: &str) -> Option<&'static PanelDescriptor> {
    PANELS.iter().copied().find(|p| p.compatible == compatible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::interface::{ModeFlags, PixelFormat};

    fn sequences(panel: &PanelDescriptor) -> [&CommandSequence; 5] {
        [
            &panel.early_init,
            &panel.early_on,
            &panel.main_init,
            &panel.display_on,
            &panel.display_off,
        ]
    }

    #[test]
    fn test_find_by_compatible() {
        let panel = find_by_compatible("auo,novatek-720p-vid").unwrap();
        assert_eq!(panel.name, "auo-novatek-720p");
        assert!(find_by_compatible("auo,unknown").is_none());
    }

    #[test]
    fn test_every_write_has_payload() {
        for panel in PANELS {
            for seq in sequences(panel) {
                for command in seq.commands {
                    if let Command::Write(write) = command {
                        assert!(!write.payload.is_empty(), "{}: empty payload", seq.name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_auo_table_shape() {
        let panel = &AUO_NOVATEK_720P;
        assert_eq!(panel.supplies, &["vdd", "vdda", "vsp"]);

        assert_eq!(panel.early_init.len(), 5);
        assert_eq!(panel.early_init.transmitted_len(), 4);
        assert_eq!(panel.early_init.delay_ms(), 1);
        assert_eq!(panel.early_init.commands[2], Command::DelayMs(1));

        assert_eq!(panel.early_on.len(), 18);
        assert_eq!(panel.early_on.delay_ms(), 0);

        assert_eq!(panel.main_init.len(), 452);
        assert_eq!(panel.main_init.commands.last(), Some(&Command::ExitSleepMode));
        assert_eq!(panel.main_init.delay_ms(), 0);

        assert_eq!(panel.display_on.commands, &[Command::SetDisplayOn]);
        assert_eq!(
            panel.display_off.commands,
            &[
                Command::write(0xFF, &[0x10]),
                Command::SetDisplayOff,
                Command::EnterSleepMode
            ]
        );
    }

    #[test]
    fn test_auo_table_landmarks() {
        let panel = &AUO_NOVATEK_720P;
        assert_eq!(panel.main_init.commands[0], Command::write(0xFF, &[0xEE]));
        assert_eq!(panel.main_init.commands[2], Command::write(0x12, &[0x50]));
        assert_eq!(
            panel.main_init.commands[449],
            Command::write(0x3B, &[0x03, 0x02, 0x03, 0x08, 0x04])
        );
        assert_eq!(panel.early_on.commands[17], Command::write(0x55, &[0x03]));
    }

    #[test]
    fn test_auo_link() {
        let link = AUO_NOVATEK_720P.link;
        assert_eq!(link.lanes, 4);
        assert_eq!(link.format, PixelFormat::Rgb888);
        assert!(link.flags.contains(
            ModeFlags::VIDEO
                | ModeFlags::VIDEO_HSE
                | ModeFlags::CLOCK_NON_CONTINUOUS
                | ModeFlags::EOT_PACKET
        ));
    }

    #[test]
    fn test_auo_mode_is_valid() {
        assert!(AUO_NOVATEK_720P.mode.validate().is_ok());
    }
}
