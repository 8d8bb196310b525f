//! AUO 720x1280 video-mode panel with a Novatek controller
//!
//! Register tables are vendor data reproduced verbatim. `0xFF` selects the
//! controller's register page and `0xFB 0x01` stops the page from reloading
//! its defaults; the remaining writes are opaque tuning values.

use crate::command::{Command, CommandSequence};
use crate::interface::{LinkConfig, ModeFlags, PixelFormat};
use crate::mode::ModeDescriptor;
use crate::timing::Timings;

use super::PanelDescriptor;

/// AUO Novatek 720p panel
pub static AUO_NOVATEK_720P: PanelDescriptor = PanelDescriptor {
    name: "auo-novatek-720p",
    compatible: "auo,novatek-720p-vid",
    supplies: &["vdd", "vdda", "vsp"],
    early_init: CommandSequence::new("cabc early init", CABC_EARLY_INIT),
    early_on: CommandSequence::new("cabc early on", CABC_EARLY_ON),
    main_init: CommandSequence::new("init", MAIN_INIT),
    display_on: CommandSequence::new("display on", DISPLAY_ON),
    display_off: CommandSequence::new("display off", DISPLAY_OFF),
    mode: ModeDescriptor {
        clock_khz: 71_331,
        hdisplay: 720,
        hsync_start: 720 + 136,
        hsync_end: 720 + 136 + 4,
        htotal: 720 + 136 + 4 + 4,
        vdisplay: 1280,
        vsync_start: 1280 + 94,
        vsync_end: 1280 + 94 + 1,
        vtotal: 1280 + 94 + 1 + 1,
        vrefresh: 60,
        width_mm: 53,
        height_mm: 94,
    },
    timings: Timings::DEFAULT,
    link: LinkConfig {
        lanes: 4,
        format: PixelFormat::Rgb888,
        flags: ModeFlags::VIDEO
            .union(ModeFlags::VIDEO_HSE)
            .union(ModeFlags::CLOCK_NON_CONTINUOUS)
            .union(ModeFlags::EOT_PACKET),
    },
};

// CABC unlock; the controller needs 1ms between the two 0x26 writes
const CABC_EARLY_INIT: &[Command] = &[
    Command::write(0xFF, &[0xEE]),
    Command::write(0x26, &[0x08]),
    Command::DelayMs(1),
    Command::write(0x26, &[0x00]),
    Command::write(0xFF, &[0x00]),
];

const CABC_EARLY_ON: &[Command] = &[
    Command::write(0xFF, &[0x04]),
    Command::write(0x2A, &[0x84]),
    Command::write(0x29, &[0x99]),
    Command::write(0x28, &[0x99]),
    Command::write(0x27, &[0x99]),
    Command::write(0x26, &[0xAA]),
    Command::write(0x25, &[0xBB]),
    Command::write(0x24, &[0xCC]),
    Command::write(0x23, &[0xDD]),
    Command::write(0x22, &[0xEE]),
    Command::write(0x21, &[0xFF]),
    Command::write(0x0A, &[0x03]),
    Command::write(0x32, &[0x64]),
    Command::write(0xFB, &[0x01]),
    Command::write(0xFF, &[0x00]),
    Command::write(0x51, &[0xFF]),
    Command::write(0x53, &[0x2C]),
    Command::write(0x55, &[0x03]),
];

// Ends with exit sleep mode; the settle time comes from `Timings::sleep_exit_ms`
const MAIN_INIT: &[Command] = &[
    Command::write(0xFF, &[0xEE]),
    Command::write(0xFB, &[0x01]),
    Command::write(0x12, &[0x50]),
    Command::write(0x13, &[0x02]),
    Command::write(0xFF, &[0x00]),
    Command::write(0xFF, &[0x01]),
    Command::write(0xFB, &[0x01]),
    Command::write(0x00, &[0x4A]),
    Command::write(0x01, &[0x43]),
    Command::write(0x02, &[0x54]),
    Command::write(0x03, &[0x55]),
    Command::write(0x04, &[0x55]),
    Command::write(0x05, &[0x33]),
    Command::write(0x06, &[0x22]),
    Command::write(0x08, &[0x56]),
    Command::write(0x09, &[0x8F]),
    Command::write(0x0B, &[0x97]),
    Command::write(0x0C, &[0x97]),
    Command::write(0x0D, &[0x2F]),
    Command::write(0x0E, &[0x24]),
    Command::write(0x36, &[0x73]),
    Command::write(0x0F, &[0x04]),
    Command::write(0x69, &[0x99]),
    Command::write(0x6F, &[0x03]),
    Command::write(0xFF, &[0x05]),
    Command::write(0xFB, &[0x01]),
    Command::write(0x01, &[0x00]),
    Command::write(0x02, &[0x8D]),
    Command::write(0x03, &[0x8D]),
    Command::write(0x04, &[0x8D]),
    Command::write(0x05, &[0x30]),
    Command::write(0x06, &[0x33]),
    Command::write(0x07, &[0x01]),
    Command::write(0x08, &[0x00]),
    Command::write(0x09, &[0x46]),
    Command::write(0x0A, &[0x46]),
    Command::write(0x0D, &[0x0B]),
    Command::write(0x0E, &[0x1D]),
    Command::write(0x0F, &[0x08]),
    Command::write(0x10, &[0x53]),
    Command::write(0x11, &[0x00]),
    Command::write(0x12, &[0x00]),
    Command::write(0x14, &[0x01]),
    Command::write(0x15, &[0x00]),
    Command::write(0x16, &[0x05]),
    Command::write(0x17, &[0x04]),
    Command::write(0x19, &[0x7F]),
    Command::write(0x1A, &[0xFF]),
    Command::write(0x1B, &[0x0F]),
    Command::write(0x1C, &[0x00]),
    Command::write(0x1D, &[0x00]),
    Command::write(0x1E, &[0x00]),
    Command::write(0x1F, &[0x07]),
    Command::write(0x20, &[0x00]),
    Command::write(0x21, &[0x00]),
    Command::write(0x22, &[0x55]),
    Command::write(0x23, &[0x4D]),
    Command::write(0x6C, &[0x00]),
    Command::write(0x6D, &[0x00]),
    Command::write(0x2D, &[0x02]),
    Command::write(0x83, &[0x02]),
    Command::write(0x9E, &[0x58]),
    Command::write(0x9F, &[0x58]),
    Command::write(0xA0, &[0x41]),
    Command::write(0xA2, &[0x10]),
    Command::write(0xBB, &[0x0A]),
    Command::write(0xBC, &[0x0A]),
    Command::write(0x28, &[0x01]),
    Command::write(0x2F, &[0x02]),
    Command::write(0x32, &[0x08]),
    Command::write(0x33, &[0xB8]),
    Command::write(0x36, &[0x02]),
    Command::write(0x37, &[0x00]),
    Command::write(0x43, &[0x00]),
    Command::write(0x4B, &[0x21]),
    Command::write(0x4C, &[0x03]),
    Command::write(0x50, &[0x21]),
    Command::write(0x51, &[0x03]),
    Command::write(0x58, &[0x21]),
    Command::write(0x59, &[0x03]),
    Command::write(0x5D, &[0x21]),
    Command::write(0x5E, &[0x03]),
    Command::write(0xFF, &[0x01]),
    Command::write(0xFB, &[0x01]),
    Command::write(0x75, &[0x00]),
    Command::write(0x76, &[0x59]),
    Command::write(0x77, &[0x00]),
    Command::write(0x78, &[0x61]),
    Command::write(0x79, &[0x00]),
    Command::write(0x7A, &[0x72]),
    Command::write(0x7B, &[0x00]),
    Command::write(0x7C, &[0x81]),
    Command::write(0x7D, &[0x00]),
    Command::write(0x7E, &[0x90]),
    Command::write(0x7F, &[0x00]),
    Command::write(0x80, &[0x9E]),
    Command::write(0x81, &[0x00]),
    Command::write(0x82, &[0xAB]),
    Command::write(0x83, &[0x00]),
    Command::write(0x84, &[0xB7]),
    Command::write(0x85, &[0x00]),
    Command::write(0x86, &[0xC2]),
    Command::write(0x87, &[0x00]),
    Command::write(0x88, &[0xE8]),
    Command::write(0x89, &[0x01]),
    Command::write(0x8A, &[0x0A]),
    Command::write(0x8B, &[0x01]),
    Command::write(0x8C, &[0x40]),
    Command::write(0x8D, &[0x01]),
    Command::write(0x8E, &[0x6E]),
    Command::write(0x8F, &[0x01]),
    Command::write(0x90, &[0xB5]),
    Command::write(0x91, &[0x02]),
    Command::write(0x92, &[0x0D]),
    Command::write(0x93, &[0x02]),
    Command::write(0x94, &[0x0F]),
    Command::write(0x95, &[0x02]),
    Command::write(0x96, &[0x57]),
    Command::write(0x97, &[0x02]),
    Command::write(0x98, &[0x9E]),
    Command::write(0x99, &[0x02]),
    Command::write(0x9A, &[0xCA]),
    Command::write(0x9B, &[0x03]),
    Command::write(0x9C, &[0x05]),
    Command::write(0x9D, &[0x03]),
    Command::write(0x9E, &[0x2C]),
    Command::write(0x9F, &[0x03]),
    Command::write(0xA0, &[0x60]),
    Command::write(0xA2, &[0x03]),
    Command::write(0xA3, &[0x71]),
    Command::write(0xA4, &[0x03]),
    Command::write(0xA5, &[0x87]),
    Command::write(0xA6, &[0x03]),
    Command::write(0xA7, &[0xB8]),
    Command::write(0xA9, &[0x03]),
    Command::write(0xAA, &[0xC8]),
    Command::write(0xAB, &[0x03]),
    Command::write(0xAC, &[0xD8]),
    Command::write(0xAD, &[0x03]),
    Command::write(0xAE, &[0xE8]),
    Command::write(0xAF, &[0x03]),
    Command::write(0xB0, &[0xF8]),
    Command::write(0xB1, &[0x03]),
    Command::write(0xB2, &[0xFF]),
    Command::write(0xB3, &[0x00]),
    Command::write(0xB4, &[0x59]),
    Command::write(0xB5, &[0x00]),
    Command::write(0xB6, &[0x61]),
    Command::write(0xB7, &[0x00]),
    Command::write(0xB8, &[0x72]),
    Command::write(0xB9, &[0x00]),
    Command::write(0xBA, &[0x81]),
    Command::write(0xBB, &[0x00]),
    Command::write(0xBC, &[0x90]),
    Command::write(0xBD, &[0x00]),
    Command::write(0xBE, &[0x9E]),
    Command::write(0xBF, &[0x00]),
    Command::write(0xC0, &[0xAB]),
    Command::write(0xC1, &[0x00]),
    Command::write(0xC2, &[0xB7]),
    Command::write(0xC3, &[0x00]),
    Command::write(0xC4, &[0xC2]),
    Command::write(0xC5, &[0x00]),
    Command::write(0xC6, &[0xE8]),
    Command::write(0xC7, &[0x01]),
    Command::write(0xC8, &[0x0A]),
    Command::write(0xC9, &[0x01]),
    Command::write(0xCA, &[0x40]),
    Command::write(0xCB, &[0x01]),
    Command::write(0xCC, &[0x6E]),
    Command::write(0xCD, &[0x01]),
    Command::write(0xCE, &[0xB5]),
    Command::write(0xCF, &[0x02]),
    Command::write(0xD0, &[0x0D]),
    Command::write(0xD1, &[0x02]),
    Command::write(0xD2, &[0x0F]),
    Command::write(0xD3, &[0x02]),
    Command::write(0xD4, &[0x57]),
    Command::write(0xD5, &[0x02]),
    Command::write(0xD6, &[0x9E]),
    Command::write(0xD7, &[0x02]),
    Command::write(0xD8, &[0xCA]),
    Command::write(0xD9, &[0x03]),
    Command::write(0xDA, &[0x05]),
    Command::write(0xDB, &[0x03]),
    Command::write(0xDC, &[0x2C]),
    Command::write(0xDD, &[0x03]),
    Command::write(0xDE, &[0x60]),
    Command::write(0xDF, &[0x03]),
    Command::write(0xE0, &[0x71]),
    Command::write(0xE1, &[0x03]),
    Command::write(0xE2, &[0x87]),
    Command::write(0xE3, &[0x03]),
    Command::write(0xE4, &[0xB8]),
    Command::write(0xE5, &[0x03]),
    Command::write(0xE6, &[0xC8]),
    Command::write(0xE7, &[0x03]),
    Command::write(0xE8, &[0xD8]),
    Command::write(0xE9, &[0x03]),
    Command::write(0xEA, &[0xE8]),
    Command::write(0xEB, &[0x03]),
    Command::write(0xEC, &[0xF8]),
    Command::write(0xED, &[0x03]),
    Command::write(0xEE, &[0xFF]),
    Command::write(0xEF, &[0x00]),
    Command::write(0xF0, &[0x6E]),
    Command::write(0xF1, &[0x00]),
    Command::write(0xF2, &[0x76]),
    Command::write(0xF3, &[0x00]),
    Command::write(0xF4, &[0x85]),
    Command::write(0xF5, &[0x00]),
    Command::write(0xF6, &[0x92]),
    Command::write(0xF7, &[0x00]),
    Command::write(0xF8, &[0x9F]),
    Command::write(0xF9, &[0x00]),
    Command::write(0xFA, &[0xAB]),
    Command::write(0xFF, &[0x02]),
    Command::write(0xFB, &[0x01]),
    Command::write(0x00, &[0x00]),
    Command::write(0x01, &[0xB6]),
    Command::write(0x02, &[0x00]),
    Command::write(0x03, &[0xC1]),
    Command::write(0x04, &[0x00]),
    Command::write(0x05, &[0xCB]),
    Command::write(0x06, &[0x00]),
    Command::write(0x07, &[0xEF]),
    Command::write(0x08, &[0x01]),
    Command::write(0x09, &[0x0F]),
    Command::write(0x0A, &[0x01]),
    Command::write(0x0B, &[0x43]),
    Command::write(0x0C, &[0x01]),
    Command::write(0x0D, &[0x6E]),
    Command::write(0x0E, &[0x01]),
    Command::write(0x0F, &[0xB4]),
    Command::write(0x10, &[0x02]),
    Command::write(0x11, &[0x0C]),
    Command::write(0x12, &[0x02]),
    Command::write(0x13, &[0x0E]),
    Command::write(0x14, &[0x02]),
    Command::write(0x15, &[0x56]),
    Command::write(0x16, &[0x02]),
    Command::write(0x17, &[0x9E]),
    Command::write(0x18, &[0x02]),
    Command::write(0x19, &[0xCA]),
    Command::write(0x1A, &[0x03]),
    Command::write(0x1B, &[0x05]),
    Command::write(0x1C, &[0x03]),
    Command::write(0x1D, &[0x2A]),
    Command::write(0x1E, &[0x03]),
    Command::write(0x1F, &[0x56]),
    Command::write(0x20, &[0x03]),
    Command::write(0x21, &[0x61]),
    Command::write(0x22, &[0x03]),
    Command::write(0x23, &[0x6F]),
    Command::write(0x24, &[0x03]),
    Command::write(0x25, &[0x7D]),
    Command::write(0x26, &[0x03]),
    Command::write(0x27, &[0x8D]),
    Command::write(0x28, &[0x03]),
    Command::write(0x29, &[0x96]),
    Command::write(0x2A, &[0x03]),
    Command::write(0x2B, &[0xA2]),
    Command::write(0x2D, &[0x03]),
    Command::write(0x2F, &[0xB4]),
    Command::write(0x30, &[0x03]),
    Command::write(0x31, &[0xFF]),
    Command::write(0x32, &[0x00]),
    Command::write(0x33, &[0x6E]),
    Command::write(0x34, &[0x00]),
    Command::write(0x35, &[0x76]),
    Command::write(0x36, &[0x00]),
    Command::write(0x37, &[0x85]),
    Command::write(0x38, &[0x00]),
    Command::write(0x39, &[0x92]),
    Command::write(0x3A, &[0x00]),
    Command::write(0x3B, &[0x9F]),
    Command::write(0x3D, &[0x00]),
    Command::write(0x3F, &[0xAB]),
    Command::write(0x40, &[0x00]),
    Command::write(0x41, &[0xB6]),
    Command::write(0x42, &[0x00]),
    Command::write(0x43, &[0xC1]),
    Command::write(0x44, &[0x00]),
    Command::write(0x45, &[0xCB]),
    Command::write(0x46, &[0x00]),
    Command::write(0x47, &[0xEF]),
    Command::write(0x48, &[0x01]),
    Command::write(0x49, &[0x0F]),
    Command::write(0x4A, &[0x01]),
    Command::write(0x4B, &[0x43]),
    Command::write(0x4C, &[0x01]),
    Command::write(0x4D, &[0x6E]),
    Command::write(0x4E, &[0x01]),
    Command::write(0x4F, &[0xB4]),
    Command::write(0x50, &[0x02]),
    Command::write(0x51, &[0x0C]),
    Command::write(0x52, &[0x02]),
    Command::write(0x53, &[0x0E]),
    Command::write(0x54, &[0x02]),
    Command::write(0x55, &[0x56]),
    Command::write(0x56, &[0x02]),
    Command::write(0x58, &[0x9E]),
    Command::write(0x59, &[0x02]),
    Command::write(0x5A, &[0xCA]),
    Command::write(0x5B, &[0x03]),
    Command::write(0x5C, &[0x05]),
    Command::write(0x5D, &[0x03]),
    Command::write(0x5E, &[0x2A]),
    Command::write(0x5F, &[0x03]),
    Command::write(0x60, &[0x56]),
    Command::write(0x61, &[0x03]),
    Command::write(0x62, &[0x61]),
    Command::write(0x63, &[0x03]),
    Command::write(0x64, &[0x6F]),
    Command::write(0x65, &[0x03]),
    Command::write(0x66, &[0x7D]),
    Command::write(0x67, &[0x03]),
    Command::write(0x68, &[0x8D]),
    Command::write(0x69, &[0x03]),
    Command::write(0x6A, &[0x96]),
    Command::write(0x6B, &[0x03]),
    Command::write(0x6C, &[0xA2]),
    Command::write(0x6D, &[0x03]),
    Command::write(0x6E, &[0xB4]),
    Command::write(0x6F, &[0x03]),
    Command::write(0x70, &[0xFF]),
    Command::write(0x71, &[0x00]),
    Command::write(0x72, &[0x00]),
    Command::write(0x73, &[0x00]),
    Command::write(0x74, &[0x0E]),
    Command::write(0x75, &[0x00]),
    Command::write(0x76, &[0x26]),
    Command::write(0x77, &[0x00]),
    Command::write(0x78, &[0x3A]),
    Command::write(0x79, &[0x00]),
    Command::write(0x7A, &[0x4C]),
    Command::write(0x7B, &[0x00]),
    Command::write(0x7C, &[0x5E]),
    Command::write(0x7D, &[0x00]),
    Command::write(0x7E, &[0x6E]),
    Command::write(0x7F, &[0x00]),
    Command::write(0x80, &[0x7B]),
    Command::write(0x81, &[0x00]),
    Command::write(0x82, &[0x88]),
    Command::write(0x83, &[0x00]),
    Command::write(0x84, &[0xB4]),
    Command::write(0x85, &[0x00]),
    Command::write(0x86, &[0xDB]),
    Command::write(0x87, &[0x01]),
    Command::write(0x88, &[0x17]),
    Command::write(0x89, &[0x01]),
    Command::write(0x8A, &[0x4A]),
    Command::write(0x8B, &[0x01]),
    Command::write(0x8C, &[0x98]),
    Command::write(0x8D, &[0x01]),
    Command::write(0x8E, &[0xFC]),
    Command::write(0x8F, &[0x01]),
    Command::write(0x90, &[0xFE]),
    Command::write(0x91, &[0x02]),
    Command::write(0x92, &[0x4A]),
    Command::write(0x93, &[0x02]),
    Command::write(0x94, &[0x93]),
    Command::write(0x95, &[0x02]),
    Command::write(0x96, &[0xC0]),
    Command::write(0x97, &[0x03]),
    Command::write(0x98, &[0x01]),
    Command::write(0x99, &[0x03]),
    Command::write(0x9A, &[0x2F]),
    Command::write(0x9B, &[0x03]),
    Command::write(0x9C, &[0x85]),
    Command::write(0x9D, &[0x03]),
    Command::write(0x9E, &[0xCC]),
    Command::write(0x9F, &[0x03]),
    Command::write(0xA0, &[0xD4]),
    Command::write(0xA2, &[0x03]),
    Command::write(0xA3, &[0xDC]),
    Command::write(0xA4, &[0x03]),
    Command::write(0xA5, &[0xE4]),
    Command::write(0xA6, &[0x03]),
    Command::write(0xA7, &[0xEC]),
    Command::write(0xA9, &[0x03]),
    Command::write(0xAA, &[0xF4]),
    Command::write(0xAB, &[0x03]),
    Command::write(0xAC, &[0xFC]),
    Command::write(0xAD, &[0x03]),
    Command::write(0xAE, &[0xFF]),
    Command::write(0xAF, &[0x00]),
    Command::write(0xB0, &[0x00]),
    Command::write(0xB1, &[0x00]),
    Command::write(0xB2, &[0x0E]),
    Command::write(0xB3, &[0x00]),
    Command::write(0xB4, &[0x26]),
    Command::write(0xB5, &[0x00]),
    Command::write(0xB6, &[0x3A]),
    Command::write(0xB7, &[0x00]),
    Command::write(0xB8, &[0x4C]),
    Command::write(0xB9, &[0x00]),
    Command::write(0xBA, &[0x5E]),
    Command::write(0xBB, &[0x00]),
    Command::write(0xBC, &[0x6E]),
    Command::write(0xBD, &[0x00]),
    Command::write(0xBE, &[0x7B]),
    Command::write(0xBF, &[0x00]),
    Command::write(0xC0, &[0x88]),
    Command::write(0xC1, &[0x00]),
    Command::write(0xC2, &[0xB4]),
    Command::write(0xC3, &[0x00]),
    Command::write(0xC4, &[0xDB]),
    Command::write(0xC5, &[0x01]),
    Command::write(0xC6, &[0x17]),
    Command::write(0xC7, &[0x01]),
    Command::write(0xC8, &[0x4A]),
    Command::write(0xC9, &[0x01]),
    Command::write(0xCA, &[0x98]),
    Command::write(0xCB, &[0x01]),
    Command::write(0xCC, &[0xFC]),
    Command::write(0xCD, &[0x01]),
    Command::write(0xCE, &[0xFE]),
    Command::write(0xCF, &[0x02]),
    Command::write(0xD0, &[0x4A]),
    Command::write(0xD1, &[0x02]),
    Command::write(0xD2, &[0x93]),
    Command::write(0xD3, &[0x02]),
    Command::write(0xD4, &[0xC0]),
    Command::write(0xD5, &[0x03]),
    Command::write(0xD6, &[0x01]),
    Command::write(0xD7, &[0x03]),
    Command::write(0xD8, &[0x2F]),
    Command::write(0xD9, &[0x03]),
    Command::write(0xDA, &[0x85]),
    Command::write(0xDB, &[0x03]),
    Command::write(0xDC, &[0xCC]),
    Command::write(0xDD, &[0x03]),
    Command::write(0xDE, &[0xD4]),
    Command::write(0xDF, &[0x03]),
    Command::write(0xE0, &[0xDC]),
    Command::write(0xE1, &[0x03]),
    Command::write(0xE2, &[0xE4]),
    Command::write(0xE3, &[0x03]),
    Command::write(0xE4, &[0xEC]),
    Command::write(0xE5, &[0x03]),
    Command::write(0xE6, &[0xF4]),
    Command::write(0xE7, &[0x03]),
    Command::write(0xE8, &[0xFC]),
    Command::write(0xE9, &[0x03]),
    Command::write(0xEA, &[0xFF]),
    Command::write(0xFF, &[0x00]),
    Command::write(0xFB, &[0x01]),
    Command::write(0xC2, &[0x03]),
    Command::write(0x3B, &[0x03, 0x02, 0x03, 0x08, 0x04]),
    Command::write(0xBA, &[0x03]),
    Command::ExitSleepMode,
];

const DISPLAY_ON: &[Command] = &[
    Command::SetDisplayOn,
];

const DISPLAY_OFF: &[Command] = &[
    Command::write(0xFF, &[0x10]),
    Command::SetDisplayOff,
    Command::EnterSleepMode,
];
