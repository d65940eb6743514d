//! SSD1306 command set and framing constants

/// Control byte announcing a single command byte
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte announcing a run of display RAM data
pub const CONTROL_DATA: u8 = 0x40;

/// Number of command frames sent by [`init_sequence`]
pub const INIT_SEQUENCE_LEN: usize = 21;

/// SSD1306 commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DEFAULT_CONTRAST: u8 = 0x7F;
    pub const DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const DEFAULT_CLOCK_DIV: u8 = 0x80;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
}

/// Controller setup for a panel `height` pixels tall
///
/// Each byte is sent as its own command frame, in this order. Addressing
/// mode and COM-pin configuration have to land before display-on.
pub fn init_sequence(height: u8) -> [u8; INIT_SEQUENCE_LEN] {
    [
        cmd::DISPLAY_OFF,
        cmd::SET_MEMORY_MODE,
        cmd::MEMORY_MODE_HORIZONTAL,
        cmd::SET_START_LINE,
        cmd::SET_SEG_REMAP,
        cmd::SET_COM_SCAN_DEC,
        cmd::SET_MUX_RATIO,
        height.saturating_sub(1),
        cmd::SET_DISPLAY_OFFSET,
        0x00,
        cmd::SET_COM_PINS,
        cmd::COM_PINS_ALTERNATIVE,
        cmd::SET_CONTRAST,
        cmd::DEFAULT_CONTRAST,
        cmd::DISPLAY_RESUME,
        cmd::SET_NORMAL,
        cmd::SET_CLOCK_DIV,
        cmd::DEFAULT_CLOCK_DIV,
        cmd::SET_CHARGE_PUMP,
        cmd::CHARGE_PUMP_ENABLE,
        cmd::DISPLAY_ON,
    ]
}
