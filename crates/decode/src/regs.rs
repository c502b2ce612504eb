//! Register addresses and field masks used by the decoder.
//!
//! Offsets are fixed chip register addresses, 0-indexed into the named
//! bank's capture.

/// `hdmi` bank: sync polarity flags (V bit 4, H bit 5).
pub const HDMI_SYNC_POLARITY: usize = 0x05;
/// `hdmi` bank: line width, 13-bit field in a 16-bit register.
pub const HDMI_LINE_WIDTH: usize = 0x07;
/// `hdmi` bank: field height, 13-bit field in a 16-bit register.
pub const HDMI_FIELD_HEIGHT: usize = 0x09;
/// `hdmi` bank: field status (interlaced bit 5).
pub const HDMI_FIELD_STATUS: usize = 0x0B;
/// `hdmi` bank: horizontal sync front porch, in pixels.
pub const HDMI_HSYNC_FRONT_PORCH: usize = 0x20;
/// `hdmi` bank: horizontal sync pulse width, in pixels.
pub const HDMI_HSYNC_PULSE_WIDTH: usize = 0x22;
/// `hdmi` bank: horizontal sync back porch, in pixels.
pub const HDMI_HSYNC_BACK_PORCH: usize = 0x24;
/// `hdmi` bank: vertical sync front porch, in half-lines.
pub const HDMI_VSYNC_FRONT_PORCH: usize = 0x2A;
/// `hdmi` bank: vertical sync pulse width, in half-lines.
pub const HDMI_VSYNC_PULSE_WIDTH: usize = 0x2E;
/// `hdmi` bank: vertical sync back porch, in half-lines.
pub const HDMI_VSYNC_BACK_PORCH: usize = 0x32;
/// `hdmi` bank: TMDS frequency, packed 8-bit whole + 7-bit fraction.
pub const HDMI_TMDS_FREQ: usize = 0x51;
/// `hdmi` bank: reported colorspace.
pub const HDMI_COLORSPACE: usize = 0x53;

/// `io` bank: level-2 raw interrupt status (HDMI/DVI mode bit 3).
pub const IO_RAW_STATUS_2: usize = 0x65;
/// `io` bank: level-2 pending interrupt status.
pub const IO_INT_STATUS_2: usize = 0x66;
/// `io` bank: level-3 raw status (PLL bit 6, clock bit 4, filters bits 1/0).
pub const IO_RAW_STATUS_3: usize = 0x6A;
/// `io` bank: level-3 pending interrupt status.
pub const IO_INT_STATUS_3: usize = 0x6B;
/// `io` bank: level-4 raw status (HDCP bit 2, cable bit 0).
pub const IO_RAW_STATUS_4: usize = 0x6F;
/// `io` bank: level-4 pending interrupt status.
pub const IO_INT_STATUS_4: usize = 0x70;

/// Active bits of the 13-bit width/height fields.
pub const DIMENSION_MASK: u16 = 0x1FFF;
/// Whole-MHz part of the TMDS frequency register.
pub const TMDS_WHOLE_MASK: u16 = 0xFF80;
/// Right-shift that aligns the whole-MHz part.
pub const TMDS_WHOLE_SHIFT: u32 = 7;
/// Fractional part of the TMDS frequency register, in 1/128 MHz.
pub const TMDS_FRAC_MASK: u16 = 0x007F;
/// Denominator of the fractional TMDS field.
pub const TMDS_FRAC_DIV: f64 = 128.0;
