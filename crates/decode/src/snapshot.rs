//! Decoded snapshot types.

use std::fmt;

/// A flag whose source register may not have been captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    True,
    False,
    Unknown,
}

impl TriState {
    /// Whether the source register was absent from the capture.
    pub fn is_unknown(self) -> bool {
        self == TriState::Unknown
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriState::Unknown, TriState::from)
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TriState::True => "yes",
            TriState::False => "no",
            TriState::Unknown => "unknown",
        })
    }
}

/// Link operating mode reported by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    Hdmi,
    Dvi,
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinkMode::Hdmi => "HDMI",
            LinkMode::Dvi => "DVI",
        })
    }
}

/// Pixel encoding signaled by the transmitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colorspace {
    RgbLimited,
    RgbFull,
    Yuv601,
    Yuv709,
    XvYcc601,
    XvYcc709,
    Yuv601Full,
    Yuv709Full,
    SYcc,
    AdobeYcc601,
    AdobeRgb,
    /// Register value outside the defined range.
    Unknown,
}

impl Colorspace {
    /// Maps the raw colorspace register value.
    pub fn from_reg(value: u8) -> Self {
        match value {
            0 => Colorspace::RgbLimited,
            1 => Colorspace::RgbFull,
            2 => Colorspace::Yuv601,
            3 => Colorspace::Yuv709,
            4 => Colorspace::XvYcc601,
            5 => Colorspace::XvYcc709,
            6 => Colorspace::Yuv601Full,
            7 => Colorspace::Yuv709Full,
            8 => Colorspace::SYcc,
            9 => Colorspace::AdobeYcc601,
            10 => Colorspace::AdobeRgb,
            _ => Colorspace::Unknown,
        }
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Colorspace::RgbLimited => "RGB limited",
            Colorspace::RgbFull => "RGB full",
            Colorspace::Yuv601 => "YUV 601",
            Colorspace::Yuv709 => "YUV 709",
            Colorspace::XvYcc601 => "xvYCC 601",
            Colorspace::XvYcc709 => "xvYCC 709",
            Colorspace::Yuv601Full => "YUV 601 full",
            Colorspace::Yuv709Full => "YUV 709 full",
            Colorspace::SYcc => "sYCC",
            Colorspace::AdobeYcc601 => "Adobe YCC 601",
            Colorspace::AdobeRgb => "Adobe RGB",
            Colorspace::Unknown => "unknown",
        })
    }
}

/// The decoded status of one capture.
///
/// A flat immutable record derived from a
/// [`BankTable`](hdmirx_dump::BankTable). Timing and clock fields come
/// from the mandatory `hdmi` bank; mode, lock/detect flags and the
/// interrupt-cleared flags come from the optional `io` bank and are
/// unknown when it was not captured.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSnapshot {
    /// Active line width in pixels.
    pub width: u16,
    /// Active field height in lines.
    pub height: u16,
    /// Width plus horizontal sync front porch, pulse and back porch.
    pub total_width: u32,
    /// Height plus halved vertical sync front porch, pulse and back porch.
    pub total_height: u32,
    /// TMDS link clock in MHz.
    pub tmds_clock_mhz: f64,
    /// Derived vertical refresh in Hz; NaN when the timing product is zero.
    pub vertical_freq_hz: f64,
    /// Horizontal sync polarity.
    pub h_polarity: bool,
    /// Vertical sync polarity.
    pub v_polarity: bool,
    /// Whether the stream is interlaced.
    pub interlaced: bool,
    /// HDMI or DVI operation; `None` when the `io` bank is absent.
    pub mode: Option<LinkMode>,
    /// TMDS PLL lock.
    pub tmds_pll_locked: TriState,
    /// TMDS clock presence.
    pub tmds_clock_detected: TriState,
    /// Vertical filter lock.
    pub vertical_filter_locked: TriState,
    /// Horizontal filter lock.
    pub horizontal_filter_locked: TriState,
    /// HDCP encryption on the link.
    pub hdcp_active: TriState,
    /// Cable sense.
    pub cable_detected: TriState,
    /// Colorspace signaled by the transmitter.
    pub colorspace: Colorspace,
    /// Level-2 interrupts all serviced at capture time.
    pub irq2_cleared: TriState,
    /// Level-3 interrupts all serviced at capture time.
    pub irq3_cleared: TriState,
    /// Level-4 interrupts all serviced at capture time.
    pub irq4_cleared: TriState,
}

impl SignalSnapshot {
    /// Pixel clock in MHz at the given color depth in bits.
    pub fn pixel_clock(&self, color_depth: f64) -> f64 {
        self.tmds_clock_mhz * 8.0 / color_depth
    }
}
