//! Bank table to snapshot decoding.

use crate::error::DecodeError;
use crate::regs;
use crate::snapshot::{Colorspace, LinkMode, SignalSnapshot};
use hdmirx_dump::{Bank, BankTable};
use hdmirx_regbank::RegBank;

const MHZ: f64 = 1_000_000.0;

fn bit(value: u8, n: u32) -> bool {
    (value >> n) & 1 == 1
}

/// Decodes one capture into a [`SignalSnapshot`].
///
/// The `hdmi` bank is mandatory; its absence, or an out-of-range read
/// of a timing or clock register, fails the decode. Every field sourced
/// from the `io` bank degrades to unknown when that bank is missing or
/// too short, as does the colorspace.
pub fn decode(table: &BankTable) -> Result<SignalSnapshot, DecodeError> {
    let hdmi = table
        .get(Bank::Hdmi)
        .ok_or(DecodeError::MissingBank(Bank::Hdmi))?;
    let r8 = |offset| {
        hdmi.read8(offset)
            .map_err(|source| DecodeError::Read { bank: Bank::Hdmi, source })
    };
    let r16 = |offset| {
        hdmi.read16(offset)
            .map_err(|source| DecodeError::Read { bank: Bank::Hdmi, source })
    };

    let width = r16(regs::HDMI_LINE_WIDTH)? & regs::DIMENSION_MASK;
    let hsync_fp = r16(regs::HDMI_HSYNC_FRONT_PORCH)?;
    let hsync_pw = r16(regs::HDMI_HSYNC_PULSE_WIDTH)?;
    let hsync_bp = r16(regs::HDMI_HSYNC_BACK_PORCH)?;
    let total_width = width as u32 + hsync_fp as u32 + hsync_pw as u32 + hsync_bp as u32;

    let height = r16(regs::HDMI_FIELD_HEIGHT)? & regs::DIMENSION_MASK;
    // vertical sync registers hold doubled line counts
    let vsync_fp = r16(regs::HDMI_VSYNC_FRONT_PORCH)? / 2;
    let vsync_pw = r16(regs::HDMI_VSYNC_PULSE_WIDTH)? / 2;
    let vsync_bp = r16(regs::HDMI_VSYNC_BACK_PORCH)? / 2;
    let total_height = height as u32 + vsync_fp as u32 + vsync_pw as u32 + vsync_bp as u32;

    let freq_reg = r16(regs::HDMI_TMDS_FREQ)?;
    let freq_whole = (freq_reg & regs::TMDS_WHOLE_MASK) >> regs::TMDS_WHOLE_SHIFT;
    let freq_frac = (freq_reg & regs::TMDS_FRAC_MASK) as f64 / regs::TMDS_FRAC_DIV;
    let tmds_clock_mhz = freq_whole as f64 + freq_frac;

    let sync_flags = r8(regs::HDMI_SYNC_POLARITY)?;
    let field_status = r8(regs::HDMI_FIELD_STATUS)?;

    let colorspace = hdmi
        .read8(regs::HDMI_COLORSPACE)
        .map_or(Colorspace::Unknown, Colorspace::from_reg);

    let io = table.get(Bank::Io);
    let raw2 = io_reg(io, regs::IO_RAW_STATUS_2);
    let raw3 = io_reg(io, regs::IO_RAW_STATUS_3);
    let raw4 = io_reg(io, regs::IO_RAW_STATUS_4);

    let total_pixels = total_width as u64 * total_height as u64;
    let pixel_clock = tmds_clock_mhz * 8.0 / 10.0;
    let vertical_freq_hz = if total_pixels == 0 {
        f64::NAN
    } else {
        MHZ * pixel_clock / total_pixels as f64
    };

    Ok(SignalSnapshot {
        width,
        height,
        total_width,
        total_height,
        tmds_clock_mhz,
        vertical_freq_hz,
        h_polarity: bit(sync_flags, 5),
        v_polarity: bit(sync_flags, 4),
        interlaced: bit(field_status, 5),
        mode: raw2.map(|v| if bit(v, 3) { LinkMode::Hdmi } else { LinkMode::Dvi }),
        tmds_pll_locked: raw3.map(|v| bit(v, 6)).into(),
        tmds_clock_detected: raw3.map(|v| bit(v, 4)).into(),
        vertical_filter_locked: raw3.map(|v| bit(v, 1)).into(),
        horizontal_filter_locked: raw3.map(|v| bit(v, 0)).into(),
        hdcp_active: raw4.map(|v| bit(v, 2)).into(),
        cable_detected: raw4.map(|v| bit(v, 0)).into(),
        colorspace,
        irq2_cleared: io_reg(io, regs::IO_INT_STATUS_2).map(|v| v == 0).into(),
        irq3_cleared: io_reg(io, regs::IO_INT_STATUS_3).map(|v| v == 0).into(),
        irq4_cleared: io_reg(io, regs::IO_INT_STATUS_4).map(|v| v == 0).into(),
    })
}

fn io_reg(io: Option<&RegBank>, offset: usize) -> Option<u8> {
    io.and_then(|bank| bank.read8(offset).ok())
}
