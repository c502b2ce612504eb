use hdmirx::{decode, snapshot_report, Bank, BankTable, Colorspace, DecodeError, LinkMode, TriState};

// 1000x700 active, 1200x800 total, TMDS 20.5 MHz, YUV 709, both sync
// polarities positive, progressive, HDMI mode, all locks up, level-3
// interrupt still pending.
const HDMI_SECTION: &str = "\
hdmi core map
-------------
0x00 | 00 00 00 00 00 30 00 03 E8 02 BC 00 00 00 00 00
0x10 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x20 | 00 64 00 32 00 32 00 00 00 00 00 64 00 00 00 3C
0x30 | 00 00 00 28 00 00 00 00 00 00 00 00 00 00 00 00
0x40 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x50 | 00 0A 40 03
";

const IO_SECTION: &str = "\
io core map
-----------
0x00 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x10 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x20 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x30 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x40 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x50 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
0x60 | 00 00 00 00 00 08 00 00 00 00 53 04 00 00 00 05
0x70 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00
";

fn full_dump() -> String {
    format!("capture 1 from bench unit\n\n{HDMI_SECTION}\n{IO_SECTION}")
}

#[test]
fn full_pipeline() {
    let table = BankTable::parse(&full_dump());
    let snap = decode(&table).unwrap();

    assert_eq!(snap.width, 1000);
    assert_eq!(snap.height, 700);
    assert_eq!(snap.total_width, 1200);
    assert_eq!(snap.total_height, 800);
    assert_eq!(snap.tmds_clock_mhz, 20.5);
    assert_eq!(snap.pixel_clock(10.0), 16.4);
    // 1e6 * 16.4 / (1200 * 800)
    assert!((snap.vertical_freq_hz - 17.083_333_333_333_332).abs() < 1e-9);
    assert!(snap.h_polarity);
    assert!(snap.v_polarity);
    assert!(!snap.interlaced);
    assert_eq!(snap.colorspace, Colorspace::Yuv709);
    assert_eq!(snap.mode, Some(LinkMode::Hdmi));
    assert_eq!(snap.tmds_pll_locked, TriState::True);
    assert_eq!(snap.tmds_clock_detected, TriState::True);
    assert_eq!(snap.vertical_filter_locked, TriState::True);
    assert_eq!(snap.horizontal_filter_locked, TriState::True);
    assert_eq!(snap.hdcp_active, TriState::True);
    assert_eq!(snap.cable_detected, TriState::True);
    assert_eq!(snap.irq2_cleared, TriState::True);
    assert_eq!(snap.irq3_cleared, TriState::False);
    assert_eq!(snap.irq4_cleared, TriState::True);
}

#[test]
fn decode_is_idempotent() {
    let text = full_dump();
    let first = decode(&BankTable::parse(&text)).unwrap();
    let second = decode(&BankTable::parse(&text)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_io_degrades_to_unknown() {
    let text = format!("capture 2\n\n{HDMI_SECTION}");
    let snap = decode(&BankTable::parse(&text)).unwrap();
    assert_eq!(snap.width, 1000);
    assert_eq!(snap.total_height, 800);
    assert_eq!(snap.tmds_clock_mhz, 20.5);
    assert_eq!(snap.mode, None);
    assert!(snap.tmds_pll_locked.is_unknown());
    assert!(snap.hdcp_active.is_unknown());
    assert!(snap.irq2_cleared.is_unknown());
}

#[test]
fn missing_hdmi_fails_decode() {
    let text = format!("capture 3\n\n{IO_SECTION}");
    let table = BankTable::parse(&text);
    assert_eq!(decode(&table), Err(DecodeError::MissingBank(Bank::Hdmi)));
}

#[test]
fn report_over_two_captures() {
    let text = full_dump();
    let first = decode(&BankTable::parse(&text)).unwrap();
    let second = decode(&BankTable::parse(&text)).unwrap();
    let page = snapshot_report(
        "bench comparison",
        &[("cap1".to_owned(), first), ("cap2".to_owned(), second)],
    );
    let html = page.render();
    assert!(html.contains("bench comparison"));
    assert!(html.contains("1000 x 700"));
    assert_eq!(html.matches("<table>").count(), 2);
}
