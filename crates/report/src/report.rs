//! Snapshot to report-tree assembly.

use crate::node::{el, text, Node};
use hdmirx_decode::SignalSnapshot;

const STYLE: &str = "table { border-collapse: collapse; } \
    td { border: 1px solid #999; padding: 2px 8px; }";

/// Builds the report page for one or more captures.
///
/// Each capture gets its own heading and field table, so a report over
/// two dumps reads as a side-by-side comparison of the captures.
pub fn snapshot_report(title: &str, captures: &[(String, SignalSnapshot)]) -> Node {
    let mut body = vec![el("h1", &[], vec![text(title)])];
    for (label, snapshot) in captures {
        body.push(el("h2", &[], vec![text(label.as_str())]));
        body.push(el("table", &[], field_rows(snapshot)));
    }
    el(
        "html",
        &[],
        vec![
            el(
                "head",
                &[],
                vec![
                    el("title", &[], vec![text(title)]),
                    el("style", &[], vec![text(STYLE)]),
                ],
            ),
            el("body", &[], body),
        ],
    )
}

fn row(label: &str, value: String) -> Node {
    el(
        "tr",
        &[],
        vec![
            el("td", &[], vec![text(label)]),
            el("td", &[], vec![text(value)]),
        ],
    )
}

fn field_rows(snap: &SignalSnapshot) -> Vec<Node> {
    let mode = match snap.mode {
        Some(mode) => mode.to_string(),
        None => "unknown".to_owned(),
    };
    let vertical_freq = if snap.vertical_freq_hz.is_nan() {
        "undefined".to_owned()
    } else {
        format!("{:.3} Hz", snap.vertical_freq_hz)
    };
    vec![
        row("active size", format!("{} x {}", snap.width, snap.height)),
        row(
            "total size",
            format!("{} x {}", snap.total_width, snap.total_height),
        ),
        row("TMDS clock", format!("{:.3} MHz", snap.tmds_clock_mhz)),
        row(
            "pixel clock (10-bit)",
            format!("{:.3} MHz", snap.pixel_clock(10.0)),
        ),
        row("vertical frequency", vertical_freq),
        row("interlaced", bool_label(snap.interlaced)),
        row("h sync polarity", bool_label(snap.h_polarity)),
        row("v sync polarity", bool_label(snap.v_polarity)),
        row("mode", mode),
        row("colorspace", snap.colorspace.to_string()),
        row("TMDS PLL locked", snap.tmds_pll_locked.to_string()),
        row("TMDS clock detected", snap.tmds_clock_detected.to_string()),
        row(
            "vertical filter locked",
            snap.vertical_filter_locked.to_string(),
        ),
        row(
            "horizontal filter locked",
            snap.horizontal_filter_locked.to_string(),
        ),
        row("HDCP active", snap.hdcp_active.to_string()),
        row("cable detected", snap.cable_detected.to_string()),
        row("irq level 2 cleared", snap.irq2_cleared.to_string()),
        row("irq level 3 cleared", snap.irq3_cleared.to_string()),
        row("irq level 4 cleared", snap.irq4_cleared.to_string()),
    ]
}

fn bool_label(value: bool) -> String {
    let label = if value { "yes" } else { "no" };
    label.to_owned()
}
