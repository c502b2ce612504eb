//! CLI shell: read register dump files, decode them, emit one HTML report.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use hdmirx::{decode, snapshot_report, BankTable};

#[derive(Parser)]
#[command(name = "hdmirx-report")]
#[command(about = "Decode HDMI receiver register dumps into an HTML report")]
struct Args {
    /// Write the report here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Register dump files, one capture each.
    #[arg(required = true)]
    dumps: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut captures = Vec::with_capacity(args.dumps.len());
    for path in &args.dumps {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading dump `{}`", path.display()))?;
        let table = BankTable::parse(&text);
        for (bank, err) in table.errors() {
            eprintln!("warning: {}: bank `{bank}`: {err}", path.display());
        }
        let snapshot =
            decode(&table).with_context(|| format!("decoding dump `{}`", path.display()))?;
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        captures.push((label, snapshot));
    }

    let page = snapshot_report("HDMI receiver capture report", &captures);
    let html = page.render();
    match &args.out {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("writing report `{}`", path.display()))?,
        None => print!("{html}"),
    }
    Ok(())
}
