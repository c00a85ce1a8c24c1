use anyhow::{Context, Result};
use geomagstats::{
    load::load_rows,
    report::write_report,
    stats::{aggregate, ColumnLayout},
};
use std::{env, io, process::exit};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) expect exactly one argument: the input file ──────────────
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <GEOMAG_FILE>", args[0]);
        eprintln!("Summarizes the Dst, HON and SJG columns of a USGS geomagnetism file.");
        exit(2);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn run(path: &str) -> Result<()> {
    // ─── 3) load + validate ──────────────────────────────────────────
    let rows = load_rows(path).with_context(|| format!("loading `{}`", path))?;
    info!(rows = rows.len(), "valid dataset detected");

    // ─── 4) classify + accumulate ────────────────────────────────────
    let summary = aggregate(&rows, ColumnLayout::default()).context("aggregating columns")?;

    // ─── 5) print the report ─────────────────────────────────────────
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &summary).context("writing report")?;
    Ok(())
}
