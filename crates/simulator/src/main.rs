//! Simulator entry point.

use clap::Parser;

use gildedrose_simulator::{Args, run};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let args = Args::parse();
    tracing::info!(days = args.days, inventory = ?args.inventory, "starting simulation");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}
