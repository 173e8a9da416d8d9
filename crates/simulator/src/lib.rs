//! Text fixture host: renders the shop's stock across a number of days.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, GildedRose, Item, SULFURAS};

/// Env var consulted for the day count when no positional argument is given.
pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";

pub const DEFAULT_DAYS: u32 = 2;

/// Render the shop's stock day by day.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "gildedrose-simulator")]
#[command(version)]
#[command(about = "Age the shop's stock and print it day by day", long_about = None)]
pub struct Args {
    /// Number of days to simulate
    #[arg(default_value_t = DEFAULT_DAYS, env = DAYS_ENV)]
    pub days: u32,

    /// JSON array of `{ "name", "sell_in", "quality" }` records (defaults to the built-in stock)
    pub inventory: Option<PathBuf>,
}

/// The stock the shop opens with when no inventory file is supplied.
pub fn fixture() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Read a JSON array of items and validate every record.
pub fn load_inventory(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse inventory file {}", path.display()))?;

    for (idx, item) in items.iter().enumerate() {
        item.validate()
            .with_context(|| format!("inventory entry #{idx} is invalid"))?;
    }

    tracing::info!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}

/// Write the state of every item for day 0 through `days`, advancing one day between blocks.
pub fn render<W: Write>(shop: &mut GildedRose, days: u32, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "OMGHAI!")?;
    for day in 0..=days {
        writeln!(out, "-------- day {day} --------")?;
        writeln!(out, "name, sellIn, quality")?;
        for item in shop.items() {
            writeln!(out, "{item}")?;
        }
        writeln!(out)?;
        if day < days {
            shop.update_quality();
        }
    }
    Ok(())
}

/// Resolve the inventory and render it to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let items = match &args.inventory {
        Some(path) => load_inventory(path)?,
        None => fixture(),
    };
    let mut shop = GildedRose::new(items);
    render(&mut shop, args.days, out).context("failed to write report")?;
    Ok(())
}
