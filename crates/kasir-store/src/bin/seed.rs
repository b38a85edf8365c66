//! # Seed Data Generator
//!
//! Populates the catalog with demo items for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./data/catalog.json (default)
//! cargo run -p kasir-store --bin seed
//!
//! # Seed another data directory
//! cargo run -p kasir-store --bin seed -- --data-dir /tmp/kasir
//!
//! # Only the first 10 items
//! cargo run -p kasir-store --bin seed -- --count 10
//! ```
//!
//! ## Generated Items
//! Items are grouped by category prefix:
//! - `MIN` beverages
//! - `SNK` snacks
//! - `SMB` groceries
//! - `ATK` stationery
//!
//! Each item has:
//! - Unique code: `{CATEGORY}{INDEX:02}`
//! - Price between 1.500 and 30.000, rounded to 500
//! - Stock between 0 and 60
//!
//! An existing non-empty catalog is left alone.

use std::path::PathBuf;

use clap::Parser;
use kasir_core::{Catalog, Money};
use kasir_store::{Store, StoreConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Item names per category code.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "MIN",
        &[
            "Air Mineral 600ml",
            "Teh Botol",
            "Kopi Susu Kaleng",
            "Jus Jeruk",
            "Susu UHT Coklat",
            "Minuman Isotonik",
        ],
    ),
    (
        "SNK",
        &[
            "Keripik Singkong",
            "Kacang Atom",
            "Wafer Coklat",
            "Biskuit Kelapa",
            "Permen Mint",
            "Roti Tawar",
        ],
    ),
    (
        "SMB",
        &[
            "Beras 5kg",
            "Minyak Goreng 1L",
            "Gula Pasir 1kg",
            "Tepung Terigu 1kg",
            "Mie Instan Goreng",
            "Telur 10 Butir",
        ],
    ),
    (
        "ATK",
        &[
            "Pulpen Hitam",
            "Buku Tulis 38 Lembar",
            "Pensil 2B",
            "Penghapus",
            "Penggaris 30cm",
            "Spidol Permanen",
        ],
    ),
];

/// Seeds a demo catalog.
#[derive(Debug, Parser)]
#[command(name = "seed", version, about = "Kasir POS seed data generator")]
struct Args {
    /// Data directory holding catalog.json
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Maximum number of items to generate
    #[arg(short, long, default_value_t = 24)]
    count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let store = Store::open(StoreConfig::new(&args.data_dir))?;
    let repo = store.catalog();
    let mut catalog = repo.load()?;

    if !catalog.is_empty() {
        warn!(
            path = %repo.path().display(),
            items = catalog.len(),
            "Catalog already has items, skipping seed"
        );
        return Ok(());
    }

    let generated = generate(&mut catalog, args.count)?;
    repo.save(&catalog)?;

    info!(path = %repo.path().display(), items = generated, "Seed complete");
    Ok(())
}

/// Adds up to `count` demo items to `catalog`.
fn generate(catalog: &mut Catalog, count: usize) -> Result<usize, kasir_core::CoreError> {
    let items = CATEGORIES
        .iter()
        .flat_map(|(category, names)| {
            names
                .iter()
                .enumerate()
                .map(move |(index, name)| (*category, index + 1, *name))
        })
        .take(count);

    let mut generated = 0;
    for (seed, (category, index, name)) in items.enumerate() {
        let code = format!("{}{:02}", category, index);
        catalog.add(&code, name, demo_price(seed), demo_stock(seed))?;
        generated += 1;
    }

    Ok(generated)
}

/// 1.500 - 30.000 in steps of 500.
fn demo_price(seed: usize) -> Money {
    let steps = ((seed * 17) % 58) as i64;
    Money::from_major(1500 + steps * 500)
}

/// 0 - 60 units.
fn demo_stock(seed: usize) -> i64 {
    ((seed * 13) % 61) as i64
}
