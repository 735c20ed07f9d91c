//! # Catalog Seed Tool
//!
//! Populates a catalog database with a small produce assortment for
//! development kiosks.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p tare-catalog --bin seed
//!
//! # Specify database path
//! cargo run -p tare-catalog --bin seed -- --db ./data/tare.db
//!
//! # Wipe and reseed an existing catalog
//! cargo run -p tare-catalog --bin seed -- --fresh
//! ```
//!
//! ## Generated Data
//! Ten produce items, each with:
//! - Display name and per-kg price
//! - A discount on a few items (so discounted pricing shows up in demos)
//! - One or more detector class labels ("apple" and "green_apple" both
//!   map to Apple)
//! - A placeholder 1x1 PNG as the image blob

use std::env;

use tare_catalog::{CatalogConfig, CatalogStore};
use tare_core::ProductRecord;

/// Produce assortment: (name, price per kg, discount, detector classes).
const PRODUCE: &[(&str, f64, f64, &[&str])] = &[
    ("Apple", 3.20, 0.0, &["apple", "green_apple"]),
    ("Banana", 2.10, 0.10, &["banana"]),
    ("Carrot", 1.90, 0.15, &["carrot"]),
    ("Cucumber", 2.40, 0.0, &["cucumber"]),
    ("Lemon", 3.90, 0.0, &["lemon", "lime"]),
    ("Onion", 1.60, 0.0, &["onion", "red_onion"]),
    ("Orange", 2.80, 0.0, &["orange", "mandarin"]),
    ("Pepper", 5.20, 0.20, &["bell_pepper", "pepper"]),
    ("Potato", 1.30, 0.0, &["potato"]),
    ("Tomato", 4.50, 0.05, &["tomato", "cherry_tomato"]),
];

/// Smallest valid PNG (1x1, transparent). Stands in for real product
/// photography on development databases.
const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15,
    0xC4, 0x89, //
    0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, //
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, // IEND
    0xAE, 0x42, 0x60, 0x82,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./tare_dev.db");
    let mut fresh = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--fresh" | "-f" => {
                fresh = true;
            }
            "--help" | "-h" => {
                println!("Tare Catalog Seed Tool");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tare_dev.db)");
                println!("  -f, --fresh        Wipe existing catalog rows before seeding");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Tare Catalog Seed Tool");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = CatalogConfig::new(&db_path);
    let store = CatalogStore::new(config).await?;
    let resolver = store.resolver();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing catalog
    let existing = resolver.product_count().await?;
    if existing > 0 {
        if fresh {
            println!("⚠ Clearing {} existing products (--fresh)", existing);
            resolver.clear_catalog().await?;
        } else {
            println!("⚠ Catalog already has {} products", existing);
            println!("  Skipping seed to avoid duplicates.");
            println!("  Re-run with --fresh to wipe and reseed.");
            return Ok(());
        }
    }

    // Insert the assortment
    println!();
    println!("Seeding produce catalog...");

    let mut linked = 0;
    for (name, price, discount, classes) in PRODUCE {
        let record = ProductRecord::new(*name, PLACEHOLDER_PNG.to_vec(), *price, *discount);
        resolver.insert_product(&record).await?;

        for class in *classes {
            resolver.link_class(class, name).await?;
            linked += 1;
        }

        println!("  {} (${:.2}/kg, {} classes)", name, price, classes.len());
    }

    println!();
    println!(
        "✓ Seeded {} products, {} detector classes",
        PRODUCE.len(),
        linked
    );

    // Verify resolution end to end
    println!();
    println!("Verifying resolution...");
    let labels = ["apple".to_string(), "banana".to_string()]
        .into_iter()
        .collect();
    let resolved = resolver.resolve(&labels).await?;
    println!("  Resolve [apple, banana]: {} products", resolved.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
