//! # Seed Data Loader
//!
//! Populates the database with the reference price catalog and holidays.
//!
//! ## Usage
//! ```bash
//! # Seed ./lift_dev.db (default)
//! cargo run -p lift-db --bin seed
//!
//! # Specify database path
//! cargo run -p lift-db --bin seed -- --db ./data/lift.db
//!
//! # Overwrite prices that were changed through PUT /prices
//! cargo run -p lift-db --bin seed -- --force
//! ```
//!
//! ## Seeded Data
//! - Base prices: `1jour` = 35, `night` = 19
//! - Holidays: 2019-02-18, 2019-02-25, 2019-03-04

use chrono::NaiveDate;
use std::env;

use lift_core::{Price, TicketType};
use lift_db::{Database, DbConfig};

/// Reference base prices: (ticket type tag, cost).
const BASE_PRICES: &[(&str, u32)] = &[("1jour", 35), ("night", 19)];

/// Reference holidays: (year, month, day).
const HOLIDAYS: &[(i32, u32, u32)] = &[(2019, 2, 18), (2019, 2, 25), (2019, 3, 4)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./lift_dev.db");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Lift Pass Seed Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./lift_dev.db)");
                println!("  -f, --force        Overwrite existing base prices");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Lift Pass Seed Data Loader");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Base prices
    let existing = db.prices().count().await?;
    if existing > 0 && !force {
        println!("⚠ Database already has {} base prices", existing);
        println!("  Skipping prices to keep edits. Use --force to overwrite.");
    } else {
        for (tag, cost) in BASE_PRICES {
            db.prices()
                .upsert(&TicketType::from(*tag), Price::from_units(*cost))
                .await?;
            println!("  {} = {}", tag, cost);
        }
        println!("✓ Seeded {} base prices", BASE_PRICES.len());
    }

    // Holidays: duplicates are ignored by the repository
    let mut added = 0;
    for (year, month, day) in HOLIDAYS {
        let Some(date) = NaiveDate::from_ymd_opt(*year, *month, *day) else {
            eprintln!("Skipping invalid holiday {}-{}-{}", year, month, day);
            continue;
        };
        if db.holidays().insert(date, None).await? {
            added += 1;
        }
    }
    println!("✓ Seeded {} new holidays ({} total)", added, db.holidays().count().await?);

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
