//! # Demo Session
//!
//! Drives a full simulated shopping session against the cart store.
//!
//! ## Usage
//! ```bash
//! # Run with the default data directory (./data)
//! cargo run -p ecommsim-store --bin demo
//!
//! # Specify where the cart slot file lives
//! cargo run -p ecommsim-store --bin demo -- --data-dir /tmp/ecommsim
//!
//! # Verbose logging
//! RUST_LOG=debug cargo run -p ecommsim-store --bin demo
//! ```
//!
//! ## What It Does
//! 1. Loads the demo catalog and lists the featured products
//! 2. Adds the featured products to a file-backed cart
//! 3. Views the cart, adjusts a quantity, removes a line
//! 4. Runs the simulated checkout (cart empties, `begin_checkout` fires)
//!
//! Analytics events are logged through [`TracingSink`]; the persisted cart
//! lands in `<data-dir>/eCommSimCart.json` between steps, so interrupting the
//! session mid-way leaves a cart the next run picks up.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ecommsim_store::{Catalog, CartStore, FileStorage, StoreResult, TracingSink};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!(error = %e, "demo session failed");
        std::process::exit(1);
    }
}

fn run() -> StoreResult<()> {
    let data_dir = data_dir_from_args();
    info!(data_dir = %data_dir.display(), "starting eCommSim demo session");

    let storage = FileStorage::new(&data_dir)?;
    let mut store = CartStore::new(storage).with_sink(Box::new(TracingSink));
    let catalog = Catalog::demo();

    // A stand-in for the view layer: count change notifications and re-read.
    let updates = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&updates);
    store.subscribe(move || counter.set(counter.get() + 1));

    info!(products = catalog.len(), "catalog loaded");
    for product in catalog.featured() {
        info!(id = %product.id, name = %product.name, price = %product.price, "featured product");
    }

    // Browse the featured products and put each in the cart.
    for product in catalog.featured() {
        store.add(product)?;
    }

    // A second look at the backpack; adding again bumps the quantity.
    if let Some(backpack) = catalog.get_by_id("3") {
        store.add(backpack)?;
    }

    // Open the cart page.
    store.record_cart_view();

    // Three scarves, and on second thought no dress.
    store.set_quantity("5", 3)?;
    store.remove("1")?;

    let totals = store.totals();
    info!(
        lines = totals.line_count,
        quantity = totals.total_quantity,
        subtotal = %totals.subtotal,
        "cart ready for checkout"
    );

    store.begin_checkout()?;

    info!(
        change_notifications = updates.get(),
        "session complete, cart emptied"
    );
    Ok(())
}

/// Initializes tracing with an env-filter (default INFO, `RUST_LOG` override).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Reads `--data-dir <path>` from the command line, defaulting to `./data`.
fn data_dir_from_args() -> PathBuf {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--data-dir" {
            if let Some(dir) = args.next() {
                return PathBuf::from(dir);
            }
        }
    }
    PathBuf::from("./data")
}
