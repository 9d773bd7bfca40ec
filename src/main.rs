mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cartstash::cart::{CartStore, Product};
use cartstash::config::Config;
use cartstash::storage::FileStore;
use cartstash::view;

use cli::{Cli, Command};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let dir = config
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(FileStore::default_dir);
    let storage = Box::new(FileStore::new(dir));
    let mut store = CartStore::load(storage, config.storage.slot.clone());

    match cli.command {
        Command::Add {
            sku,
            title,
            img,
            price,
            qty,
        } => {
            store.add(
                Product {
                    sku,
                    title,
                    image_ref: img,
                    unit_price: price,
                },
                qty,
            );
            print_cart(&store, &config);
        }
        Command::SetQty { sku, qty } => {
            store.set_quantity(sku, qty);
            print_cart(&store, &config);
        }
        Command::Remove { sku } => {
            store.remove(sku);
            print_cart(&store, &config);
        }
        Command::List => print_cart(&store, &config),
        Command::Count => println!("{}", store.cart().item_count()),
        Command::Total => {
            let rendered = view::render(store.cart(), &config.display);
            println!("{}", rendered.total_display);
        }
        Command::Summary => println!("{}", view::order_summary(store.cart())),
        Command::Clear => {
            store.clear();
            println!("cart cleared");
        }
    }

    Ok(())
}

/// Env-gated logging to stderr.
///
/// Silent unless `RUST_LOG` is set, so command output stays clean.
fn init_tracing() {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_cart(store: &CartStore, config: &Config) {
    let rendered = view::render(store.cart(), &config.display);
    if rendered.lines.is_empty() {
        println!("cart is empty");
        return;
    }
    for line in &rendered.lines {
        println!(
            "{:>3} x {}  {}",
            line.quantity, line.title, line.price_display
        );
    }
    println!(
        "total: {}  ({} items)",
        rendered.total_display, rendered.item_count
    );
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::cli::{Cli, Command};

    #[test]
    fn add_defaults_quantity_to_one() {
        let cli = Cli::parse_from(["cartstash", "add", "sku-1", "--title", "Print"]);
        match cli.command {
            Command::Add { sku, qty, price, .. } => {
                assert_eq!(sku, "sku-1");
                assert_eq!(qty, 1);
                assert_eq!(price, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn set_qty_accepts_zero_and_negative() {
        let cli = Cli::parse_from(["cartstash", "set-qty", "sku-1", "-3"]);
        match cli.command {
            Command::SetQty { sku, qty } => {
                assert_eq!(sku, "sku-1");
                assert_eq!(qty, -3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
