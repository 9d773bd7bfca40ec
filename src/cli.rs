use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "cartstash")]
#[command(about = "Shopping cart persisted to a local durable slot")]
#[command(version)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a product to the cart
    Add {
        /// Product sku
        sku: String,
        /// Display title
        #[arg(long)]
        title: String,
        /// Image reference shown next to the line
        #[arg(long, default_value = "")]
        img: String,
        /// Unit price; omit when the price is unknown
        #[arg(long)]
        price: Option<f64>,
        /// Requested quantity
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        qty: i64,
    },
    /// Overwrite a line's quantity (zero or less removes it)
    SetQty {
        /// Product sku
        sku: String,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove a line
    Remove {
        /// Product sku
        sku: String,
    },
    /// Show the rendered cart
    List,
    /// Show the number of items in the cart
    Count,
    /// Show the cart total
    Total,
    /// Print a plain-text order summary
    Summary,
    /// Empty the cart and clear the durable slot
    Clear,
}
