use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agricart", bin_name = "agricart", version)]
#[command(about = "Browse an agricultural equipment catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load the catalog from a JSON file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Interface language (pt-BR or en)
    #[arg(long, global = true, value_name = "LANG")]
    pub lang: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, optionally filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Only products of this category
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive match on name, description and brand
        #[arg(short, long)]
        search: Option<String>,

        /// Select filter, e.g. `brand=AgriPro,FarmMaster` (repeatable)
        #[arg(long = "filter", value_name = "KEY=V1,V2")]
        filters: Vec<String>,

        /// Lower bound of a range filter, e.g. `Horsepower=120` (repeatable)
        #[arg(long = "min", value_name = "KEY=N")]
        mins: Vec<String>,

        /// Upper bound of a range filter (repeatable)
        #[arg(long = "max", value_name = "KEY=N")]
        maxs: Vec<String>,

        #[arg(long)]
        price_min: Option<f64>,

        #[arg(long)]
        price_max: Option<f64>,

        /// featured, price-asc, price-desc, name-asc, rating-desc or newest
        #[arg(long)]
        sort: Option<String>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search name, description, brand and category
    Search { term: String },

    /// Show the filter schema derived for a category
    Filters { category: Option<String> },

    /// Show one product in full
    #[command(alias = "view")]
    Show { id: String },

    /// Products in the same category as ID
    Related {
        id: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List categories
    Categories,

    /// List featured products
    Featured,

    /// Price a cart holding the given products (repeat an ID to add more units)
    Quote {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Use express shipping
        #[arg(long)]
        express: bool,
    },

    /// Catalog figures for the admin dashboard
    Report,

    /// Resolve a storefront path to its page
    Route { path: String },

    /// Look up a translation key
    Translate { key: String },

    /// Show the effective configuration
    Config,
}
