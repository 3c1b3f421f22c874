use crate::domain::models::HotelChain;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hotelier", version, about = "Local-first hotel listing manager")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Override the listing storage directory (default: ~/.local/share/hotelier)"
    )]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new hotel listing
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, help = "Price per night")]
        price: f64,
        #[arg(long)]
        city: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        address: String,
        #[arg(long, help = "Image url")]
        image: String,
        #[arg(long, value_enum)]
        chain: Option<HotelChain>,
    },
    /// Update fields of an existing listing; omitted flags stay unchanged
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long, value_enum, conflicts_with = "no_chain")]
        chain: Option<HotelChain>,
        #[arg(long, help = "Drop the chain affiliation")]
        no_chain: bool,
    },
    /// Remove a listing by id
    Remove {
        id: String,
    },
    /// List all hotel listings
    List,
    /// List only the hotels affiliated with a chain
    Filter {
        #[arg(long, value_enum)]
        chain: HotelChain,
    },
    /// Replace all listings from a JSON array file
    Import {
        file: PathBuf,
    },
    /// Delete every listing and the persisted entry
    Clear,
}
