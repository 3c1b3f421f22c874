use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::storage::Storage;
use services::store::HotelStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let storage = match &cli.data_dir {
        Some(dir) => Storage::new(dir.clone()),
        None => Storage::default_location()?,
    };
    let mut store = HotelStore::load(storage);

    commands::handle_hotel_commands(&cli, &mut store)
}
