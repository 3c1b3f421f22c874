use crate::cli::{Cli, Commands};
use crate::domain::models::{Hotel, HotelDraft, HotelPatch, Price};
use crate::services::output::{print_hotels, print_lookup, print_result};
use crate::services::store::HotelStore;

pub fn handle_hotel_commands(cli: &Cli, store: &mut HotelStore) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Add {
            name,
            price,
            city,
            country,
            address,
            image,
            chain,
        } => {
            let hotel = store.create(HotelDraft {
                name: name.clone(),
                city: city.clone(),
                country: country.clone(),
                address: address.clone(),
                chain_id: *chain,
                image: image.clone(),
                price: Price::Amount(*price),
            })?;
            let text = format!("added {}\t{}", hotel.id, hotel.name);
            print_result(cli.json, &hotel, text)?;
        }
        Commands::Edit {
            id,
            name,
            price,
            city,
            country,
            address,
            image,
            chain,
            no_chain,
        } => {
            let patch = HotelPatch {
                name: name.clone(),
                city: city.clone(),
                country: country.clone(),
                address: address.clone(),
                chain_id: if *no_chain {
                    Some(None)
                } else {
                    chain.map(Some)
                },
                image: image.clone(),
                price: price.map(Price::Amount),
            };
            let edited = store.edit(id, patch)?;
            print_lookup(cli.json, edited.as_ref(), id)?;
        }
        Commands::Remove { id } => {
            let removed = store.delete(id)?;
            let text = if removed {
                format!("removed {}", id)
            } else {
                format!("no hotel with id {}", id)
            };
            print_result(cli.json, removed, text)?;
        }
        Commands::List => {
            // a listing always reflects the persisted mirror
            store.reload();
            print_hotels(cli.json, store.hotels())?;
        }
        Commands::Filter { chain } => {
            print_hotels(cli.json, &store.filter_by_chain(*chain))?;
        }
        Commands::Import { file } => {
            let raw = std::fs::read_to_string(file)?;
            let hotels: Vec<Hotel> = serde_json::from_str(&raw)?;
            let count = hotels.len();
            store.set_hotels(hotels)?;
            print_result(cli.json, count, format!("imported {} hotels", count))?;
        }
        Commands::Clear => {
            store.clear()?;
            print_result(cli.json, "cleared", "cleared".to_string())?;
        }
    }
    Ok(())
}
