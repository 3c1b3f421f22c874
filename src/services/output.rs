//! Output wiring for the command layer. Every command prints either a
//! `{ok, data}` JSON envelope or tab-separated text rows, never both.

use crate::domain::models::{Hotel, JsonOut};
use serde::Serialize;

/// One text row per listing: id, name, city, country, chain, price.
/// Unaffiliated hotels render a dash in the chain column.
pub fn hotel_row(h: &Hotel) -> String {
    let chain = h
        .chain_id
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        h.id, h.name, h.city, h.country, chain, h.price
    )
}

/// Prints a listing sequence, as produced by `list` and `filter`.
pub fn print_hotels(json: bool, hotels: &[Hotel]) -> anyhow::Result<()> {
    if json {
        return print_envelope(hotels);
    }
    for h in hotels {
        println!("{}", hotel_row(h));
    }
    Ok(())
}

/// Prints the outcome of an id-addressed operation: the matched
/// listing, or `null` (text: a short note) when nothing matched.
pub fn print_lookup(json: bool, hotel: Option<&Hotel>, id: &str) -> anyhow::Result<()> {
    if json {
        return print_envelope(&hotel);
    }
    match hotel {
        Some(h) => println!("{}", hotel_row(h)),
        None => println!("no hotel with id {}", id),
    }
    Ok(())
}

/// Prints a scalar command result (created listing, counts, flags,
/// status words) with a caller-supplied text rendering.
pub fn print_result<T: Serialize>(json: bool, data: T, text: String) -> anyhow::Result<()> {
    if json {
        return print_envelope(&data);
    }
    println!("{}", text);
    Ok(())
}

fn print_envelope<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
