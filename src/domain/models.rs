use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Closed set of chain affiliations a listing may carry.
/// Stored lowercase; an unaffiliated hotel has no chain at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HotelChain {
    Strenger,
    Marvel,
    Avatar,
    Premier,
}

impl std::fmt::Display for HotelChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HotelChain::Strenger => "strenger",
            HotelChain::Marvel => "marvel",
            HotelChain::Avatar => "avatar",
            HotelChain::Premier => "premier",
        };
        f.write_str(s)
    }
}

/// Nightly price as persisted. Older state files hold numeric strings,
/// newer writes hold numbers; both forms round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Amount(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address: String,
    #[serde(default)]
    pub chain_id: Option<HotelChain>,
    pub image: String,
    pub price: Price,
}

/// A hotel as submitted for creation: every field except the id,
/// which the store generates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelDraft {
    pub name: String,
    pub city: String,
    pub country: String,
    pub address: String,
    #[serde(default)]
    pub chain_id: Option<HotelChain>,
    pub image: String,
    pub price: Price,
}

/// Partial update for an existing listing. `None` leaves a field
/// unchanged; `chain_id` is doubly optional so a patch can clear the
/// affiliation (`Some(None)`) as well as set it.
#[derive(Debug, Clone, Default)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub chain_id: Option<Option<HotelChain>>,
    pub image: Option<String>,
    pub price: Option<Price>,
}
