use crate::domain::models::{Hotel, HotelChain, HotelDraft, HotelPatch};
use crate::services::storage::Storage;
use ulid::Ulid;

/// Fixed persistence key for the listing snapshot.
pub const HOTELS_KEY: &str = "hotels";

/// The authoritative in-memory hotel list. Every membership or field
/// mutation writes the full snapshot back through [`Storage`]; the
/// persisted copy is a durable mirror, never a second source of truth.
pub struct HotelStore {
    storage: Storage,
    hotels: Vec<Hotel>,
}

impl HotelStore {
    /// Loads the persisted snapshot; a missing or unreadable one starts
    /// the store empty.
    pub fn load(storage: Storage) -> Self {
        let hotels = storage.get(HOTELS_KEY);
        Self { storage, hotels }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Resets the in-memory list from the persistent mirror.
    pub fn reload(&mut self) {
        self.hotels = self.storage.get(HOTELS_KEY);
    }

    /// Replaces the list wholesale.
    pub fn set_hotels(&mut self, hotels: Vec<Hotel>) -> anyhow::Result<()> {
        self.hotels = hotels;
        self.persist()?;
        self.storage.journal(
            "hotel.set_all",
            serde_json::json!({ "count": self.hotels.len() }),
        );
        Ok(())
    }

    /// Appends a new listing under a freshly generated id and returns it.
    pub fn create(&mut self, draft: HotelDraft) -> anyhow::Result<Hotel> {
        let hotel = Hotel {
            id: self.fresh_id(),
            name: draft.name,
            city: draft.city,
            country: draft.country,
            address: draft.address,
            chain_id: draft.chain_id,
            image: draft.image,
            price: draft.price,
        };
        self.hotels.push(hotel.clone());
        self.persist()?;
        self.storage
            .journal("hotel.create", serde_json::json!({ "id": hotel.id }));
        Ok(hotel)
    }

    /// Merges `patch` into the listing matching `id`, field by field.
    /// An unknown id leaves the list unchanged and returns `None`; the
    /// snapshot is written back either way.
    pub fn edit(&mut self, id: &str, patch: HotelPatch) -> anyhow::Result<Option<Hotel>> {
        let edited = self.hotels.iter_mut().find(|h| h.id == id).map(|h| {
            if let Some(name) = patch.name {
                h.name = name;
            }
            if let Some(city) = patch.city {
                h.city = city;
            }
            if let Some(country) = patch.country {
                h.country = country;
            }
            if let Some(address) = patch.address {
                h.address = address;
            }
            if let Some(chain_id) = patch.chain_id {
                h.chain_id = chain_id;
            }
            if let Some(image) = patch.image {
                h.image = image;
            }
            if let Some(price) = patch.price {
                h.price = price;
            }
            h.clone()
        });
        self.persist()?;
        if let Some(h) = &edited {
            self.storage
                .journal("hotel.edit", serde_json::json!({ "id": h.id }));
        }
        Ok(edited)
    }

    /// Removes the listing matching `id`. Unknown ids are a silent
    /// no-op; returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> anyhow::Result<bool> {
        let before = self.hotels.len();
        self.hotels.retain(|h| h.id != id);
        let removed = self.hotels.len() < before;
        self.persist()?;
        if removed {
            self.storage
                .journal("hotel.delete", serde_json::json!({ "id": id }));
        }
        Ok(removed)
    }

    /// Listings affiliated with `chain`, in insertion order. A pure
    /// query over the live list; working state and the mirror are
    /// untouched.
    pub fn filter_by_chain(&self, chain: HotelChain) -> Vec<Hotel> {
        self.hotels
            .iter()
            .filter(|h| h.chain_id == Some(chain))
            .cloned()
            .collect()
    }

    /// Empties the list and drops the persisted entry.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.hotels.clear();
        self.storage.remove(HOTELS_KEY)?;
        self.storage.journal("hotel.clear", serde_json::json!({}));
        Ok(())
    }

    // ULIDs collide with negligible probability; the re-draw loop turns
    // that into a hard uniqueness guarantee against the current list.
    fn fresh_id(&self) -> String {
        loop {
            let id = Ulid::new().to_string();
            if !self.hotels.iter().any(|h| h.id == id) {
                return id;
            }
        }
    }

    fn persist(&self) -> anyhow::Result<()> {
        self.storage.set(HOTELS_KEY, &self.hotels)
    }
}
