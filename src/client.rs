//! Application facade for Spare Gold.
//!
//! `SpareGoldClient` wires one on-device store into the catalog
//! repositories and the session gate. The view layer consumes the catalog
//! only through this facade, never through the store directly.

use std::sync::Arc;

use crate::catalog::CatalogRepository;
use crate::config::Config;
use crate::error::{SpareError, SpareResult};
use crate::models::{Booking, CarModel, Company, SparePart, Variant};
use crate::pricing::Receipt;
use crate::seed::{seed_car_models, seed_companies, seed_variants};
use crate::session::SessionGate;
use crate::store::{KeyValueStore, SqliteStore, DARK_MODE_KEY};

/// Main client for Spare Gold operations.
pub struct SpareGoldClient {
    store: Arc<dyn KeyValueStore>,
    companies: CatalogRepository<Company>,
    car_models: CatalogRepository<CarModel>,
    variants: CatalogRepository<Variant>,
    spare_parts: CatalogRepository<SparePart>,
    bookings: CatalogRepository<Booking>,
    session: Arc<SessionGate>,
}

impl SpareGoldClient {
    /// Open a client over a store, running each repository's seed-or-load
    /// step once.
    pub fn open(store: Arc<dyn KeyValueStore>) -> SpareResult<Self> {
        let companies =
            CatalogRepository::open_with_seed(Arc::clone(&store), seed_companies())?;
        let car_models =
            CatalogRepository::open_with_seed(Arc::clone(&store), seed_car_models())?;
        let variants =
            CatalogRepository::open_with_seed(Arc::clone(&store), seed_variants())?;
        let spare_parts = CatalogRepository::open(Arc::clone(&store))?;
        let bookings = CatalogRepository::open(Arc::clone(&store))?;
        let session = Arc::new(SessionGate::new(Arc::clone(&store))?);

        Ok(Self {
            store,
            companies,
            car_models,
            variants,
            spare_parts,
            bookings,
            session,
        })
    }

    /// Open a client over the SQLite store named by the configuration.
    pub fn open_with_config(config: &Config) -> SpareResult<Self> {
        let store = SqliteStore::new(config.store_file())?;
        Self::open(Arc::new(store))
    }

    pub fn companies(&self) -> &CatalogRepository<Company> {
        &self.companies
    }

    pub fn companies_mut(&mut self) -> &mut CatalogRepository<Company> {
        &mut self.companies
    }

    pub fn car_models(&self) -> &CatalogRepository<CarModel> {
        &self.car_models
    }

    pub fn car_models_mut(&mut self) -> &mut CatalogRepository<CarModel> {
        &mut self.car_models
    }

    pub fn variants(&self) -> &CatalogRepository<Variant> {
        &self.variants
    }

    pub fn variants_mut(&mut self) -> &mut CatalogRepository<Variant> {
        &mut self.variants
    }

    pub fn spare_parts(&self) -> &CatalogRepository<SparePart> {
        &self.spare_parts
    }

    pub fn spare_parts_mut(&mut self) -> &mut CatalogRepository<SparePart> {
        &mut self.spare_parts
    }

    pub fn bookings(&self) -> &CatalogRepository<Booking> {
        &self.bookings
    }

    pub fn bookings_mut(&mut self) -> &mut CatalogRepository<Booking> {
        &mut self.bookings
    }

    /// The process-wide session gate.
    pub fn session(&self) -> &Arc<SessionGate> {
        &self.session
    }

    /// The persisted dark-mode preference; false until the user flips it.
    pub fn dark_mode(&self) -> SpareResult<bool> {
        match self.store.get(DARK_MODE_KEY)? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(false),
        }
    }

    /// Persist the dark-mode preference.
    pub fn set_dark_mode(&self, enabled: bool) -> SpareResult<()> {
        let value = serde_json::to_string(&enabled)?;
        self.store.set(DARK_MODE_KEY, &value)
    }

    /// Validate and record a booking for a spare part.
    pub fn book_spare_part(&mut self, booking: Booking) -> SpareResult<Booking> {
        self.bookings.create(booking)
    }

    /// Build the priced receipt for an existing booking.
    pub fn receipt_for(&self, booking_id: &str) -> SpareResult<Receipt> {
        let booking = self
            .bookings
            .get(booking_id)
            .ok_or_else(|| SpareError::not_found(format!("no booking with id {}", booking_id)))?;
        Receipt::from_booking(&booking)
    }
}
