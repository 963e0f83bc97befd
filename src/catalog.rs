//! Catalog repositories for Spare Gold.
//!
//! One repository per entity kind, each holding the in-memory collection and
//! mirroring it to the key-value store after every mutation. Mutations are
//! whole-collection writes: read the full collection, change it in memory,
//! write the full collection back. There is no incremental write, batching
//! or debouncing.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{SpareError, SpareResult};
use crate::models::{Booking, CarModel, Company, SparePart, Variant};
use crate::store::{
    KeyValueStore, BOOKINGS_KEY, CAR_MODELS_KEY, COMPANIES_KEY, SPARE_PARTS_KEY, VARIANTS_KEY,
};
use crate::validation::validate_required;

/// A record kind managed by a [`CatalogRepository`].
pub trait CatalogEntity: Clone + Serialize + DeserializeOwned {
    /// Store key the collection persists under
    const COLLECTION_KEY: &'static str;

    /// Entity kind name used in error messages
    const KIND: &'static str;

    /// The record's unique identifier
    fn id(&self) -> &str;

    /// Overwrite the record's identifier (used to pin the stored id on update)
    fn set_id(&mut self, id: String);

    /// Check that every required field is present and non-empty
    fn validate(&self) -> SpareResult<()>;

    /// Text fields a search query is matched against. Kinds whose screens
    /// have no search box designate none; a non-empty query then matches
    /// nothing while the empty query still returns the full collection.
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl CatalogEntity for Company {
    const COLLECTION_KEY: &'static str = COMPANIES_KEY;
    const KIND: &'static str = "company";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> SpareResult<()> {
        validate_required("name", &self.name)?;
        validate_required("image", &self.image)?;
        Ok(())
    }
}

impl CatalogEntity for CarModel {
    const COLLECTION_KEY: &'static str = CAR_MODELS_KEY;
    const KIND: &'static str = "car model";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> SpareResult<()> {
        validate_required("name", &self.name)?;
        validate_required("company", &self.company)?;
        validate_required("year", &self.year)?;
        validate_required("details", &self.details)?;
        Ok(())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl CatalogEntity for Variant {
    const COLLECTION_KEY: &'static str = VARIANTS_KEY;
    const KIND: &'static str = "variant";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> SpareResult<()> {
        validate_required("name", &self.name)?;
        validate_required("variant", &self.variant)?;
        validate_required("details", &self.details)?;
        validate_required("image", &self.image)?;
        Ok(())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.variant]
    }
}

impl CatalogEntity for SparePart {
    const COLLECTION_KEY: &'static str = SPARE_PARTS_KEY;
    const KIND: &'static str = "spare part";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> SpareResult<()> {
        validate_required("carName", &self.car_name)?;
        validate_required("brand", &self.brand)?;
        validate_required("carMake", &self.car_make)?;
        validate_required("spareName", &self.spare_name)?;
        validate_required("year", &self.year)?;
        validate_required("price", &self.price)?;
        Ok(())
    }
}

impl CatalogEntity for Booking {
    const COLLECTION_KEY: &'static str = BOOKINGS_KEY;
    const KIND: &'static str = "booking";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> SpareResult<()> {
        validate_required("customerName", &self.customer_name)?;
        validate_required("address", &self.address)?;
        validate_required("mobile", &self.mobile)?;
        validate_required("spareName", &self.spare_name)?;
        validate_required("carName", &self.car_name)?;
        validate_required("carMake", &self.car_make)?;
        validate_required("price", &self.price)?;
        Ok(())
    }
}

/// Repository over one entity kind's collection.
pub struct CatalogRepository<T: CatalogEntity> {
    store: Arc<dyn KeyValueStore>,
    records: Vec<T>,
}

impl<T: CatalogEntity> CatalogRepository<T> {
    /// Open a repository with no seed dataset.
    pub fn open(store: Arc<dyn KeyValueStore>) -> SpareResult<Self> {
        Self::open_with_seed(store, Vec::new())
    }

    /// Open a repository, seeding the collection on first run.
    ///
    /// With no persisted value under the collection key, the seed dataset is
    /// adopted and persisted once. Any persisted value, including an empty
    /// array, is loaded verbatim and the seed is never applied again.
    pub fn open_with_seed(store: Arc<dyn KeyValueStore>, seed: Vec<T>) -> SpareResult<Self> {
        let (records, first_run) = match store.get(T::COLLECTION_KEY)? {
            Some(json) => (serde_json::from_str(&json)?, false),
            None => (seed, true),
        };

        let repo = Self { store, records };
        if first_run && !repo.records.is_empty() {
            repo.persist()?;
        }
        Ok(repo)
    }

    /// The current collection, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over the kind's designated fields.
    ///
    /// Always evaluated against the full collection, never a prior result,
    /// so repeated searches are idempotent. An empty or whitespace query
    /// returns the full collection.
    pub fn search(&self, query: &str) -> Vec<T> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list();
        }

        self.records
            .iter()
            .filter(|record| {
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    /// Validate and append a record, then persist the collection.
    ///
    /// On validation failure nothing changes and nothing is written.
    pub fn create(&mut self, record: T) -> SpareResult<T> {
        record.validate()?;
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replace the fields of the record with the given id, keeping the id.
    ///
    /// Forms submit every field, so whole-record replacement realizes the
    /// shallow merge the screens perform.
    pub fn update(&mut self, id: &str, mut record: T) -> SpareResult<T> {
        record.validate()?;

        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| SpareError::not_found(format!("no {} with id {}", T::KIND, id)))?;

        record.set_id(id.to_string());
        self.records[index] = record.clone();
        self.persist()?;
        Ok(record)
    }

    /// Remove the first record with the given id and persist.
    ///
    /// Returns `false` without writing when no record matches, so deleting
    /// a missing id is an idempotent no-op.
    pub fn delete(&mut self, id: &str) -> SpareResult<bool> {
        let index = match self.records.iter().position(|r| r.id() == id) {
            Some(i) => i,
            None => return Ok(false),
        };

        self.records.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Write the full collection back to the store.
    fn persist(&self) -> SpareResult<()> {
        let json = serde_json::to_string(&self.records)?;
        if let Err(err) = self.store.set(T::COLLECTION_KEY, &json) {
            tracing::error!(
                collection = T::COLLECTION_KEY,
                error = %err,
                "failed to persist collection"
            );
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    fn sample_model(name: &str) -> CarModel {
        CarModel::new(name, "Tesla", "2021", "Electric sedan", "")
    }

    #[test]
    fn test_create_then_list_contains_record() {
        let mut repo = CatalogRepository::<CarModel>::open(store()).unwrap();
        let created = repo.create(sample_model("Model S")).unwrap();

        let listed = repo.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[test]
    fn test_create_rejects_empty_required_field() {
        let store = store();
        let mut repo = CatalogRepository::<CarModel>::open(Arc::clone(&store)).unwrap();

        let mut model = sample_model("Model S");
        model.year = String::new();
        let err = repo.create(model).unwrap_err();

        assert!(matches!(err, SpareError::Validation { .. }));
        assert!(repo.is_empty());
        // No persistence write happened
        assert_eq!(store.get(CAR_MODELS_KEY).unwrap(), None);
    }

    #[test]
    fn test_car_model_image_not_required() {
        let mut repo = CatalogRepository::<CarModel>::open(store()).unwrap();
        assert!(repo.create(sample_model("Model 3")).is_ok());
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let mut repo = CatalogRepository::<CarModel>::open(store()).unwrap();
        let original = repo.create(sample_model("Model S")).unwrap();
        let other = repo.create(sample_model("Model 3")).unwrap();

        let mut changed = sample_model("Model S Plaid");
        changed.year = "2023".to_string();
        let updated = repo.update(&original.id, changed).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Model S Plaid");
        assert_eq!(updated.year, "2023");

        // Other records are untouched
        assert_eq!(repo.get(&other.id).unwrap(), other);
    }

    #[test]
    fn test_update_unknown_id_is_error() {
        let mut repo = CatalogRepository::<CarModel>::open(store()).unwrap();
        repo.create(sample_model("Model S")).unwrap();

        let err = repo.update("missing", sample_model("X")).unwrap_err();
        assert!(matches!(err, SpareError::NotFound(_)));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = store();
        let mut repo = CatalogRepository::<CarModel>::open(Arc::clone(&store)).unwrap();
        let created = repo.create(sample_model("Model S")).unwrap();

        assert!(repo.delete(&created.id).unwrap());
        assert!(repo.list().is_empty());

        let persisted_after_delete = store.get(CAR_MODELS_KEY).unwrap();
        assert!(!repo.delete(&created.id).unwrap());
        // No further write happened for the no-op delete
        assert_eq!(store.get(CAR_MODELS_KEY).unwrap(), persisted_after_delete);
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let mut repo = CatalogRepository::<CarModel>::open(store()).unwrap();
        repo.create(sample_model("Model S")).unwrap();
        repo.create(sample_model("3 Series")).unwrap();

        assert_eq!(repo.search("").len(), 2);
        assert_eq!(repo.search("   ").len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut repo = CatalogRepository::<CarModel>::open(store()).unwrap();
        repo.create(sample_model("Model S")).unwrap();
        repo.create(sample_model("3 Series")).unwrap();

        let hits = repo.search("model");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Model S");
        assert_eq!(repo.search("MODEL").len(), 1);
        assert_eq!(repo.search("odel").len(), 1);
    }

    #[test]
    fn test_search_always_runs_against_full_collection() {
        let mut repo = CatalogRepository::<CarModel>::open(store()).unwrap();
        repo.create(sample_model("Model S")).unwrap();
        repo.create(sample_model("3 Series")).unwrap();

        // A narrow search does not shrink what a later search sees
        assert_eq!(repo.search("series").len(), 1);
        assert_eq!(repo.search("model").len(), 1);
        assert_eq!(repo.search("").len(), 2);
    }

    #[test]
    fn test_variant_search_matches_name_or_variant() {
        let mut repo = CatalogRepository::<Variant>::open(store()).unwrap();
        repo.create(Variant::new("Tesla Model S", "Plaid", "Fast", "img"))
            .unwrap();
        repo.create(Variant::new("BMW 3 Series", "M3", "Sporty", "img"))
            .unwrap();

        assert_eq!(repo.search("plaid").len(), 1);
        assert_eq!(repo.search("bmw").len(), 1);
        assert_eq!(repo.search("tesla").len(), 1);
    }

    #[test]
    fn test_search_on_kind_without_fields() {
        let mut repo = CatalogRepository::<Booking>::open(store()).unwrap();
        repo.create(Booking::new(
            "Asha",
            "12 MG Road",
            "9876543210",
            "Brake Pad",
            "Model S",
            "Tesla",
            "120.00",
        ))
        .unwrap();

        assert_eq!(repo.search("").len(), 1);
        assert!(repo.search("asha").is_empty());
    }

    #[test]
    fn test_round_trip_through_reopen() {
        let store = store();
        let created = {
            let mut repo = CatalogRepository::<SparePart>::open(Arc::clone(&store)).unwrap();
            repo.create(SparePart::new(
                "Model S",
                "Bosch",
                "Tesla",
                "Brake Pad",
                "2021",
                "120.00",
                Some("https://example.com/pad.jpg".to_string()),
            ))
            .unwrap()
        };

        // Simulated process restart: a fresh repository over the same store
        let repo = CatalogRepository::<SparePart>::open(store).unwrap();
        assert_eq!(repo.list(), vec![created]);
    }

    #[test]
    fn test_seed_applied_only_on_first_run() {
        let store = store();
        let seed = vec![sample_model("Model S"), sample_model("3 Series")];

        let mut repo =
            CatalogRepository::<CarModel>::open_with_seed(Arc::clone(&store), seed.clone())
                .unwrap();
        assert_eq!(repo.len(), 2);

        // Delete everything; the empty collection persists
        for record in repo.list() {
            repo.delete(&record.id).unwrap();
        }
        assert!(repo.is_empty());

        // Reopening with the seed must not reseed over the persisted empty array
        let repo = CatalogRepository::<CarModel>::open_with_seed(store, seed).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_seed_persisted_at_first_open() {
        let store = store();
        let seed = vec![sample_model("Model S")];
        CatalogRepository::<CarModel>::open_with_seed(Arc::clone(&store), seed).unwrap();

        let persisted = store.get(CAR_MODELS_KEY).unwrap().unwrap();
        let parsed: Vec<CarModel> = serde_json::from_str(&persisted).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Model S");
    }
}
