//! SpareGold Core - Rust implementation of the Spare Gold catalog and
//! booking application core.
//!
//! This library provides the core functionality for Spare Gold:
//! - Data models (Company, CarModel, Variant, SparePart, Booking)
//! - Catalog repositories over on-device key-value persistence
//! - Session gate mirroring identity-provider state
//! - Remote asset upload (Cloudinary)
//! - Pricing and receipt formatting
//! - Configuration management
//!
//! This is a pure Rust library designed to sit beneath the mobile view
//! layer: screens consume the catalog through [`client::SpareGoldClient`]
//! and never touch the store directly.

pub mod asset_storage;
pub mod asset_storage_cloudinary;
pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod seed;
pub mod session;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use catalog::{CatalogEntity, CatalogRepository};
pub use client::SpareGoldClient;
pub use config::Config;
pub use error::{SpareError, SpareResult, ValidationError};
pub use models::{Booking, CarModel, Company, SparePart, UserProfile, Variant};
pub use pricing::{compute_total, PriceBreakdown, Receipt};
pub use session::{SessionGate, SessionState};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
