//! First-run seed datasets.
//!
//! Fixed literal tables used to populate the company, car model and variant
//! collections the first time a repository opens over an empty store.
//! Records receive generated ids at seed time; once anything has been
//! persisted the seed is never applied again.

use crate::models::{CarModel, Company, Variant};

/// Seed companies shown on a fresh install.
pub fn seed_companies() -> Vec<Company> {
    vec![
        Company::new("Tesla", "https://via.placeholder.com/150?text=Tesla"),
        Company::new("BMW", "https://via.placeholder.com/150?text=BMW"),
        Company::new("Jaguar", "https://via.placeholder.com/150?text=Jaguar"),
    ]
}

/// Seed car models shown on a fresh install.
pub fn seed_car_models() -> Vec<CarModel> {
    vec![
        CarModel::new(
            "Tesla Model S",
            "Tesla",
            "2021",
            "Flagship electric sedan with long range and high performance.",
            "https://via.placeholder.com/150?text=Tesla+Model+S",
        ),
        CarModel::new(
            "BMW 3 Series",
            "BMW",
            "2020",
            "Compact executive sedan known for its balanced handling.",
            "https://via.placeholder.com/150?text=BMW+3+Series",
        ),
        CarModel::new(
            "Jaguar F-Type",
            "Jaguar",
            "2019",
            "Two-seat sports car with a distinctive design and exhaust note.",
            "https://via.placeholder.com/150?text=Jaguar+F-Type",
        ),
    ]
}

/// Seed variants shown on a fresh install.
pub fn seed_variants() -> Vec<Variant> {
    vec![
        Variant::new(
            "Tesla Model S",
            "Standard Range Plus",
            "Standard Range Plus with basic features and great performance.",
            "https://via.placeholder.com/150?text=Tesla+Model+S",
        ),
        Variant::new(
            "Tesla Model S",
            "Long Range",
            "Long Range with extended battery life and enhanced features.",
            "https://via.placeholder.com/150?text=Tesla+Model+S+Long+Range",
        ),
        Variant::new(
            "Tesla Model S",
            "Plaid",
            "Plaid variant with ultimate performance and speed.",
            "https://via.placeholder.com/150?text=Tesla+Model+S+Plaid",
        ),
        Variant::new(
            "BMW 3 Series",
            "Base Model",
            "Base Model with standard equipment and great fuel economy.",
            "https://via.placeholder.com/150?text=BMW+3+Series",
        ),
        Variant::new(
            "BMW 3 Series",
            "Sport",
            "Sport variant with sportier suspension and styling.",
            "https://via.placeholder.com/150?text=BMW+3+Series+Sport",
        ),
        Variant::new(
            "BMW 3 Series",
            "M3",
            "M3 performance model with advanced performance tuning.",
            "https://via.placeholder.com/150?text=BMW+M3",
        ),
        Variant::new(
            "Jaguar F-Type",
            "XE",
            "XE variant with the base engine and luxury features.",
            "https://via.placeholder.com/150?text=Jaguar+F-Type+XE",
        ),
        Variant::new(
            "Jaguar F-Type",
            "R-Dynamic",
            "R-Dynamic with more power and sportier styling.",
            "https://via.placeholder.com/150?text=Jaguar+F-Type+R-Dynamic",
        ),
        Variant::new(
            "Jaguar F-Type",
            "SVR",
            "SVR with the highest performance and racing-inspired design.",
            "https://via.placeholder.com/150?text=Jaguar+F-Type+SVR",
        ),
    ]
}
