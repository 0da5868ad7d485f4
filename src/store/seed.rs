//! Demo catalog loaded at startup when `SEED_DATA` is enabled.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::StoreState;
use crate::entities::prelude::{Category, Product};

const ICON_BASE: &str = "https://cdn-icons-png.flaticon.com/512";
const PHOTO_BASE: &str = "https://images.unsplash.com";
const PHOTO_PARAMS: &str = "auto=format&fit=crop&w=300&q=80";

/// (name, icon path, description)
const CATEGORIES: [(&str, &str, &str); 8] = [
    ("Dairy", "2153/2153788.png", "Fresh dairy products"),
    ("Fruits", "3082/3082025.png", "Fresh fruits"),
    ("Vegetables", "2153/2153786.png", "Fresh vegetables"),
    ("Bakery", "2716/2716467.png", "Fresh bakery products"),
    ("Snacks", "2553/2553691.png", "Tasty snacks"),
    ("Beverages", "3050/3050153.png", "Refreshing beverages"),
    ("Household", "3082/3082054.png", "Household essentials"),
    ("Personal Care", "6134/6134187.png", "Personal care products"),
];

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: Decimal,
    mrp: Decimal,
    photo: &'static str,
    unit_value: f64,
    unit_type: &'static str,
    category_id: i32,
    stock: u32,
    is_popular: bool,
    is_new_arrival: bool,
    discount: u32,
    is_best_seller: bool,
}

fn products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            name: "Organic Milk",
            description: "Fresh organic milk from grass-fed cows",
            price: dec!(45),
            mrp: dec!(55),
            photo: "photo-1633575331244-ef7a8ebe6338",
            unit_value: 500.0,
            unit_type: "ml",
            category_id: 1,
            stock: 50,
            is_popular: true,
            is_new_arrival: false,
            discount: 18,
            is_best_seller: true,
        },
        SeedProduct {
            name: "Free Range Eggs",
            description: "Farm fresh free-range eggs",
            price: dec!(60),
            mrp: dec!(60),
            photo: "photo-1615485290382-441e4d049cb5",
            unit_value: 6.0,
            unit_type: "pcs",
            category_id: 1,
            stock: 40,
            is_popular: true,
            is_new_arrival: false,
            discount: 0,
            is_best_seller: false,
        },
        SeedProduct {
            name: "Whole Wheat Bread",
            description: "Freshly baked whole wheat bread",
            price: dec!(35),
            mrp: dec!(40),
            photo: "photo-1598170845058-32b9d6a5da37",
            unit_value: 400.0,
            unit_type: "g",
            category_id: 4,
            stock: 30,
            is_popular: true,
            is_new_arrival: false,
            // 12.5% rounded down to whole percent
            discount: 12,
            is_best_seller: false,
        },
        SeedProduct {
            name: "Fresh Bananas",
            description: "Sweet and ripe bananas",
            price: dec!(70),
            mrp: dec!(70),
            photo: "photo-1550989460-0adf9ea622e2",
            unit_value: 12.0,
            unit_type: "pcs",
            category_id: 2,
            stock: 2,
            is_popular: true,
            is_new_arrival: false,
            discount: 0,
            is_best_seller: false,
        },
        SeedProduct {
            name: "Ripe Avocado",
            description: "Perfectly ripe avocados",
            price: dec!(80),
            mrp: dec!(80),
            photo: "photo-1596591606975-97ee5cef3a1e",
            unit_value: 1.0,
            unit_type: "pc",
            category_id: 2,
            stock: 20,
            is_popular: false,
            is_new_arrival: true,
            discount: 0,
            is_best_seller: false,
        },
        SeedProduct {
            name: "Fresh Blueberries",
            description: "Sweet and juicy blueberries",
            price: dec!(120),
            mrp: dec!(150),
            photo: "photo-1579636858710-2a22e5e4b957",
            unit_value: 125.0,
            unit_type: "g",
            category_id: 2,
            stock: 15,
            is_popular: false,
            is_new_arrival: true,
            discount: 20,
            is_best_seller: false,
        },
        SeedProduct {
            name: "Cherry Tomatoes",
            description: "Sweet and tangy cherry tomatoes",
            price: dec!(60),
            mrp: dec!(60),
            photo: "photo-1578281644399-8ba21beeb8a2",
            unit_value: 500.0,
            unit_type: "g",
            category_id: 3,
            stock: 25,
            is_popular: false,
            is_new_arrival: true,
            discount: 0,
            is_best_seller: false,
        },
        SeedProduct {
            name: "Greek Yogurt",
            description: "Creamy Greek yogurt",
            price: dec!(90),
            mrp: dec!(110),
            photo: "photo-1546630392-db5b1f8277fb",
            unit_value: 400.0,
            unit_type: "g",
            category_id: 1,
            stock: 35,
            is_popular: false,
            is_new_arrival: true,
            discount: 18,
            is_best_seller: false,
        },
    ]
}

/// Insert the demo categories and products. Category ids are assigned in
/// the listed order, so "Dairy" is always id 1 on a fresh store.
pub fn seed_catalog(state: &mut StoreState) {
    for (name, icon, description) in CATEGORIES {
        state.categories.insert_with(|id| Category {
            id,
            name: name.to_string(),
            image: format!("{}/{}", ICON_BASE, icon),
            description: Some(description.to_string()),
        });
    }

    for seed in products() {
        state.products.insert_with(|id| Product {
            id,
            name: seed.name.to_string(),
            description: Some(seed.description.to_string()),
            price: seed.price,
            mrp: seed.mrp,
            image: format!("{}/{}?{}", PHOTO_BASE, seed.photo, PHOTO_PARAMS),
            unit_value: seed.unit_value,
            unit_type: seed.unit_type.to_string(),
            category_id: seed.category_id,
            stock: seed.stock,
            is_popular: seed.is_popular,
            is_new_arrival: seed.is_new_arrival,
            is_best_seller: seed.is_best_seller,
            discount: Some(seed.discount),
        });
    }

    tracing::info!(
        categories = state.categories.len(),
        products = state.products.len(),
        "Seeded demo catalog"
    );
}
