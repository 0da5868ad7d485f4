//! Catalog queries over categories and products, plus catalog writes
//! (create, stock replace).

use tracing::{debug, info};

use crate::entities::prelude::{Category, Product};
use crate::error::AppResult;
use crate::models::category::CreateCategoryRequest;
use crate::models::product::{CreateProductRequest, ProductFilter};
use crate::store::MemStore;

pub fn list_categories(store: &MemStore) -> Vec<Category> {
    store.read(|s| s.categories.list())
}

pub fn get_category(store: &MemStore, id: i32) -> AppResult<Category> {
    store.read(|s| s.categories.require(id).cloned())
}

pub fn create_category(store: &MemStore, req: CreateCategoryRequest) -> AppResult<Category> {
    req.validate()?;

    let category = store.write(|s| {
        s.categories.insert_with(|id| Category {
            id,
            name: req.name,
            image: req.image,
            description: req.description,
        })
    });

    info!(category_id = category.id, name = %category.name, "Category created");
    Ok(category)
}

pub fn get_product(store: &MemStore, id: i32) -> AppResult<Product> {
    store.read(|s| s.products.require(id).cloned())
}

/// Products narrowed by at most one filter. Category ids are not checked
/// against the category table; an unknown id yields an empty list.
pub fn list_products(store: &MemStore, filter: ProductFilter) -> Vec<Product> {
    match filter {
        ProductFilter::All => store.read(|s| s.products.list()),
        ProductFilter::Category(category_id) => {
            store.read(|s| s.products.list_where(|p| p.category_id == category_id))
        }
        ProductFilter::Search(term) => search_products(store, &term),
    }
}

/// Case-insensitive substring search on name or description.
///
/// Runs for any term it is given; keeping very short terms away is up to
/// the caller.
pub fn search_products(store: &MemStore, term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    let results = store.read(|s| s.products.list_where(|p| p.matches(&needle)));
    debug!(term, hits = results.len(), "Product search");
    results
}

pub fn list_popular(store: &MemStore) -> Vec<Product> {
    store.read(|s| s.products.list_where(|p| p.is_popular))
}

pub fn list_new_arrivals(store: &MemStore) -> Vec<Product> {
    store.read(|s| s.products.list_where(|p| p.is_new_arrival))
}

pub fn create_product(store: &MemStore, req: CreateProductRequest) -> AppResult<Product> {
    req.validate()?;

    let product = store.write(|s| {
        s.products.insert_with(|id| Product {
            id,
            name: req.name,
            description: req.description,
            price: req.price,
            mrp: req.mrp,
            image: req.image,
            unit_value: req.unit_value,
            unit_type: req.unit_type,
            category_id: req.category_id,
            stock: req.stock,
            is_popular: req.is_popular,
            is_new_arrival: req.is_new_arrival,
            is_best_seller: req.is_best_seller,
            discount: req.discount,
        })
    });

    info!(product_id = product.id, name = %product.name, stock = product.stock, "Product created");
    Ok(product)
}

/// Replace a product's stock with `new_stock` (not a delta).
pub fn update_stock(store: &MemStore, id: i32, new_stock: u32) -> AppResult<Product> {
    let product = store.write(|s| {
        s.products.update(id, |p| {
            p.stock = new_stock;
            Ok(())
        })
    })?;

    info!(product_id = id, stock = new_stock, "Product stock replaced");
    Ok(product)
}
