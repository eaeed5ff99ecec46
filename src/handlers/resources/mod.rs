// handlers/resources/mod.rs - CRUD endpoints for every inventory resource
//
// Each resource exposes the same six routes under its controller name:
//   GET    /<Controller>/Get<Plural>
//   GET    /<Controller>/Get<Plural>ByID?<idParam>=n
//   GET    /<Controller>/Get<Plural>By<Name|Description>?<searchParam>=text
//   POST   /<Controller>/Add<Singular>
//   PUT    /<Controller>/Edit<Singular>?<idParam>=n
//   DELETE /<Controller>/Delete<Singular>?<idParam>=n

pub mod params;
pub mod read;
pub mod write;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::app::AppState;
use crate::database::models::{Category, Expense, Inventory, Marketplace, Product};
use crate::database::Entity;

pub use read::{get_by_id, list, search};
pub use write::{add, edit, remove};

/// Routing names for an `Entity`.
pub trait Resource: Entity {
    const CONTROLLER: &'static str;
    const PLURAL: &'static str;
    const SINGULAR: &'static str;
    /// Suffix of the search route (`Name` or `Description`)
    const SEARCH_BY: &'static str;
    const ID_PARAM: &'static str;
    const SEARCH_PARAM: &'static str;
}

impl Resource for Product {
    const CONTROLLER: &'static str = "Products";
    const PLURAL: &'static str = "Products";
    const SINGULAR: &'static str = "Product";
    const SEARCH_BY: &'static str = "Name";
    const ID_PARAM: &'static str = "productID";
    const SEARCH_PARAM: &'static str = "productName";
}

impl Resource for Category {
    const CONTROLLER: &'static str = "Categories";
    const PLURAL: &'static str = "Categories";
    const SINGULAR: &'static str = "Category";
    const SEARCH_BY: &'static str = "Name";
    const ID_PARAM: &'static str = "categoryID";
    const SEARCH_PARAM: &'static str = "categoryName";
}

impl Resource for Inventory {
    const CONTROLLER: &'static str = "Inventory";
    const PLURAL: &'static str = "Inventory";
    const SINGULAR: &'static str = "Inventory";
    const SEARCH_BY: &'static str = "Description";
    const ID_PARAM: &'static str = "inventoryID";
    const SEARCH_PARAM: &'static str = "inventoryDescription";
}

impl Resource for Marketplace {
    const CONTROLLER: &'static str = "Marketplaces";
    const PLURAL: &'static str = "Marketplaces";
    const SINGULAR: &'static str = "Marketplace";
    const SEARCH_BY: &'static str = "Name";
    const ID_PARAM: &'static str = "marketplaceID";
    const SEARCH_PARAM: &'static str = "marketplaceName";
}

impl Resource for Expense {
    const CONTROLLER: &'static str = "Expenses";
    const PLURAL: &'static str = "Expenses";
    const SINGULAR: &'static str = "Expense";
    // Historical route name; the search runs on the description column.
    const SEARCH_BY: &'static str = "Name";
    const ID_PARAM: &'static str = "expenseID";
    const SEARCH_PARAM: &'static str = "expenseDescription";
}

/// Routes for all resources. Callers add the JWT gate.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Product>())
        .merge(resource_routes::<Category>())
        .merge(resource_routes::<Inventory>())
        .merge(resource_routes::<Marketplace>())
        .merge(resource_routes::<Expense>())
}

fn resource_routes<T: Resource>() -> Router<AppState> {
    Router::new()
        .route(&list_path::<T>(), get(list::<T>))
        .route(&format!("{}ByID", list_path::<T>()), get(get_by_id::<T>))
        .route(&format!("{}By{}", list_path::<T>(), T::SEARCH_BY), get(search::<T>))
        .route(&write_path::<T>("Add"), post(add::<T>))
        .route(&write_path::<T>("Edit"), put(edit::<T>))
        .route(&write_path::<T>("Delete"), delete(remove::<T>))
}

fn list_path<T: Resource>() -> String {
    format!("/{}/Get{}", T::CONTROLLER, T::PLURAL)
}

fn write_path<T: Resource>(verb: &str) -> String {
    format!("/{}/{}{}", T::CONTROLLER, verb, T::SINGULAR)
}
