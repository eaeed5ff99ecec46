pub mod category;
pub mod expense;
pub mod inventory;
pub mod marketplace;
pub mod product;

pub use category::{Category, CategoryInput};
pub use expense::{Expense, ExpenseInput};
pub use inventory::{Inventory, InventoryInput};
pub use marketplace::{Marketplace, MarketplaceInput};
pub use product::{Product, ProductInput};
