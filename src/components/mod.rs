//! UI Components
//!
//! Page and widget components.

mod catalog_page;
mod detail_page;
mod error_banner;
mod item_card;
mod not_found_page;
mod type_badge;
mod type_filter;

pub use catalog_page::CatalogPage;
pub use detail_page::DetailPage;
pub use error_banner::ErrorBanner;
pub use item_card::ItemCard;
pub use not_found_page::NotFoundPage;
pub use type_badge::{MoveChip, TypeBadge};
pub use type_filter::TypeFilter;
