pub mod categories;
pub mod client;
pub mod collate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod normalize;
pub mod number;
pub mod render;
pub mod sanitize;
pub mod sheet;

pub use categories::{
    category_options, extract_categories, retain_known_category, CategoryOption,
};
pub use client::SheetClient;
pub use error::CatalogError;
pub use filter::apply_filters;
pub use loader::{build_catalog, load_catalog};
pub use normalize::normalize_row;
pub use number::parse_locale_number;
pub use render::{
    format_dkk, render_error_page, render_filtered, render_page, CatalogRenderer,
    HtmlGridRenderer, PageContext, LOAD_ERROR_MESSAGE,
};
pub use sanitize::sanitize_html;
pub use sheet::{parse_sheet, RawRow};
