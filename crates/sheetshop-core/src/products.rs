use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single spreadsheet row, normalized into a product record.
///
/// Built once per load cycle and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Trimmed value of the `ID` column. Never empty.
    pub id: String,
    pub name: String,
    /// Trimmed `Kategori` with a single trailing period removed.
    pub category: String,
    /// Pre-tax baseline price (`Basispris`), 0 when absent.
    pub base_price: f64,
    /// Tax-inclusive current price (`Pris i alt`).
    pub current_price: f64,
    /// `base_price * 1.25` when a base price exists, otherwise `current_price`.
    pub normal_price: f64,
    pub is_on_offer: bool,
    pub stock_count: f64,
    /// Derived from the `Vist` column.
    pub visible: bool,
    /// Sanitized markup of the long description, or of the short one when
    /// the long description is empty.
    pub description_html: String,
    pub short_description_html: String,
}

impl ProductRow {
    /// Price shown as "now": the current price, or the normal price when no
    /// current price is set.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        if self.current_price == 0.0 {
            self.normal_price
        } else {
            self.current_price
        }
    }

    /// Whether the product may appear in listings at all.
    #[must_use]
    pub fn is_listable(&self) -> bool {
        self.visible && self.stock_count > 0.0
    }
}

/// One loaded snapshot of the spreadsheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Products in spreadsheet order.
    pub products: Vec<ProductRow>,
    /// Distinct categories of listable products, in Danish collation order.
    pub categories: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Number of products that may appear in listings.
    #[must_use]
    pub fn listable_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_listable()).count()
    }
}
