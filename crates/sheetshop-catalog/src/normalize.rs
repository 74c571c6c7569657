//! Normalization from raw spreadsheet rows to [`sheetshop_core::ProductRow`].
//!
//! Numeric parsing is delegated to [`crate::number`] and description
//! cleanup to [`crate::sanitize`]; this module owns the column mapping and
//! the price/offer/visibility derivations.

use sheetshop_core::ProductRow;

use crate::number::parse_locale_number;
use crate::sanitize::sanitize_html;
use crate::sheet::RawRow;

/// Spreadsheet column headers.
pub mod columns {
    pub const ID: &str = "ID";
    pub const NAME: &str = "Navn";
    pub const CATEGORY: &str = "Kategori";
    pub const BASE_PRICE: &str = "Basispris";
    pub const TOTAL_PRICE: &str = "Pris i alt";
    pub const QUANTITY: &str = "Antal";
    pub const SHOWN: &str = "Vist";
    pub const SHORT_DESCRIPTION: &str = "Kort beskrivelse";
    pub const DESCRIPTION: &str = "Beskrivelse";
}

/// Danish VAT multiplier applied to the pre-tax base price.
pub const VAT_FACTOR: f64 = 1.25;

/// How far below the normal price the current price must be before the
/// product counts as an offer. Absorbs rounding in the sheet's formulas.
pub const OFFER_TOLERANCE: f64 = 0.49;

/// Normalizes a raw spreadsheet row into a [`ProductRow`].
///
/// Returns `None` (and logs a warning) when the `ID` cell is empty; such
/// rows are excluded from the catalog.
#[must_use]
pub fn normalize_row(row: &RawRow) -> Option<ProductRow> {
    let id = row.get(columns::ID).trim();
    if id.is_empty() {
        tracing::warn!(
            name = row.get(columns::NAME).trim(),
            "skipping row without ID"
        );
        return None;
    }

    let name = row.get(columns::NAME).trim().to_owned();
    let category = normalize_category(row.get(columns::CATEGORY));

    let base_price = parse_locale_number(row.get(columns::BASE_PRICE));
    let current_price = parse_locale_number(row.get(columns::TOTAL_PRICE));
    let stock_count = parse_locale_number(row.get(columns::QUANTITY));
    let visible = parse_shown(row.get(columns::SHOWN));

    let normal_price = normal_price(base_price, current_price);
    let is_on_offer = is_on_offer(current_price, normal_price);

    let short_raw = row.get(columns::SHORT_DESCRIPTION);
    let long_raw = row.get(columns::DESCRIPTION);
    let short_description_html = sanitize_html(short_raw);
    let description_html = if long_raw.trim().is_empty() {
        short_description_html.clone()
    } else {
        sanitize_html(long_raw)
    };

    Some(ProductRow {
        id: id.to_owned(),
        name,
        category,
        base_price,
        current_price,
        normal_price,
        is_on_offer,
        stock_count,
        visible,
        description_html,
        short_description_html,
    })
}

/// Trims the category and removes a single trailing period, so
/// `"Kaffe."` and `"Kaffe"` land in the same category.
fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_owned()
}

/// An empty `Vist` cell means "shown"; otherwise only a value of exactly 1
/// shows the product.
fn parse_shown(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    (parse_locale_number(trimmed) - 1.0).abs() < f64::EPSILON
}

/// Tax-inclusive normal price: the base price plus VAT when a base price is
/// set, else the current price. Never negative.
fn normal_price(base_price: f64, current_price: f64) -> f64 {
    let price = if base_price > 0.0 {
        base_price * VAT_FACTOR
    } else {
        current_price
    };
    price.max(0.0)
}

fn is_on_offer(current_price: f64, normal_price: f64) -> bool {
    current_price > 0.0 && normal_price > 0.0 && current_price < normal_price - OFFER_TOLERANCE
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
