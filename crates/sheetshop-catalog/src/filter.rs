//! Filtering and sorting of the product list for one set of control values.

use sheetshop_core::{ProductQuery, ProductRow, SortOrder};

use crate::collate::danish_cmp;

/// Applies the storefront controls to `products`.
///
/// Only visible, in-stock products are eligible. The free-text query is a
/// case-insensitive substring match against name, category or ID; a
/// category must match exactly. Sorting is stable, so ties and
/// [`SortOrder::None`] keep spreadsheet order. `products` is not modified.
#[must_use]
pub fn apply_filters(products: &[ProductRow], query: &ProductQuery) -> Vec<ProductRow> {
    let text = query.normalized_text();
    let category = query.selected_category();

    let mut items: Vec<ProductRow> = products
        .iter()
        .filter(|p| p.is_listable())
        .filter(|p| text.as_deref().is_none_or(|q| matches_text(p, q)))
        .filter(|p| category.is_none_or(|c| p.category == c))
        .cloned()
        .collect();

    sort_products(&mut items, query.sort);
    items
}

/// `needle` must already be lower-cased.
fn matches_text(product: &ProductRow, needle: &str) -> bool {
    [&product.name, &product.category, &product.id]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn sort_products(items: &mut [ProductRow], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::NameAsc => items.sort_by(|a, b| danish_cmp(&a.name, &b.name)),
        SortOrder::PriceAsc => {
            items.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()));
        }
        SortOrder::PriceDesc => {
            items.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()));
        }
    }
}
