//! Category extraction for the category control.

use serde::Serialize;
use sheetshop_core::{ProductQuery, ProductRow};

use crate::collate::danish_cmp;

/// Label of the leading "all categories" option.
pub const ALL_CATEGORIES_LABEL: &str = "Alle kategorier";

/// One entry of the category control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    /// Submitted value; empty for the "all categories" sentinel.
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Distinct non-empty categories among visible, in-stock products, in
/// Danish collation order.
///
/// Categories whose products are all hidden or sold out are left out, so
/// choosing any listed category yields at least one product.
#[must_use]
pub fn extract_categories(products: &[ProductRow]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products.iter().filter(|p| p.is_listable()) {
        if !product.category.is_empty() && !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories.sort_by(|a, b| danish_cmp(a, b));
    categories
}

/// Builds the category control options: the "all categories" sentinel
/// followed by `categories`, with `selected` marked.
///
/// An unknown `selected` value leaves only the sentinel selected.
#[must_use]
pub fn category_options(categories: &[String], selected: Option<&str>) -> Vec<CategoryOption> {
    let selected = selected.filter(|s| categories.iter().any(|c| c == s));

    std::iter::once(CategoryOption {
        value: String::new(),
        label: ALL_CATEGORIES_LABEL.to_owned(),
        selected: selected.is_none(),
    })
    .chain(categories.iter().map(|c| CategoryOption {
        value: c.clone(),
        label: c.clone(),
        selected: selected == Some(c.as_str()),
    }))
    .collect()
}

/// Returns `query` with its category cleared unless it is one of
/// `categories`.
///
/// A bookmarked category whose products have all sold out would otherwise
/// filter to an empty grid while the category control shows "all
/// categories".
#[must_use]
pub fn retain_known_category(query: &ProductQuery, categories: &[String]) -> ProductQuery {
    let known = query
        .selected_category()
        .is_some_and(|c| categories.iter().any(|known| known == c));
    ProductQuery {
        category: if known { query.category.clone() } else { None },
        ..query.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, stock: f64, visible: bool) -> ProductRow {
        ProductRow {
            id: id.to_owned(),
            name: format!("Produkt {id}"),
            category: category.to_owned(),
            base_price: 0.0,
            current_price: 10.0,
            normal_price: 10.0,
            is_on_offer: false,
            stock_count: stock,
            visible,
            description_html: String::new(),
            short_description_html: String::new(),
        }
    }

    #[test]
    fn categories_are_distinct_and_danish_sorted() {
        let products = vec![
            product("1", "Øl", 1.0, true),
            product("2", "Kaffe", 1.0, true),
            product("3", "Æbler", 1.0, true),
            product("4", "Kaffe", 2.0, true),
            product("5", "Te", 1.0, true),
        ];
        assert_eq!(
            extract_categories(&products),
            vec!["Kaffe", "Te", "Æbler", "Øl"]
        );
    }

    #[test]
    fn categories_of_hidden_or_sold_out_products_are_excluded() {
        let products = vec![
            product("1", "Kaffe", 1.0, true),
            product("2", "Te", 0.0, true),
            product("3", "Kakao", 4.0, false),
            product("4", "Kakao", 0.0, true),
        ];
        assert_eq!(extract_categories(&products), vec!["Kaffe"]);
    }

    #[test]
    fn empty_categories_are_skipped() {
        let products = vec![product("1", "", 1.0, true), product("2", "Te", 1.0, true)];
        assert_eq!(extract_categories(&products), vec!["Te"]);
    }

    #[test]
    fn options_start_with_all_categories_sentinel() {
        let categories = vec!["Kaffe".to_owned(), "Te".to_owned()];
        let options = category_options(&categories, None);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Alle kategorier");
        assert!(options[0].selected);
        assert!(!options[1].selected);
    }

    #[test]
    fn options_mark_selected_category() {
        let categories = vec!["Kaffe".to_owned(), "Te".to_owned()];
        let options = category_options(&categories, Some("Te"));
        assert!(!options[0].selected);
        assert!(options[2].selected);
    }

    #[test]
    fn retain_known_category_keeps_listed_category() {
        let categories = vec!["Kaffe".to_owned()];
        let query = ProductQuery {
            category: Some("Kaffe".to_owned()),
            ..ProductQuery::default()
        };
        assert_eq!(retain_known_category(&query, &categories), query);
    }

    #[test]
    fn retain_known_category_clears_unlisted_category() {
        let categories = vec!["Kaffe".to_owned()];
        let query = ProductQuery {
            q: Some("mørk".to_owned()),
            category: Some("Kakao".to_owned()),
            sort: sheetshop_core::SortOrder::PriceAsc,
        };
        let scoped = retain_known_category(&query, &categories);
        assert!(scoped.category.is_none());
        assert_eq!(scoped.q.as_deref(), Some("mørk"));
        assert_eq!(scoped.sort, sheetshop_core::SortOrder::PriceAsc);
    }

    #[test]
    fn unknown_selection_falls_back_to_sentinel() {
        let categories = vec!["Kaffe".to_owned()];
        let options = category_options(&categories, Some("Vin"));
        assert!(options[0].selected);
        assert!(!options[1].selected);
    }
}
