//! One load cycle: fetch, parse, normalize, extract categories.

use chrono::Utc;
use sheetshop_core::Catalog;

use crate::categories::extract_categories;
use crate::client::SheetClient;
use crate::error::CatalogError;
use crate::normalize::normalize_row;
use crate::sheet::parse_sheet;

/// Builds a [`Catalog`] snapshot from already-fetched CSV text.
///
/// Rows without an ID are dropped; everything else is kept in sheet order.
///
/// # Errors
///
/// Returns [`CatalogError::Csv`] if the text is not valid CSV.
pub fn build_catalog(csv_text: &str) -> Result<Catalog, CatalogError> {
    let rows = parse_sheet(csv_text)?;
    let row_count = rows.len();

    let products: Vec<_> = rows.iter().filter_map(normalize_row).collect();
    let categories = extract_categories(&products);

    let catalog = Catalog {
        products,
        categories,
        loaded_at: Utc::now(),
    };

    tracing::info!(
        rows = row_count,
        products = catalog.products.len(),
        dropped = row_count - catalog.products.len(),
        listable = catalog.listable_count(),
        categories = catalog.categories.len(),
        "catalog built"
    );

    Ok(catalog)
}

/// Fetches the sheet at `sheet_url` and builds a [`Catalog`] from it.
///
/// Any failure aborts the whole cycle; no partial catalog is returned.
///
/// # Errors
///
/// Propagates fetch errors from [`SheetClient::fetch_csv`] and parse errors
/// from [`build_catalog`].
pub async fn load_catalog(client: &SheetClient, sheet_url: &str) -> Result<Catalog, CatalogError> {
    let csv_text = client.fetch_csv(sheet_url).await?;
    build_catalog(&csv_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
ID,Navn,Kategori,Basispris,Pris i alt,Antal,Vist,Kort beskrivelse,Beskrivelse
1001,Kaffebønner,Kaffe.,100,110,12,,<p>Mørk</p>,
,Forældreløs,Kaffe,10,10,1,1,,
1002,Earl Grey,Te,\"39,96\",\"49,95\",3,1,,<p>Klassisk</p>
1003,Skjult te,Urter,10,\"12,50\",5,0,,
1004,Udsolgt,Kakao,10,\"12,50\",0,1,,
";

    #[test]
    fn build_catalog_drops_rows_without_id() {
        let catalog = build_catalog(SHEET).unwrap();
        let ids: Vec<_> = catalog.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1001", "1002", "1003", "1004"]);
    }

    #[test]
    fn build_catalog_categories_come_from_listable_products() {
        let catalog = build_catalog(SHEET).unwrap();
        assert_eq!(catalog.categories, vec!["Kaffe", "Te"]);
        assert_eq!(catalog.listable_count(), 2);
    }

    #[test]
    fn build_catalog_normalizes_rows() {
        let catalog = build_catalog(SHEET).unwrap();
        let coffee = &catalog.products[0];
        assert_eq!(coffee.category, "Kaffe");
        assert!(coffee.is_on_offer);
        let tea = &catalog.products[1];
        assert!(!tea.is_on_offer);
        assert_eq!(tea.description_html, "<p>Klassisk</p>");
    }

    #[test]
    fn build_catalog_of_header_only_sheet_is_empty() {
        let catalog = build_catalog("ID,Navn\n").unwrap();
        assert!(catalog.products.is_empty());
        assert!(catalog.categories.is_empty());
    }

    #[test]
    fn build_catalog_of_empty_text_is_empty() {
        let catalog = build_catalog("").unwrap();
        assert!(catalog.products.is_empty());
    }
}
