use serde::{Deserialize, Serialize};

/// Ordering applied after filtering.
///
/// Parsing is lenient: the Danish control values (`navn-asc`, `pris-asc`,
/// `pris-desc`) are accepted as aliases, and anything unrecognized means
/// "keep spreadsheet order".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    #[default]
    None,
    NameAsc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    /// All orders offered by the sort control, in display order.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::None,
        SortOrder::NameAsc,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::None => "",
            SortOrder::NameAsc => "name-asc",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    /// Danish label for the sort control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::None => "Standard",
            SortOrder::NameAsc => "Navn (A-Å)",
            SortOrder::PriceAsc => "Pris (lav-høj)",
            SortOrder::PriceDesc => "Pris (høj-lav)",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name-asc" | "navn-asc" => SortOrder::NameAsc,
            "price-asc" | "pris-asc" => SortOrder::PriceAsc,
            "price-desc" | "pris-desc" => SortOrder::PriceDesc,
            _ => SortOrder::None,
        }
    }
}

impl From<String> for SortOrder {
    fn from(raw: String) -> Self {
        SortOrder::parse(&raw)
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.as_str().to_string()
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state of the storefront controls: free-text search, category and
/// sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl ProductQuery {
    /// Trimmed, lower-cased search text, or `None` when blank.
    #[must_use]
    pub fn normalized_text(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Selected category, or `None` for "all categories".
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
