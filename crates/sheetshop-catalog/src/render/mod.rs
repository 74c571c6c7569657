//! Projection of product lists onto storefront cards.
//!
//! Rendering sits behind [`CatalogRenderer`] so the filter pipeline can be
//! driven and tested without producing markup.

mod money;
mod page;

use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sheetshop_core::{ProductQuery, ProductRow};

use crate::filter::apply_filters;

pub use money::format_dkk;
pub use page::{render_error_page, render_page, PageContext, LOAD_ERROR_MESSAGE};

/// Characters left unescaped in an image path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300"><rect width="100%" height="100%" fill="#e5e7eb"/><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" fill="#6b7280" font-size="16">Intet billede</text></svg>"##;

const DEFAULT_ALT: &str = "Produktbillede";
const SOLD_OUT_LABEL: &str = "Udsolgt";

/// Something that can display a product list.
///
/// Each call replaces whatever was rendered before; implementations do not
/// diff against earlier output.
pub trait CatalogRenderer {
    fn render(&mut self, products: &[ProductRow]);
}

/// Filters `products` with `query` and hands the result to `renderer`.
///
/// Returns the number of products rendered.
pub fn render_filtered<R: CatalogRenderer + ?Sized>(
    renderer: &mut R,
    products: &[ProductRow],
    query: &ProductQuery,
) -> usize {
    let items = apply_filters(products, query);
    renderer.render(&items);
    items.len()
}

/// Renders products as the storefront's HTML card grid.
#[derive(Debug, Clone)]
pub struct HtmlGridRenderer {
    image_base: String,
    html: String,
}

impl HtmlGridRenderer {
    /// `image_base` is the path or URL prefix of `{id}.jpg` product images.
    #[must_use]
    pub fn new(image_base: impl Into<String>) -> Self {
        Self {
            image_base: image_base.into(),
            html: String::new(),
        }
    }

    /// Markup of the most recent render.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }

    /// Image URL for a product, by convention `{image_base}/{id}.jpg`.
    #[must_use]
    pub fn image_url(&self, id: &str) -> String {
        let segment = utf8_percent_encode(id, PATH_SEGMENT);
        if self.image_base.is_empty() {
            format!("{segment}.jpg")
        } else {
            format!("{}/{segment}.jpg", self.image_base)
        }
    }

    fn write_card(&self, out: &mut String, product: &ProductRow) {
        let title = if product.name.is_empty() {
            format!("#{}", product.id)
        } else {
            product.name.clone()
        };
        let alt = if product.name.is_empty() {
            DEFAULT_ALT
        } else {
            product.name.as_str()
        };
        let (before_class, before_text) = if product.is_on_offer {
            ("before", format_dkk(product.normal_price))
        } else {
            ("before hidden", String::new())
        };
        let stock = if product.stock_count > 0.0 {
            format!("På lager: {}", product.stock_count)
        } else {
            SOLD_OUT_LABEL.to_owned()
        };

        // The description is already sanitized markup; everything else is text.
        let _ = write!(
            out,
            concat!(
                "<article class=\"card\" data-id=\"{id}\">",
                "<img class=\"thumb\" src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" onerror=\"{onerror}\">",
                "<div class=\"body\">",
                "<h2 class=\"title\">{title}</h2>",
                "<p class=\"cat\">{cat}</p>",
                "<div class=\"desc\">{desc}</div>",
                "<p class=\"price\"><s class=\"{before_class}\">{before}</s> <span class=\"now\">{now}</span></p>",
                "<p class=\"stock\">{stock}</p>",
                "</div>",
                "</article>\n",
            ),
            id = html_escape::encode_double_quoted_attribute(&product.id),
            src = html_escape::encode_double_quoted_attribute(&self.image_url(&product.id)),
            alt = html_escape::encode_double_quoted_attribute(alt),
            onerror = html_escape::encode_double_quoted_attribute(&placeholder_onerror()),
            title = html_escape::encode_text(&title),
            cat = html_escape::encode_text(&product.category),
            desc = product.description_html,
            before_class = before_class,
            before = html_escape::encode_text(&before_text),
            now = html_escape::encode_text(&format_dkk(product.effective_price())),
            stock = html_escape::encode_text(&stock),
        );
    }
}

impl CatalogRenderer for HtmlGridRenderer {
    fn render(&mut self, products: &[ProductRow]) {
        let mut out = String::with_capacity(products.len() * 768);
        for product in products {
            self.write_card(&mut out, product);
        }
        self.html = out;
    }
}

/// Inline SVG shown when a product image fails to load.
#[must_use]
pub fn placeholder_data_uri() -> String {
    format!(
        "data:image/svg+xml;utf8,{}",
        utf8_percent_encode(PLACEHOLDER_SVG, NON_ALPHANUMERIC)
    )
}

fn placeholder_onerror() -> String {
    format!("this.onerror=null;this.src='{}'", placeholder_data_uri())
}

#[cfg(test)]
#[path = "../render_test.rs"]
mod tests;
