use std::fmt::Write as _;

use sheetshop_core::{ProductQuery, SortOrder};

use crate::categories::category_options;

/// Static message shown in place of the grid when the sheet cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Kunne ikke hente data. Tjek at arket er publiceret som CSV og at adressen er korrekt.";

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;background:#f9fafb;color:#111827}\
header{padding:1rem 1.5rem;background:#fff;border-bottom:1px solid #e5e7eb}\
form.controls{display:flex;flex-wrap:wrap;gap:.5rem;margin-top:.5rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1rem;padding:1.5rem}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;overflow:hidden}\
.thumb{width:100%;aspect-ratio:4/3;object-fit:cover;background:#e5e7eb}\
.body{padding:.75rem}.title{font-size:1.05rem;margin:0 0 .25rem}\
.cat,.stock{color:#6b7280;font-size:.85rem;margin:.25rem 0}\
.before{color:#9ca3af;margin-right:.25rem}.now{font-weight:600}\
.hidden{display:none}.count{color:#6b7280;font-size:.85rem;margin:.5rem 0 0}";

/// Everything needed to render the complete storefront document.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub title: &'a str,
    /// Current control values, echoed back into the form.
    pub query: &'a ProductQuery,
    /// Categories offered by the category control.
    pub categories: &'a [String],
    /// Card markup from [`super::HtmlGridRenderer`].
    pub grid_html: &'a str,
    pub result_count: usize,
}

/// Renders the storefront document: controls, result count and card grid.
///
/// The controls are a plain `GET` form; changing a select submits it so the
/// grid is re-filtered against the loaded catalog.
#[must_use]
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let mut out = String::with_capacity(ctx.grid_html.len() + 4096);
    write_head(&mut out, ctx.title);

    let search = ctx.query.q.as_deref().unwrap_or("");
    let _ = write!(
        out,
        concat!(
            "<form class=\"controls\" method=\"get\" action=\"\">",
            "<input type=\"search\" id=\"search\" name=\"q\" placeholder=\"Søg efter produkter\" value=\"{search}\">",
        ),
        search = html_escape::encode_double_quoted_attribute(search),
    );

    out.push_str("<select id=\"category\" name=\"category\" onchange=\"this.form.submit()\">");
    for option in category_options(ctx.categories, ctx.query.selected_category()) {
        write_option(&mut out, &option.value, &option.label, option.selected);
    }
    out.push_str("</select>");

    out.push_str("<select id=\"sort\" name=\"sort\" onchange=\"this.form.submit()\">");
    for order in SortOrder::ALL {
        write_option(&mut out, order.as_str(), order.label(), order == ctx.query.sort);
    }
    out.push_str("</select>");

    out.push_str("<button type=\"submit\">Søg</button></form>");
    let _ = write!(
        out,
        "<p class=\"count\">{} {}</p></header>\n",
        ctx.result_count,
        if ctx.result_count == 1 { "produkt" } else { "produkter" },
    );

    out.push_str("<main id=\"grid\" class=\"grid\">\n");
    out.push_str(ctx.grid_html);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// Renders the storefront document with [`LOAD_ERROR_MESSAGE`] in place of
/// the grid.
#[must_use]
pub fn render_error_page(title: &str) -> String {
    let mut out = String::with_capacity(2048);
    write_head(&mut out, title);
    out.push_str("</header>\n<main id=\"grid\" class=\"grid\">\n<p class=\"error\">");
    out.push_str(&html_escape::encode_text(LOAD_ERROR_MESSAGE));
    out.push_str("</p>\n</main>\n</body>\n</html>\n");
    out
}

fn write_head(out: &mut String, title: &str) {
    let title = html_escape::encode_text(title);
    let _ = write!(
        out,
        concat!(
            "<!DOCTYPE html>\n<html lang=\"da\">\n<head>\n<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n",
            "<header><h1>{title}</h1>",
        ),
        title = title,
        style = STYLE,
    );
}

fn write_option(out: &mut String, value: &str, label: &str, selected: bool) {
    let _ = write!(
        out,
        "<option value=\"{}\"{}>{}</option>",
        html_escape::encode_double_quoted_attribute(value),
        if selected { " selected" } else { "" },
        html_escape::encode_text(label),
    );
}
