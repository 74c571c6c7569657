use super::*;
use sheetshop_core::SortOrder;

fn make_product(id: &str, name: &str) -> ProductRow {
    ProductRow {
        id: id.to_owned(),
        name: name.to_owned(),
        category: "Kaffe".to_owned(),
        base_price: 100.0,
        current_price: 125.0,
        normal_price: 125.0,
        is_on_offer: false,
        stock_count: 4.0,
        visible: true,
        description_html: "<p>Mørkristet</p>".to_owned(),
        short_description_html: "<p>Mørkristet</p>".to_owned(),
    }
}

fn render_one(product: &ProductRow) -> String {
    let mut renderer = HtmlGridRenderer::new("img");
    renderer.render(std::slice::from_ref(product));
    renderer.into_html()
}

// -----------------------------------------------------------------------
// HtmlGridRenderer
// -----------------------------------------------------------------------

#[test]
fn card_fills_every_slot() {
    let html = render_one(&make_product("1001", "Kaffebønner"));
    assert!(html.contains(r#"<article class="card" data-id="1001">"#));
    assert!(html.contains(r#"src="img/1001.jpg""#));
    assert!(html.contains(r#"alt="Kaffebønner""#));
    assert!(html.contains(r#"loading="lazy""#));
    assert!(html.contains(r#"<h2 class="title">Kaffebønner</h2>"#));
    assert!(html.contains(r#"<p class="cat">Kaffe</p>"#));
    assert!(html.contains("<span class=\"now\">125,00\u{a0}kr.</span>"));
    assert!(html.contains(r#"<p class="stock">På lager: 4</p>"#));
}

#[test]
fn before_price_is_hidden_without_offer() {
    let html = render_one(&make_product("1001", "Kaffebønner"));
    assert!(html.contains(r#"<s class="before hidden"></s>"#));
}

#[test]
fn before_price_shows_normal_price_on_offer() {
    let mut product = make_product("1001", "Kaffebønner");
    product.current_price = 99.95;
    product.is_on_offer = true;
    let html = render_one(&product);
    assert!(html.contains("<s class=\"before\">125,00\u{a0}kr.</s>"));
    assert!(html.contains("<span class=\"now\">99,95\u{a0}kr.</span>"));
}

#[test]
fn now_price_falls_back_to_normal_price() {
    let mut product = make_product("1001", "Kaffebønner");
    product.current_price = 0.0;
    let html = render_one(&product);
    assert!(html.contains("<span class=\"now\">125,00\u{a0}kr.</span>"));
}

#[test]
fn empty_name_uses_id_title_and_default_alt() {
    let html = render_one(&make_product("77", ""));
    assert!(html.contains(r#"<h2 class="title">#77</h2>"#));
    assert!(html.contains(r#"alt="Produktbillede""#));
}

#[test]
fn sold_out_label_when_no_stock() {
    let mut product = make_product("1001", "Kaffebønner");
    product.stock_count = 0.0;
    let html = render_one(&product);
    assert!(html.contains(r#"<p class="stock">Udsolgt</p>"#));
}

#[test]
fn fractional_stock_is_shown_as_is() {
    let mut product = make_product("1001", "Kaffebønner");
    product.stock_count = 2.5;
    let html = render_one(&product);
    assert!(html.contains(r#"<p class="stock">På lager: 2.5</p>"#));
}

#[test]
fn image_url_percent_encodes_id() {
    let renderer = HtmlGridRenderer::new("img");
    assert_eq!(renderer.image_url("a b/c"), "img/a%20b%2Fc.jpg");
    assert_eq!(renderer.image_url("SKU-1_2.x"), "img/SKU-1_2.x.jpg");
}

#[test]
fn image_url_without_base_is_relative_file() {
    let renderer = HtmlGridRenderer::new("");
    assert_eq!(renderer.image_url("1001"), "1001.jpg");
}

#[test]
fn image_falls_back_to_inline_placeholder() {
    let html = render_one(&make_product("1001", "Kaffebønner"));
    assert!(html.contains("onerror=\"this.onerror=null;this.src='data:image/svg+xml;utf8,"));
    assert!(placeholder_data_uri().starts_with("data:image/svg+xml;utf8,%3Csvg"));
}

#[test]
fn text_fields_are_escaped() {
    let mut product = make_product("1\"><x", "<b>Fed</b> & co");
    product.category = "<i>Kat</i>".to_owned();
    let html = render_one(&product);
    assert!(html.contains("&lt;b&gt;Fed&lt;/b&gt; &amp; co"));
    assert!(html.contains("&lt;i&gt;Kat&lt;/i&gt;"));
    assert!(html.contains(r#"data-id="1&quot;"#));
    assert!(!html.contains(r#"data-id="1"><x"#));
    assert!(!html.contains("<b>Fed</b>"));
}

#[test]
fn description_is_inserted_as_markup() {
    let mut product = make_product("1001", "Kaffebønner");
    product.description_html = "<p>Lang <em>tekst</em></p>".to_owned();
    let html = render_one(&product);
    assert!(html.contains(r#"<div class="desc"><p>Lang <em>tekst</em></p></div>"#));
}

#[test]
fn rendering_replaces_previous_output() {
    let mut renderer = HtmlGridRenderer::new("img");
    renderer.render(&[make_product("1", "En"), make_product("2", "To")]);
    assert_eq!(renderer.html().matches("<article").count(), 2);

    renderer.render(&[make_product("3", "Tre")]);
    assert_eq!(renderer.html().matches("<article").count(), 1);
    assert!(renderer.html().contains(r#"data-id="3""#));
    assert!(!renderer.html().contains(r#"data-id="1""#));
}

#[test]
fn empty_list_renders_nothing() {
    let mut renderer = HtmlGridRenderer::new("img");
    renderer.render(&[make_product("1", "En")]);
    renderer.render(&[]);
    assert!(renderer.html().is_empty());
}

// -----------------------------------------------------------------------
// render_filtered
// -----------------------------------------------------------------------

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<Vec<String>>,
}

impl CatalogRenderer for RecordingRenderer {
    fn render(&mut self, products: &[ProductRow]) {
        self.calls
            .push(products.iter().map(|p| p.id.clone()).collect());
    }
}

#[test]
fn render_filtered_passes_filtered_list() {
    let mut hidden = make_product("2", "Skjult");
    hidden.visible = false;
    let mut cheap = make_product("3", "Billig");
    cheap.current_price = 10.0;
    let products = vec![make_product("1", "Dyr"), hidden, cheap];

    let query = ProductQuery {
        q: None,
        category: None,
        sort: SortOrder::PriceAsc,
    };
    let mut renderer = RecordingRenderer::default();
    let count = render_filtered(&mut renderer, &products, &query);

    assert_eq!(count, 2);
    assert_eq!(renderer.calls, vec![vec!["3".to_owned(), "1".to_owned()]]);
}

#[test]
fn render_filtered_renders_empty_result() {
    let products = vec![make_product("1", "Kaffebønner")];
    let query = ProductQuery {
        q: Some("findes ikke".to_owned()),
        ..ProductQuery::default()
    };
    let mut renderer = RecordingRenderer::default();
    assert_eq!(render_filtered(&mut renderer, &products, &query), 0);
    assert_eq!(renderer.calls, vec![Vec::<String>::new()]);
}

// -----------------------------------------------------------------------
// render_page / render_error_page
// -----------------------------------------------------------------------

#[test]
fn page_echoes_controls_and_embeds_grid() {
    let categories = vec!["Kaffe".to_owned(), "Te".to_owned()];
    let query = ProductQuery {
        q: Some("\"bønner\"".to_owned()),
        category: Some("Te".to_owned()),
        sort: SortOrder::PriceDesc,
    };
    let ctx = PageContext {
        title: "Butik & Co",
        query: &query,
        categories: &categories,
        grid_html: "<article class=\"card\" data-id=\"1\"></article>",
        result_count: 1,
    };
    let html = render_page(&ctx);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Butik &amp; Co</title>"));
    assert!(html.contains(r#"id="search" name="q""#));
    assert!(html.contains(r#"value="&quot;bønner&quot;""#));
    assert!(html.contains(r#"<option value="">Alle kategorier</option>"#));
    assert!(html.contains(r#"<option value="Te" selected>Te</option>"#));
    assert!(html.contains(r#"<option value="price-desc" selected>"#));
    assert!(!html.contains(r#"<option value="" selected>Standard</option>"#));
    assert!(html.contains("<main id=\"grid\" class=\"grid\">\n<article class=\"card\" data-id=\"1\"></article></main>"));
    assert!(html.contains("1 produkt</p>"));
}

#[test]
fn page_defaults_select_sentinels() {
    let categories = vec!["Kaffe".to_owned()];
    let query = ProductQuery::default();
    let ctx = PageContext {
        title: "Butik",
        query: &query,
        categories: &categories,
        grid_html: "",
        result_count: 0,
    };
    let html = render_page(&ctx);
    assert!(html.contains(r#"<option value="" selected>Alle kategorier</option>"#));
    assert!(html.contains(r#"<option value="" selected>Standard</option>"#));
    assert!(html.contains("0 produkter</p>"));
}

#[test]
fn error_page_shows_load_message_without_grid_cards() {
    let html = render_error_page("Butik");
    assert!(html.contains("<p class=\"error\">Kunne ikke hente data."));
    assert!(!html.contains("<article"));
    assert!(LOAD_ERROR_MESSAGE.contains("CSV"));
}
