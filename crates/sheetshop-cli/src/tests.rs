use super::*;
use sheetshop_core::{AppConfig, Environment};

fn test_config() -> AppConfig {
    AppConfig {
        sheet_csv_url: "https://example.com/pub?output=csv".to_string(),
        image_base: "billeder".to_string(),
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "info".to_string(),
        request_timeout_secs: 5,
        user_agent: "sheetshop-test/0.1".to_string(),
        store_title: "Testbutik".to_string(),
        refresh_cron: None,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["sheetshop-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_render_with_output_and_query() {
    let cli = Cli::try_parse_from([
        "sheetshop-cli",
        "render",
        "--output",
        "index.html",
        "--q",
        "kaffe",
        "--sort",
        "pris-desc",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Render { output, query }) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(output, Some(PathBuf::from("index.html")));
    let query = ProductQuery::from(query);
    assert_eq!(query.q.as_deref(), Some("kaffe"));
    assert_eq!(query.sort, SortOrder::PriceDesc);
    assert!(query.category.is_none());
}

#[test]
fn parses_products_with_category() {
    let cli = Cli::try_parse_from(["sheetshop-cli", "products", "--category", "Te"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Products {
            query: QueryArgs { category: Some(ref c), .. }
        }) if c == "Te"
    ));
}

#[test]
fn parses_categories_command() {
    let cli = Cli::try_parse_from(["sheetshop-cli", "categories"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Categories)));
}

#[test]
fn unknown_sort_flag_falls_back_to_sheet_order() {
    let query = ProductQuery::from(QueryArgs {
        sort: Some("nyeste".to_string()),
        ..QueryArgs::default()
    });
    assert_eq!(query.sort, SortOrder::None);
}

#[test]
fn render_storefront_uses_config_and_query() {
    let catalog = sheetshop_catalog::build_catalog(
        "ID,Navn,Kategori,Pris i alt,Antal\n1,Kaffe,Kaffe,50,1\n2,Te,Te,10,1\n3,Kakao,Kakao,30,0\n",
    )
    .expect("catalog");
    let query = ProductQuery {
        sort: SortOrder::PriceDesc,
        ..ProductQuery::default()
    };

    let html = commands::render_storefront(&catalog, &test_config(), &query);

    assert!(html.contains("<title>Testbutik</title>"));
    assert!(html.contains(r#"src="billeder/1.jpg""#));
    let first = html.find(r#"data-id="1""#).expect("card 1");
    let second = html.find(r#"data-id="2""#).expect("card 2");
    assert!(first < second);
    assert!(!html.contains(r#"data-id="3""#));
    assert!(html.contains("2 produkter</p>"));
}

#[test]
fn render_storefront_resets_sold_out_category_to_all() {
    let catalog = sheetshop_catalog::build_catalog(
        "ID,Navn,Kategori,Pris i alt,Antal\n1,Kaffe,Kaffe,50,1\n3,Kakao,Kakao,30,0\n",
    )
    .expect("catalog");
    let query = ProductQuery {
        category: Some("Kakao".to_string()),
        ..ProductQuery::default()
    };

    let html = commands::render_storefront(&catalog, &test_config(), &query);

    assert!(html.contains(r#"<option value="" selected>Alle kategorier</option>"#));
    assert!(html.contains(r#"data-id="1""#));
    assert!(html.contains("1 produkt</p>"));
}
