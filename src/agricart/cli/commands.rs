use super::render::{
    format_price, print_messages, render_entries, render_filters, render_product,
    render_product_list, render_quote, render_report,
};
use super::setup::{Cli, Commands};
use agricart::api::{CmdMessage, MessageLevel, StorefrontApi};
use agricart::attributes::{ActiveFilters, CatalogQuery};
use agricart::config::StorefrontConfig;
use agricart::error::{CatalogError, Result};
use agricart::i18n::Language;
use agricart::init::initialize;
use agricart::orders::{OrderTotals, ShippingMethod, FREE_SHIPPING_ABOVE};
use agricart::routes::Route;
use agricart::store::memory::InMemoryCatalog;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: StorefrontApi<InMemoryCatalog>,
}

/// Selections passed to `list`, still in their `KEY=VALUE` shell form.
struct ListArgs {
    category: Option<String>,
    search: Option<String>,
    filters: Vec<String>,
    mins: Vec<String>,
    maxs: Vec<String>,
    price_min: Option<f64>,
    price_max: Option<f64>,
    sort: Option<String>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            category,
            search,
            filters,
            mins,
            maxs,
            price_min,
            price_max,
            sort,
            json,
        }) => handle_list(
            &ctx,
            ListArgs {
                category,
                search,
                filters,
                mins,
                maxs,
                price_min,
                price_max,
                sort,
                json,
            },
        ),
        Some(Commands::Search { term }) => handle_search(&ctx, &term),
        Some(Commands::Filters { category }) => handle_filters(&ctx, category.as_deref()),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Related { id, limit }) => handle_related(&ctx, &id, limit),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Featured) => handle_featured(&ctx),
        Some(Commands::Quote { ids, express }) => handle_quote(&mut ctx, &ids, express),
        Some(Commands::Report) => handle_report(&ctx),
        Some(Commands::Route { path }) => handle_route(&ctx, &path),
        Some(Commands::Translate { key }) => handle_translate(&ctx, &key),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_featured(&ctx),
    }
}

/// Diagnostics go to stderr so they never mix with listings or JSON on stdout.
fn init_logging(verbose: bool) {
    let default = if verbose { "agricart=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("AGRICART_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = StorefrontConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable configuration");
        StorefrontConfig::default()
    });

    let mut ctx = initialize(config, cli.catalog.as_deref())?;
    if let Some(lang) = &cli.lang {
        ctx.api.set_language(lang.parse::<Language>()?);
    }

    Ok(AppContext { api: ctx.api })
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let mut filters = ActiveFilters::new();
    for raw in &args.filters {
        let (key, values) = split_assignment(raw)?;
        filters.set_select(
            key,
            values.split(',').map(str::trim).filter(|v| !v.is_empty()),
        );
    }
    for raw in &args.mins {
        let (key, value) = split_assignment(raw)?;
        filters.set_min(key, parse_number(raw, value)?);
    }
    for raw in &args.maxs {
        let (key, value) = split_assignment(raw)?;
        filters.set_max(key, parse_number(raw, value)?);
    }

    let query = CatalogQuery::new()
        .with_category(args.category.unwrap_or_default())
        .with_search(args.search.unwrap_or_default())
        .with_filters(filters)
        .with_price_range(args.price_min, args.price_max);

    let result = ctx.api.list_products(&query, args.sort.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.listed_products)?);
        return Ok(());
    }

    print!("{}", render_product_list(&result.listed_products));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_products(term)?;
    print!("{}", render_product_list(&result.listed_products));
    print_messages(&result.messages);
    Ok(())
}

fn handle_filters(ctx: &AppContext, category: Option<&str>) -> Result<()> {
    let result = ctx.api.category_filters(category)?;
    print!("{}", render_filters(&result.filters));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_product(&id.into())?;
    for product in &result.listed_products {
        print!("{}", render_product(product));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_related(ctx: &AppContext, id: &str, limit: Option<usize>) -> Result<()> {
    let result = ctx.api.related_products(&id.into(), limit)?;
    print!("{}", render_product_list(&result.listed_products));
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    for category in &result.categories {
        println!("{}", category);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_featured(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.featured()?;
    print!("{}", render_product_list(&result.listed_products));
    print_messages(&result.messages);
    Ok(())
}

fn handle_quote(ctx: &mut AppContext, ids: &[String], express: bool) -> Result<()> {
    let mut messages = Vec::new();
    for id in ids {
        let result = ctx.api.add_to_cart(&id.as_str().into())?;
        messages.extend(
            result
                .messages
                .into_iter()
                .filter(|m| m.level != MessageLevel::Success),
        );
    }

    let cart = ctx.api.cart()?.cart.unwrap_or_default();
    if cart.is_empty() {
        print_messages(&messages);
        return Err(CatalogError::EmptyCart);
    }

    let method = if express {
        ShippingMethod::Express
    } else {
        ShippingMethod::Standard
    };
    let totals = OrderTotals::compute(cart.total_price(), method);
    print!("{}", render_quote(&cart, &totals));

    if method == ShippingMethod::Standard && totals.shipping == 0.0 {
        messages.push(CmdMessage::info(format!(
            "Free standard shipping on orders above {}",
            format_price(FREE_SHIPPING_ABOVE)
        )));
    }
    print_messages(&messages);
    Ok(())
}

fn handle_report(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.report()?;
    if let Some(report) = &result.report {
        print!("{}", render_report(report));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_route(ctx: &AppContext, path: &str) -> Result<()> {
    match ctx.api.route(path) {
        Route::NotFound(path) => print_messages(&[CmdMessage::warning(format!(
            "No page at {}",
            path
        ))]),
        route => println!("{}", route),
    }
    Ok(())
}

fn handle_translate(ctx: &AppContext, key: &str) -> Result<()> {
    println!("{}", ctx.api.translate(key));
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config()?;
    if let Some(config) = &result.config {
        print!("{}", render_entries(&config.entries()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn split_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(CatalogError::Api(format!(
            "Expected KEY=VALUE, got: {}",
            raw
        ))),
    }
}

fn parse_number(raw: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CatalogError::Api(format!("Expected a number in: {}", raw)))
}
