//! # Rendering
//!
//! Every `render_*` function returns the finished text instead of printing it, so
//! the layout can be tested without capturing stdout. Column math is done on display
//! width (`unicode-width`), never on byte or char counts: product names carry
//! accents and the occasional wide glyph.

use agricart::api::{CatalogReport, CmdMessage, MessageLevel};
use agricart::attributes::{AttributeKind, CategoryFilter};
use agricart::cart::Cart;
use agricart::model::Product;
use agricart::orders::OrderTotals;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 22;
const BRAND_WIDTH: usize = 16;
const PRICE_WIDTH: usize = 14;
const RATING_WIDTH: usize = 8;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// One product per line: id, name, brand, price, rating.
///
/// Discounted products show their effective price; products out of stock are
/// marked after the name.
pub fn render_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let name_width =
        LINE_WIDTH.saturating_sub(ID_WIDTH + BRAND_WIDTH + PRICE_WIDTH + RATING_WIDTH);
    let mut output = String::new();

    for product in products {
        let mut name = product.name.clone();
        if !product.in_stock() {
            name.push_str(" (out of stock)");
        }

        let id = pad_to_width(&truncate_to_width(product.id.as_str(), ID_WIDTH - 1), ID_WIDTH);
        let name = pad_to_width(&truncate_to_width(&name, name_width - 1), name_width);
        let brand = pad_to_width(&truncate_to_width(&product.brand, BRAND_WIDTH - 1), BRAND_WIDTH);
        let price = format!(
            "{:>width$}",
            format_price(product.effective_price()),
            width = PRICE_WIDTH
        );
        let rating = format!("{:>width$.1}", product.rating, width = RATING_WIDTH);

        let price = if product.discount.unwrap_or(0) > 0 {
            price.green()
        } else {
            price.normal()
        };
        let name = if product.in_stock() {
            name.normal()
        } else {
            name.dimmed()
        };

        output.push_str(&format!(
            "{}{}{}{}{}\n",
            id.yellow(),
            name,
            brand.dimmed(),
            price,
            rating
        ));
    }

    output
}

pub fn render_product(product: &Product) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", product.id.as_str().yellow(), product.name.bold()));
    output.push_str(&format!("{}\n", "-".repeat(32)));
    output.push_str(&format!("Brand:    {}\n", product.brand));
    if product.subcategory.is_empty() {
        output.push_str(&format!("Category: {}\n", product.category));
    } else {
        output.push_str(&format!(
            "Category: {} / {}\n",
            product.category, product.subcategory
        ));
    }

    match product.discount {
        Some(discount) if discount > 0 => output.push_str(&format!(
            "Price:    {} {} (-{}%)\n",
            format_price(product.effective_price()).green(),
            format_price(product.price).dimmed().strikethrough(),
            discount
        )),
        _ => output.push_str(&format!("Price:    {}\n", format_price(product.price))),
    }

    output.push_str(&format!("Stock:    {}\n", product.stock));
    output.push_str(&format!(
        "Rating:   {:.1} ({} reviews)\n",
        product.rating, product.reviews
    ));

    if !product.description.is_empty() {
        output.push_str(&format!("\n{}\n", product.description));
    }

    if !product.features.is_empty() {
        output.push_str("\nFeatures:\n");
        for feature in &product.features {
            output.push_str(&format!("  - {}\n", feature));
        }
    }

    if !product.specs.is_empty() {
        output.push_str("\nSpecifications:\n");
        let key_width = product.specs.keys().map(|k| k.width()).max().unwrap_or(0);
        for (key, value) in &product.specs {
            output.push_str(&format!(
                "  {}  {}\n",
                pad_to_width(key, key_width).dimmed(),
                value
            ));
        }
    }

    output
}

/// The attribute schema of each category: options for selects, bounds for ranges.
pub fn render_filters(filters: &[CategoryFilter]) -> String {
    if filters.is_empty() {
        return "No filters available.\n".to_string();
    }

    let mut output = String::new();
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", filter.category.bold()));

        for attribute in &filter.attributes {
            let detail = match &attribute.kind {
                AttributeKind::Select { options } => options.join(", "),
                AttributeKind::Range { min, max, unit } if unit.is_empty() => {
                    format!("{} - {}", min, max)
                }
                AttributeKind::Range { min, max, unit } => {
                    format!("{} - {} {}", min, max, unit)
                }
                AttributeKind::Text => "text".to_string(),
                AttributeKind::Number => "number".to_string(),
            };
            let label = format!("  {} ({})", attribute.display_name(), attribute.name);
            output.push_str(&format!(
                "{}\n      {}\n",
                label,
                truncate_to_width(&detail, LINE_WIDTH - 6).dimmed()
            ));
        }
    }
    output
}

pub fn render_quote(cart: &Cart, totals: &OrderTotals) -> String {
    let mut output = String::new();

    for item in cart.items() {
        let label = format!("{} x {}", item.quantity, item.name);
        let label = pad_to_width(&truncate_to_width(&label, 59), 60);
        output.push_str(&format!(
            "{}{:>16}\n",
            label,
            format_price(item.line_total())
        ));
    }

    output.push_str(&format!("{}\n", "-".repeat(76)));
    let lines = [
        ("Subtotal", totals.subtotal),
        ("Shipping", totals.shipping),
        ("Tax", totals.tax),
    ];
    for (label, amount) in lines {
        output.push_str(&format!("{:<60}{:>16}\n", label, format_price(amount)));
    }
    output.push_str(&format!(
        "{}{}\n",
        format!("{:<60}", "Total").bold(),
        format!("{:>16}", format_price(totals.total)).bold()
    ));
    output
}

pub fn render_report(report: &CatalogReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Products:        {}\n", report.product_count));
    output.push_str(&format!(
        "Inventory value: {}\n",
        format_price(report.inventory_value)
    ));

    output.push_str("\nBy category:\n");
    for (category, count) in &report.per_category {
        output.push_str(&format!("  {:<30}{:>5}\n", category, count));
    }

    output.push_str(&format!(
        "\nLow stock (<= {}):\n",
        report.low_stock_threshold
    ));
    if report.low_stock.is_empty() {
        output.push_str(&format!("  {}\n", "none".dimmed()));
    }
    for product in &report.low_stock {
        output.push_str(&format!(
            "  {}{:>5}\n",
            pad_to_width(&truncate_to_width(&product.name, 39), 40),
            product.stock.to_string().red()
        ));
    }
    output
}

pub fn render_entries(entries: &[(&str, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

/// `1234567.5` -> `$1,234,567.50`
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
