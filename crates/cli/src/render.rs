//! Plain-text rendering of the session panels.
//!
//! Every function writes to an `io::Write` so the shell can target stdout
//! and tests can target a buffer.

use std::io::{self, Write};

use gourmet_core::{Category, CategoryFilter, Price};
use gourmet_storefront::calendar::Calendar;
use gourmet_storefront::inbox::Inbox;
use gourmet_storefront::orders::OrderLedger;
use gourmet_storefront::{Notifier, Product, Session, Settings, Toast};

const SHOP_NAME: &str = "Gourmet Delicatessen";

/// Render the panel for the session's current view.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn view<N: Notifier>(out: &mut impl Write, session: &Session<N>) -> io::Result<()> {
    use gourmet_core::View;

    match session.view() {
        View::Products => products(out, session),
        View::History => history(out, session.orders()),
        View::Calendar => calendar(out, session.calendar()),
        View::Messages => messages(out, session.inbox()),
        View::Settings => settings(out, session.settings()),
    }
}

/// Shop banner and the unread-message badge.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn header<N: Notifier>(out: &mut impl Write, session: &Session<N>) -> io::Result<()> {
    writeln!(out, "== {SHOP_NAME} ==")?;
    let unread = session.inbox().unread_count();
    if unread > 0 {
        writeln!(out, "[{unread} new message(s)]")?;
    }
    Ok(())
}

/// Category bar, fulfillment method and the visible products.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn products<N: Notifier>(out: &mut impl Write, session: &Session<N>) -> io::Result<()> {
    let mut bar = vec![tab("All", session.category() == CategoryFilter::All)];
    bar.extend(Category::ALL.iter().map(|category| {
        tab(
            category.label(),
            session.category() == CategoryFilter::Only(*category),
        )
    }));
    writeln!(out, "{}", bar.join(" "))?;

    if !session.query().is_empty() {
        writeln!(out, "Search: \"{}\"", session.query())?;
    }
    writeln!(out, "Select products ({})", session.fulfillment())?;
    product_list(out, &session.visible_products())
}

fn tab(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

/// One row per product, followed by its description.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn product_list(out: &mut impl Write, products: &[&Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "  (no products match)");
    }
    for product in products {
        writeln!(
            out,
            "  #{:<3} {:<28} {:>10}  {:>3} available  {}",
            product.id,
            product.name,
            product.price.to_string(),
            product.available,
            product.category
        )?;
        writeln!(out, "        {}", product.description)?;
    }
    Ok(())
}

/// Detail box for the product open in the dialog.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn product_dialog(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(out, "+-- {} --", product.name)?;
    writeln!(out, "| {}", product.description)?;
    writeln!(out, "| {}", product.price)?;
    writeln!(out, "| {} units available", product.available)?;
    writeln!(out, "+-- `confirm` to add to your order, `close` to dismiss")
}

/// Order summary: lines, subtotal, VAT and total.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn cart<N: Notifier>(out: &mut impl Write, session: &Session<N>) -> io::Result<()> {
    writeln!(out, "Current order ({})", session.fulfillment())?;
    let cart = session.cart();
    if cart.is_empty() {
        writeln!(out, "  (empty)")?;
    }
    for line in cart.lines() {
        writeln!(
            out,
            "  #{:<3} {:<28} {:>10} x{:<3} {:>10}",
            line.id(),
            line.product.name,
            line.product.price.to_string(),
            line.quantity,
            line.line_total().to_string()
        )?;
    }
    let totals = session.totals();
    summary_row(out, "Subtotal", &totals.subtotal)?;
    summary_row(out, "VAT (21%)", &totals.tax)?;
    summary_row(out, "Total", &totals.total)
}

fn summary_row(out: &mut impl Write, label: &str, price: &Price) -> io::Result<()> {
    writeln!(out, "  {label:<52} {:>10}", price.to_string())
}

/// Past orders, oldest first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn history(out: &mut impl Write, orders: &OrderLedger) -> io::Result<()> {
    writeln!(out, "Order history")?;
    if orders.is_empty() {
        return writeln!(out, "  (no orders yet)");
    }
    for order in orders.orders() {
        writeln!(
            out,
            "  Order #{}  {}  {}",
            order.id,
            order.placed_at.format("%Y-%m-%d"),
            order.fulfillment
        )?;
        for line in &order.items {
            writeln!(out, "    - {} x{}", line.product.name, line.quantity)?;
        }
        writeln!(
            out,
            "    Total: {}{}",
            order.total.currency_code.symbol(),
            order.total.formatted_amount()
        )?;
    }
    Ok(())
}

/// Scheduled events in insertion order.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn calendar(out: &mut impl Write, calendar: &Calendar) -> io::Result<()> {
    writeln!(out, "Upcoming events")?;
    if calendar.is_empty() {
        return writeln!(out, "  (no events; pick a date with `date YYYY-MM-DD`)");
    }
    for event in calendar.events() {
        writeln!(out, "  {}  {}", event.date, event.title)?;
        writeln!(out, "              {}", event.description)?;
    }
    Ok(())
}

/// Inbox contents with a badge on unread messages.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn messages(out: &mut impl Write, inbox: &Inbox) -> io::Result<()> {
    writeln!(out, "Messages")?;
    if inbox.is_empty() {
        return writeln!(out, "  (no messages; write one with `message <text>`)");
    }
    for message in inbox.messages() {
        let badge = if message.read { "" } else { " [new]" };
        writeln!(
            out,
            "  {}{badge}",
            message.sent_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "    {}", message.content)?;
    }
    Ok(())
}

/// Current preference values.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn settings(out: &mut impl Write, settings: &Settings) -> io::Result<()> {
    writeln!(out, "Settings")?;
    writeln!(out, "  Notifications:      {}", on_off(settings.notifications_enabled))?;
    writeln!(out, "  Preferred language: {}", settings.language)?;
    writeln!(out, "  Dark theme:         {}", on_off(settings.dark_theme))
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// A single notification line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn toast(out: &mut impl Write, toast: &Toast) -> io::Result<()> {
    writeln!(out, "* {toast}")
}
