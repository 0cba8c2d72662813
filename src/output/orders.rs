//! Kitchen order tables.

use crate::kitchen::{KitchenOrder, OrderStatus};
use std::io::{self, Write};

use super::colors::*;

const RULE_WIDTH: usize = 72;

/// Color used for a status cell.
pub fn status_color(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => YELLOW,
        OrderStatus::InProgress => CYAN,
        OrderStatus::Ready => GREEN,
        OrderStatus::Cancelled => RED,
        _ => GRAY,
    }
}

/// Write orders as a table: id, table, status and items.
pub fn write_orders<W: Write + ?Sized>(out: &mut W, orders: &[KitchenOrder]) -> io::Result<()> {
    if orders.is_empty() {
        writeln!(out, "{GRAY}No active orders.{RESET}")?;
        return Ok(());
    }

    writeln!(
        out,
        "{BOLD}{:<6}{:<7}{:<14}{}{RESET}",
        "ID", "Table", "Status", "Items"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for order in orders {
        // Pad before coloring so escape codes don't skew the columns.
        let status = format!("{:<14}", order.status.as_str());
        let items = if order.item_list.is_empty() {
            format!("{DIM}(no items){RESET}")
        } else {
            order.item_list.clone()
        };
        writeln!(
            out,
            "{:<6}{:<7}{}{}{RESET}{}",
            order.id,
            order.table_number,
            status_color(&order.status),
            status,
            items
        )?;
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "Total: {} order{}",
        orders.len(),
        if orders.len() == 1 { "" } else { "s" }
    )?;
    Ok(())
}

/// Print orders to stdout.
pub fn print_orders(orders: &[KitchenOrder]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_orders(&mut lock, orders)
}
