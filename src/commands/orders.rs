//! Kitchen order command handlers.
//!
//! The kitchen file is a snapshot of the orders still being worked on.
//! Status changes rewrite the whole file with only the active orders, so
//! an order marked Ready, Served, Completed or Cancelled leaves the file.

use super::Context;
use crate::error::{EatsError, Result};
use crate::kitchen::{active_snapshot, format_item_list, KitchenOrder, OrderStatus};
use crate::output::{print_info, print_orders, print_success, print_warning, GRAY, RESET};
use crate::record::FIELD_SEPARATOR;
use crate::store::RecordStore;

/// Parse an item argument of the form `<name> x<quantity>`.
///
/// The quantity suffix is optional and defaults to 1.
pub fn parse_item(input: &str) -> Result<(String, u32)> {
    let input = input.trim();
    if input.contains(FIELD_SEPARATOR) || input.contains(',') {
        return Err(EatsError::Parse(format!(
            "item '{}' must not contain '|' or ','",
            input
        )));
    }
    if input.chars().any(char::is_control) {
        return Err(EatsError::Parse(format!(
            "item {:?} must not contain control characters",
            input
        )));
    }

    let (name, quantity) = match input.rsplit_once(" x") {
        Some((name, qty)) if !qty.is_empty() && qty.chars().all(|c| c.is_ascii_digit()) => {
            let qty: u32 = qty
                .parse()
                .map_err(|_| EatsError::Parse(format!("quantity too large in '{}'", input)))?;
            (name.trim(), qty)
        }
        _ => (input, 1),
    };

    if name.is_empty() {
        return Err(EatsError::Parse(format!("item '{}' has no name", input)));
    }
    if quantity == 0 {
        return Err(EatsError::Parse(format!(
            "item '{}' has a zero quantity",
            input
        )));
    }
    Ok((name.to_string(), quantity))
}

/// Append a new order with the next free id and return it.
///
/// # Errors
///
/// Returns [`EatsError::InvalidStatus`] for a status the kitchen file
/// does not hold (anything but Pending or In Progress), and
/// [`EatsError::Parse`] for a malformed item. Nothing is written then.
pub fn add_order(
    store: &RecordStore<KitchenOrder>,
    table: u32,
    items: &[String],
    status: OrderStatus,
) -> Result<KitchenOrder> {
    if !status.is_active() {
        return Err(EatsError::InvalidStatus(format!(
            "{} (new orders must be Pending or In Progress)",
            status
        )));
    }

    let parsed = items
        .iter()
        .map(|item| parse_item(item))
        .collect::<Result<Vec<_>>>()?;

    let order = KitchenOrder::new(store.next_id()?, table, status, format_item_list(&parsed));
    store.append(order.clone())?;
    Ok(order)
}

/// Set an order's status, then rewrite the file as the active snapshot.
///
/// Returns the updated order; it is no longer in the file when the new
/// status is not active.
pub fn update_status(
    store: &RecordStore<KitchenOrder>,
    id: u32,
    status: OrderStatus,
) -> Result<KitchenOrder> {
    let report = store.read_all_with_report()?;
    if !report.skipped.is_empty() {
        let lines: Vec<String> = report
            .skipped
            .iter()
            .map(|s| s.line_number.to_string())
            .collect();
        print_warning(&format!(
            "Dropping {} unreadable line{} ({}) from {}",
            report.skipped.len(),
            if report.skipped.len() == 1 { "" } else { "s" },
            lines.join(", "),
            store.path().display()
        ));
    }

    let mut orders = report.records;
    let order = orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(EatsError::NotFound(id))?;
    order.status = status;
    let updated = order.clone();

    store.write_all(&active_snapshot(&orders))?;
    Ok(updated)
}

/// Print the orders in the kitchen file.
pub fn list_command(ctx: &Context, json: bool) -> Result<()> {
    let store = ctx.open_store()?;
    let orders = store.read_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
    } else {
        print_orders(&orders)?;
    }
    Ok(())
}

/// Add an order from command-line arguments.
pub fn add_command(ctx: &Context, table: u32, items: &[String], status: &str) -> Result<()> {
    let status = OrderStatus::parse_known(status)?;
    let store = ctx.open_store()?;
    let order = add_order(&store, table, items, status)?;

    print_success(&format!(
        "Order {} added for table {}: {}",
        order.id, order.table_number, order.item_list
    ));
    Ok(())
}

/// Change the status of an order.
pub fn status_command(ctx: &Context, id: u32, status: &str) -> Result<()> {
    let status = OrderStatus::parse_known(status)?;
    let store = ctx.open_store()?;
    let order = update_status(&store, id, status)?;

    print_success(&format!("Order {} updated to {}.", order.id, order.status));
    if !order.is_active() {
        print_info(&format!(
            "Order {} is no longer active and was removed from {}.",
            order.id,
            store.path().display()
        ));
    }
    Ok(())
}

/// Print the id the next added order will receive.
pub fn next_id_command(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    println!("{}", store.next_id()?);
    Ok(())
}

/// Write an empty snapshot.
pub fn clear_command(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let removed = store.read_all()?.len();
    store.write_all(&[])?;

    println!(
        "Cleared {} order{} {GRAY}({}){RESET}",
        removed,
        if removed == 1 { "" } else { "s" },
        store.path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RecordStore<KitchenOrder> {
        RecordStore::open(dir.path().join("kitchen_orders.txt")).unwrap()
    }

    #[test]
    fn test_parse_item_with_quantity() {
        assert_eq!(
            parse_item("Pad Thai x2").unwrap(),
            ("Pad Thai".to_string(), 2)
        );
    }

    #[test]
    fn test_parse_item_defaults_quantity() {
        assert_eq!(
            parse_item("Thai Iced Tea").unwrap(),
            ("Thai Iced Tea".to_string(), 1)
        );
        // A trailing word starting with x is part of the name.
        assert_eq!(
            parse_item("Chicken xacuti").unwrap(),
            ("Chicken xacuti".to_string(), 1)
        );
    }

    #[test]
    fn test_parse_item_rejects_bad_input() {
        assert!(parse_item("Pad|Thai").is_err());
        assert!(parse_item("Rolls, Dumplings").is_err());
        assert!(parse_item("Dumplings x0").is_err());
        assert!(parse_item("  ").is_err());
        assert!(parse_item("Pad\nThai").is_err());
        assert!(parse_item("Pad Thai\r x2").is_err());
        assert!(parse_item("Tom\tYum").is_err());
    }

    #[test]
    fn test_add_order_assigns_next_id() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let first = add_order(&store, 4, &["Pad Thai x2".into()], OrderStatus::Pending).unwrap();
        let second = add_order(
            &store,
            7,
            &["Dumplings".into(), "Green Curry x3".into()],
            OrderStatus::Pending,
        )
        .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.item_list, "Dumplings x1, Green Curry x3");
        assert_eq!(store.read_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_add_order_with_bad_item_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(add_order(&store, 1, &["ok".into(), "bad|item".into()], OrderStatus::Pending).is_err());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_add_order_rejects_finished_status() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        add_order(&store, 1, &["Pad Thai".into()], OrderStatus::Pending).unwrap();

        for status in [OrderStatus::Ready, OrderStatus::Served, OrderStatus::Cancelled] {
            let err = add_order(&store, 2, &["Dumplings".into()], status).unwrap_err();
            assert!(matches!(err, EatsError::InvalidStatus(_)));
        }

        let orders = store.read_all().unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders.iter().all(KitchenOrder::is_active));
    }

    #[test]
    fn test_add_order_accepts_in_progress() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let order = add_order(&store, 3, &["Green Curry x2".into()], OrderStatus::InProgress).unwrap();
        assert_eq!(store.read_all().unwrap(), vec![order]);
    }

    #[test]
    fn test_update_status_keeps_active_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        add_order(&store, 2, &["Pad Thai".into()], OrderStatus::Pending).unwrap();

        let updated = update_status(&store, 1, OrderStatus::InProgress).unwrap();

        assert_eq!(updated.status, OrderStatus::InProgress);
        assert_eq!(store.read_all().unwrap(), vec![updated]);
    }

    #[test]
    fn test_update_status_drops_finished_orders_from_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .write_all(&[
                KitchenOrder::new(1, 2, OrderStatus::Pending, "Pad Thai x1".into()),
                KitchenOrder::new(2, 3, OrderStatus::InProgress, "Dumplings x2".into()),
                KitchenOrder::new(3, 5, OrderStatus::Ready, "Mango Sticky Rice x1".into()),
            ])
            .unwrap();

        update_status(&store, 2, OrderStatus::Ready).unwrap();

        let ids: Vec<u32> = store.read_all().unwrap().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_update_status_rewrite_drops_unreadable_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "1|2|Pending|Pad Thai x1\nnot an order\n2|4|Pending|Dumplings x1\n",
        )
        .unwrap();

        update_status(&store, 2, OrderStatus::InProgress).unwrap();

        let report = store.read_all_with_report().unwrap();
        assert!(report.skipped.is_empty());
        let ids: Vec<u32> = report.records.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_update_status_unknown_id() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = update_status(&store, 42, OrderStatus::Ready).unwrap_err();
        assert!(matches!(err, EatsError::NotFound(42)));
    }
}
