//! Kitchen orders as persisted for the live order monitor.
//!
//! The kitchen file holds one [`KitchenOrder`] per line in the layout
//! `id|tableNumber|status|itemList`. The file is always a full snapshot
//! of the orders still being worked on: whenever it is written, only
//! `Pending` and `In Progress` orders are kept, so orders that move on
//! to `Ready`, `Served`, `Completed` or `Cancelled` drop out of it.

use crate::error::{EatsError, Result};
use crate::record::{parse_u32, split_fields, Identified, Record};
use serde::{Serialize, Serializer};
use std::fmt;

/// Default file name used by the kitchen screens.
pub const DEFAULT_ORDERS_FILE: &str = "kitchen_orders.txt";

/// Separator between item summaries inside the item list field.
pub const ITEM_SEPARATOR: &str = ", ";

const FIELD_COUNT: usize = 4;

/// Lifecycle status of an order.
///
/// The set is open-ended on disk: a status string that is not one of the
/// known values is kept verbatim as [`OrderStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Ready,
    Served,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Known statuses, in lifecycle order.
    pub const KNOWN: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Canonical display string, as written to the kitchen file.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Ready => "Ready",
            OrderStatus::Served => "Served",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(s) => s,
        }
    }

    /// Interpret a status field read from disk. Never fails.
    pub fn from_field(field: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|s| s.as_str() == field)
            .cloned()
            .unwrap_or_else(|| OrderStatus::Other(field.to_string()))
    }

    /// Parse user input into a known status.
    ///
    /// Matching ignores case and accepts `in-progress` / `in_progress` /
    /// `inprogress` for [`OrderStatus::InProgress`].
    pub fn parse_known(input: &str) -> Result<Self> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "inprogress" => Ok(OrderStatus::InProgress),
            "ready" => Ok(OrderStatus::Ready),
            "served" => Ok(OrderStatus::Served),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(EatsError::InvalidStatus(input.to_string())),
        }
    }

    /// Whether the kitchen still has to work on an order in this status.
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::InProgress)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One order line in the kitchen file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitchenOrder {
    pub id: u32,
    pub table_number: u32,
    pub status: OrderStatus,
    /// Item summaries joined with `", "`, e.g. `Pad Thai x2, Thai Iced Tea x1`.
    pub item_list: String,
}

impl KitchenOrder {
    pub fn new(id: u32, table_number: u32, status: OrderStatus, item_list: String) -> Self {
        Self {
            id,
            table_number,
            status,
            item_list,
        }
    }

    /// Number of item summaries in the item list.
    pub fn item_count(&self) -> usize {
        if self.item_list.trim().is_empty() {
            0
        } else {
            self.item_list.split(ITEM_SEPARATOR).count()
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl Record for KitchenOrder {
    fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.id, self.table_number, self.status, self.item_list
        )
    }

    fn from_line(line: &str) -> Result<Self> {
        let fields = split_fields(line, FIELD_COUNT)?;
        Ok(Self {
            id: parse_u32(fields[0], "id")?,
            table_number: parse_u32(fields[1], "tableNumber")?,
            status: OrderStatus::from_field(fields[2]),
            item_list: fields[3].to_string(),
        })
    }
}

impl Identified for KitchenOrder {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Build an item list from `(name, quantity)` pairs.
pub fn format_item_list<S: AsRef<str>>(items: &[(S, u32)]) -> String {
    items
        .iter()
        .map(|(name, qty)| format!("{} x{}", name.as_ref(), qty))
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR)
}

/// Keep only the orders the kitchen is still working on, preserving order.
pub fn active_snapshot<'a, I>(orders: I) -> Vec<KitchenOrder>
where
    I: IntoIterator<Item = &'a KitchenOrder>,
{
    orders
        .into_iter()
        .filter(|o| o.is_active())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u32, status: OrderStatus) -> KitchenOrder {
        KitchenOrder::new(id, 3, status, "Pad Thai x2, Thai Iced Tea x1".to_string())
    }

    #[test]
    fn test_to_line_layout() {
        let o = order(7, OrderStatus::InProgress);
        assert_eq!(o.to_line(), "7|3|In Progress|Pad Thai x2, Thai Iced Tea x1");
    }

    #[test]
    fn test_round_trip_known_statuses() {
        for status in OrderStatus::KNOWN {
            let o = order(1, status);
            assert_eq!(KitchenOrder::from_line(&o.to_line()).unwrap(), o);
        }
    }

    #[test]
    fn test_round_trip_other_status_and_empty_items() {
        let o = KitchenOrder::new(12, 9, OrderStatus::Other("On Hold".into()), String::new());
        let parsed = KitchenOrder::from_line(&o.to_line()).unwrap();
        assert_eq!(parsed, o);
        assert_eq!(parsed.item_count(), 0);
    }

    #[test]
    fn test_from_line_rejects_short_line() {
        assert!(KitchenOrder::from_line("4|2|Pending").is_err());
    }

    #[test]
    fn test_from_line_rejects_non_numeric_table() {
        assert!(KitchenOrder::from_line("4|window|Pending|Dumplings x1").is_err());
    }

    #[test]
    fn test_item_list_comma_does_not_split_fields() {
        let o = KitchenOrder::from_line("2|5|Pending|Dumplings x1, Green Curry x3").unwrap();
        assert_eq!(o.item_count(), 2);
        assert_eq!(o.table_number, 5);
    }

    #[test]
    fn test_format_item_list() {
        let list = format_item_list(&[("Pad Thai", 2), ("Mango Sticky Rice", 1)]);
        assert_eq!(list, "Pad Thai x2, Mango Sticky Rice x1");
        assert_eq!(format_item_list::<&str>(&[]), "");
    }

    #[test]
    fn test_parse_known_is_lenient() {
        assert_eq!(OrderStatus::parse_known("ready").unwrap(), OrderStatus::Ready);
        assert_eq!(
            OrderStatus::parse_known("in-progress").unwrap(),
            OrderStatus::InProgress
        );
        assert_eq!(
            OrderStatus::parse_known("In Progress").unwrap(),
            OrderStatus::InProgress
        );
        assert!(matches!(
            OrderStatus::parse_known("burnt"),
            Err(EatsError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_from_field_is_case_sensitive() {
        assert_eq!(
            OrderStatus::from_field("pending"),
            OrderStatus::Other("pending".into())
        );
    }

    #[test]
    fn test_active_snapshot_drops_finished_orders() {
        let orders = vec![
            order(1, OrderStatus::Pending),
            order(2, OrderStatus::Ready),
            order(3, OrderStatus::InProgress),
            order(4, OrderStatus::Served),
            order(5, OrderStatus::Cancelled),
        ];
        let ids: Vec<u32> = active_snapshot(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_status_serializes_as_display_string() {
        let json = serde_json::to_string(&order(1, OrderStatus::InProgress)).unwrap();
        assert!(json.contains("\"status\":\"In Progress\""));
        assert!(json.contains("\"table_number\":3"));
    }
}
