//! The day-scoped shopping list: the one fully client-owned entity. The
//! list lives in browser storage as a `{items, date}` JSON blob and is
//! discarded wholesale when the stored day key no longer matches today.
//! All transitions here are pure; the storage bridge in the frontend
//! persists after every mutation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_date_naive;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

/// Persisted payload: the items plus the `YYYY-MM-DD` day key they belong
/// to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredShoppingList {
    pub items: Vec<ShoppingItem>,
    pub date: String,
}

impl StoredShoppingList {
    pub fn empty(today_key: &str) -> Self {
        Self {
            items: Vec::new(),
            date: today_key.to_string(),
        }
    }

    /// A stored list from a different calendar day is discarded wholesale:
    /// no migration, no history.
    pub fn is_stale(&self, today_key: &str) -> bool {
        self.date != today_key
    }

    /// Append a new unchecked entry. Whitespace-only text is rejected.
    /// Returns whether anything was added.
    pub fn add(&mut self, id: String, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.items.push(ShoppingItem {
            id,
            text: text.to_string(),
            checked: false,
        });
        true
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.checked = !item.checked;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Completing a shopping run removes exactly the checked items;
    /// unchecked ones carry over into the next session of the same day.
    pub fn prune_checked(&mut self) {
        self.items.retain(|i| !i.checked);
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    pub fn unchecked_count(&self) -> usize {
        self.items.len() - self.checked_count()
    }

    /// Rendering order: still-to-buy entries first, bought ones after,
    /// each keeping insertion order.
    pub fn display_order(&self) -> Vec<ShoppingItem> {
        let mut ordered: Vec<ShoppingItem> =
            self.items.iter().filter(|i| !i.checked).cloned().collect();
        ordered.extend(self.items.iter().filter(|i| i.checked).cloned());
        ordered
    }
}

/// Name of the expense created when a shopping run is completed:
/// `"Spesa del 07/08/2026"`, with the optional note appended after a
/// dash separator.
pub fn completion_expense_name(today: NaiveDate, note: &str) -> String {
    let note = note.trim();
    if note.is_empty() {
        format!("Spesa del {}", format_date_naive(today))
    } else {
        format!("Spesa del {} — {}", format_date_naive(today), note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(items: &[(&str, &str, bool)], date: &str) -> StoredShoppingList {
        StoredShoppingList {
            items: items
                .iter()
                .map(|(id, text, checked)| ShoppingItem {
                    id: id.to_string(),
                    text: text.to_string(),
                    checked: *checked,
                })
                .collect(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_stale_when_day_changes() {
        let list = list_with(&[("1", "pane", false)], "2026-08-06");
        assert!(list.is_stale("2026-08-07"));
        assert!(!list.is_stale("2026-08-06"));
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = StoredShoppingList::empty("2026-08-07");
        assert!(!list.add("1".into(), "   "));
        assert!(list.items.is_empty());
        assert!(list.add("1".into(), "  latte "));
        assert_eq!(list.items[0].text, "latte");
        assert!(!list.items[0].checked);
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut list = list_with(&[("1", "pane", false), ("2", "uova", false)], "2026-08-07");
        list.toggle("2");
        assert!(list.items[1].checked);
        list.toggle("2");
        assert!(!list.items[1].checked);
        list.remove("1");
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, "2");
    }

    #[test]
    fn test_prune_checked_keeps_unchecked() {
        let mut list = list_with(
            &[("1", "pane", true), ("2", "uova", false), ("3", "latte", true)],
            "2026-08-07",
        );
        list.prune_checked();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "uova");
    }

    #[test]
    fn test_display_order_unchecked_first() {
        let list = list_with(
            &[("1", "pane", true), ("2", "uova", false), ("3", "latte", true)],
            "2026-08-07",
        );
        let ordered = list.display_order();
        assert_eq!(
            ordered.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "1", "3"]
        );
        assert_eq!(list.checked_count(), 2);
        assert_eq!(list.unchecked_count(), 1);
    }

    #[test]
    fn test_completion_expense_name() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(completion_expense_name(today, ""), "Spesa del 07/08/2026");
        assert_eq!(
            completion_expense_name(today, " Esselunga "),
            "Spesa del 07/08/2026 — Esselunga"
        );
    }

    #[test]
    fn test_stored_round_trip_matches_wire_shape() {
        let list = list_with(&[("1", "pane", true)], "2026-08-07");
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains("\"date\":\"2026-08-07\""));
        assert!(json.contains("\"checked\":true"));
        let back: StoredShoppingList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
