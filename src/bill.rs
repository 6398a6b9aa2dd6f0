// src/bill.rs

use crate::pricing::ParsedLineItem;
use rust_decimal::Decimal;
use serde::Serialize;

/// The running order a session appends to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bill {
    items: Vec<ParsedLineItem>,
}

/// What gets written out for a bill.
#[derive(Debug, Serialize)]
pub struct BillSummary<'a> {
    pub items: &'a [ParsedLineItem],
    pub item_count: usize,
    /// `null` when the sum overflows.
    pub grand_total: Option<Decimal>,
}

impl Bill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ParsedLineItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ParsedLineItem>) {
        self.items.extend(items);
    }

    /// Remove the entry at `index`, `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<ParsedLineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[ParsedLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the line totals. Each total is already whole paise.
    ///
    /// `None` when the sum does not fit in a `Decimal`.
    pub fn grand_total(&self) -> Option<Decimal> {
        let mut total = self
            .items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.total_price()))?;
        total.rescale(2);
        Some(total)
    }

    pub fn summary(&self) -> BillSummary<'_> {
        BillSummary {
            items: &self.items,
            item_count: self.items.len(),
            grand_total: self.grand_total(),
        }
    }
}

/// Sentence read back to the customer after an utterance.
pub fn confirmation(items: &[ParsedLineItem], currency: &str) -> String {
    if items.is_empty() {
        return "Sorry, I could not understand that".to_string();
    }
    let parts: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "{} {} {} for {currency}{:.2}",
                item.quantity(),
                item.unit(),
                item.product(),
                item.total_price()
            )
        })
        .collect();
    format!("Added {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::VoiceOrderParser;

    fn items(utterance: &str) -> Vec<ParsedLineItem> {
        VoiceOrderParser::builtin().unwrap().parse(utterance)
    }

    #[test]
    fn test_bill_totals() {
        let mut bill = Bill::new();
        assert!(bill.is_empty());
        assert_eq!(bill.grand_total().unwrap().to_string(), "0.00");

        bill.extend(items("2 kg sugar and 500 g dal"));
        bill.extend(items("250 ml oil"));
        assert_eq!(bill.len(), 3);
        assert_eq!(bill.grand_total().unwrap().to_string(), "187.50");
    }

    #[test]
    fn test_grand_total_overflow_is_reported() {
        let mut bill = Bill::new();
        bill.extend(items(
            "1000000000000000000000000000 kg sugar and 1000000000000000000000000000 kg sugar",
        ));
        assert_eq!(bill.len(), 2);
        assert_eq!(bill.grand_total(), None);
        let json = serde_json::to_value(bill.summary()).unwrap();
        assert!(json["grand_total"].is_null());

        bill.remove(0);
        assert!(bill.grand_total().is_some());
    }

    #[test]
    fn test_bill_remove_and_clear() {
        let mut bill = Bill::new();
        bill.extend(items("1 kg onion and 2 kg potato"));

        let removed = bill.remove(0).unwrap();
        assert_eq!(removed.product(), "onion");
        assert_eq!(bill.items()[0].product(), "potato");
        assert!(bill.remove(5).is_none());

        bill.clear();
        assert!(bill.is_empty());
    }

    #[test]
    fn test_summary_json() {
        let mut bill = Bill::new();
        bill.extend(items("2 kg sugar"));
        let json = serde_json::to_value(bill.summary()).unwrap();
        assert_eq!(json["item_count"], 1);
        assert_eq!(json["grand_total"], "90.00");
        assert_eq!(json["items"][0]["product"], "sugar");
        assert_eq!(json["items"][0]["unit"], "kg");
    }

    #[test]
    fn test_confirmation_text() {
        assert_eq!(
            confirmation(&items("2 kg sugar and 500 g dal"), "₹"),
            "Added 2 kg sugar for ₹90.00, 0.5 kg dal for ₹60.00"
        );
        assert_eq!(
            confirmation(&items("sugar please"), "₹"),
            "Sorry, I could not understand that"
        );
    }
}
