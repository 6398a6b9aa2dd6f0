// src/voice/mod.rs

mod segment;

pub use segment::{Grammar, SegmentMatch, Shape};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::pricing::{self, ParsedLineItem};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// Turns one finished utterance into priced line items.
///
/// Holds only immutable tables, so a single parser can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct VoiceOrderParser {
    catalog: Catalog,
    grammar: Grammar,
}

impl VoiceOrderParser {
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let grammar = Grammar::compile(&catalog)?;
        Ok(Self { catalog, grammar })
    }

    /// Parser over the shipped catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(Catalog::builtin()?)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every recognised product mention, left to right.
    ///
    /// Unrecognised segments are dropped; an utterance with nothing usable
    /// yields an empty list.
    pub fn parse(&self, utterance: &str) -> Vec<ParsedLineItem> {
        let text = segment::normalize(utterance);
        self.grammar
            .segments(&text)
            .filter_map(|s| self.parse_segment(s))
            .collect()
    }

    fn parse_segment(&self, segment: &str) -> Option<ParsedLineItem> {
        if !segment.bytes().any(|b| b.is_ascii_digit()) {
            debug!(segment, "No quantity in segment");
            return None;
        }
        let candidates = self.grammar.shapes(segment);
        if candidates.is_empty() {
            debug!(segment, "Segment matches no known shape");
            return None;
        }
        candidates
            .into_iter()
            .find_map(|m| self.price_match(segment, &m))
    }

    fn price_match(&self, segment: &str, m: &SegmentMatch<'_>) -> Option<ParsedLineItem> {
        let Ok(raw) = Decimal::from_str(m.quantity) else {
            debug!(segment, quantity = m.quantity, "Unreadable quantity");
            return None;
        };
        let hint = m.unit.and_then(|token| self.catalog.unit_hint(token));

        let Some(name) = self.catalog.resolve_alias(m.product) else {
            debug!(segment, phrase = m.product, shape = ?m.shape, "No alias for product phrase");
            return None;
        };
        let Some(product) = self.catalog.product(name) else {
            debug!(segment, product = name, "Alias target missing from catalog");
            return None;
        };

        let (quantity, unit) = pricing::convert_quantity(raw, hint, product.base_unit);
        if unit != product.base_unit {
            debug!(segment, spoken = %unit, base = %product.base_unit, "Spoken unit differs from price unit");
        }
        pricing::line_item(product, quantity)
            .inspect_err(|e| debug!(segment, error = %e, "Segment not priced"))
            .ok()
    }
}
