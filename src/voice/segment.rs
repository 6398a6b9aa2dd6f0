use crate::catalog::Catalog;
use regex::{Captures, Regex};

/// A decimal quantity. Devanagari digits are folded to ASCII beforehand.
const NUMBER: &str = r"[0-9]+(?:\.[0-9]+)?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `2 kg of sugar`
    QuantityFirst,
    /// `sugar 2 kg`
    ProductFirst,
}

/// The raw pieces of one product mention, borrowed from the segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentMatch<'a> {
    pub shape: Shape,
    pub quantity: &'a str,
    pub unit: Option<&'a str>,
    pub product: &'a str,
}

/// Patterns compiled from a catalog's vocabulary.
#[derive(Debug, Clone)]
pub struct Grammar {
    splitter: Regex,
    quantity_first: Regex,
    product_first: Regex,
}

impl Grammar {
    pub fn compile(catalog: &Catalog) -> Result<Self, regex::Error> {
        let units = alternation(catalog.unit_keywords());
        let connectors = alternation(catalog.connectors().iter().map(String::as_str));
        let conjunctions = alternation(catalog.conjunctions().iter().map(String::as_str));

        let splitter = match conjunctions {
            Some(words) => format!(r"\s+(?:{words})\s+|[,।]"),
            None => r"[,।]".to_string(),
        };

        let unit_then_space = units
            .as_deref()
            .map(|u| format!(r"(?:(?P<unit>(?:{u})s?)\.?\s+)?"))
            .unwrap_or_default();
        let connector = connectors
            .as_deref()
            .map(|c| format!(r"(?:(?:{c})\s+)?"))
            .unwrap_or_default();
        let trailing_unit = units
            .as_deref()
            .map(|u| format!(r"\s*(?P<unit>(?:{u})s?)?"))
            .unwrap_or_default();

        Ok(Self {
            splitter: Regex::new(&splitter)?,
            quantity_first: Regex::new(&format!(
                r"^(?P<qty>{NUMBER})\s*{unit_then_space}{connector}(?P<product>.+)$"
            ))?,
            product_first: Regex::new(&format!(
                r"^(?P<product>.+?)\s+(?P<qty>{NUMBER}){trailing_unit}$"
            ))?,
        })
    }

    /// Split normalised text on conjunctions and commas, dropping empty pieces.
    pub fn segments<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.splitter
            .split(text)
            .map(|s| s.trim().trim_end_matches(|c: char| matches!(c, '.' | '!' | '?')).trim_end())
            .filter(|s| !s.is_empty())
    }

    /// Candidate readings of one segment, in the order they should be tried.
    ///
    /// A segment that opens with a digit is read quantity-first; the
    /// product-first reading is always offered as a fallback.
    pub fn shapes<'a>(&self, segment: &'a str) -> Vec<SegmentMatch<'a>> {
        let mut candidates = Vec::with_capacity(2);
        if segment.starts_with(|c: char| c.is_ascii_digit()) {
            candidates.extend(
                self.quantity_first
                    .captures(segment)
                    .and_then(|c| to_match(&c, Shape::QuantityFirst)),
            );
        }
        candidates.extend(
            self.product_first
                .captures(segment)
                .and_then(|c| to_match(&c, Shape::ProductFirst)),
        );
        candidates
    }
}

fn to_match<'a>(caps: &Captures<'a>, shape: Shape) -> Option<SegmentMatch<'a>> {
    let product = caps.name("product")?.as_str().trim();
    if product.is_empty() {
        return None;
    }
    Some(SegmentMatch {
        shape,
        quantity: caps.name("qty")?.as_str(),
        unit: caps.name("unit").map(|m| m.as_str()),
        product,
    })
}

/// Lowercase and fold Devanagari digits to ASCII.
pub fn normalize(utterance: &str) -> String {
    utterance
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '०'..='९' => char::from(b'0' + (c as u32 - '०' as u32) as u8),
            _ => c,
        })
        .collect()
}

/// Regex alternation of `words`, longest first so a keyword never loses to
/// its own prefix. `None` for an empty list.
fn alternation<'a>(words: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut words: Vec<&str> = words.collect();
    if words.is_empty() {
        return None;
    }
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    Some(
        words
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|"),
    )
}
