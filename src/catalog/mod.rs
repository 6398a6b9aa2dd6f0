// src/catalog/mod.rs

mod builtin;

use crate::error::CatalogError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Any unit a speaker may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "liter")]
    Liter,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "unit")]
    Piece,
}

impl Unit {
    /// The base unit this unit already is, `None` for the fine units.
    pub fn as_base(self) -> Option<BaseUnit> {
        match self {
            Unit::Kg => Some(BaseUnit::Kg),
            Unit::Liter => Some(BaseUnit::Liter),
            Unit::Piece => Some(BaseUnit::Piece),
            Unit::Gram | Unit::Ml => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Kg => "kg",
            Unit::Gram => "g",
            Unit::Liter => "liter",
            Unit::Ml => "ml",
            Unit::Piece => "unit",
        })
    }
}

/// The unit a catalog price is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseUnit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "liter")]
    Liter,
    #[serde(rename = "unit")]
    Piece,
}

impl From<BaseUnit> for Unit {
    fn from(base: BaseUnit) -> Self {
        match base {
            BaseUnit::Kg => Unit::Kg,
            BaseUnit::Liter => Unit::Liter,
            BaseUnit::Piece => Unit::Piece,
        }
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Unit::from(*self), f)
    }
}

/// One priced product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    #[serde(rename = "price")]
    pub price_per_unit: Decimal,
    #[serde(rename = "unit")]
    pub base_unit: BaseUnit,
}

/// Surface form -> canonical product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias: String,
    pub product: String,
}

/// Surface unit token -> unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitKeyword {
    pub keyword: String,
    pub unit: Unit,
}

/// Raw tables a [`Catalog`] is assembled from. List order is lookup priority.
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    pub products: Vec<ProductEntry>,
    pub aliases: Vec<AliasEntry>,
    pub units: Vec<UnitKeyword>,
    /// Words between the unit and the product that carry no meaning ("of", "ka").
    pub connectors: Vec<String>,
    /// Words that separate product mentions ("and", "aur").
    pub conjunctions: Vec<String>,
}

impl CatalogTables {
    /// The tables shipped with the crate.
    pub fn builtin() -> Self {
        builtin::tables()
    }
}

/// Immutable product catalog plus the vocabulary used to recognise it.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: HashMap<String, ProductEntry>,
    aliases: Vec<AliasEntry>,
    units: Vec<UnitKeyword>,
    connectors: Vec<String>,
    conjunctions: Vec<String>,
}

impl Catalog {
    /// Validate and normalise the tables. Every name is trimmed and lowercased.
    pub fn new(tables: CatalogTables) -> Result<Self, CatalogError> {
        let mut products = HashMap::with_capacity(tables.products.len());
        for mut entry in tables.products {
            entry.name = normalize_word(&entry.name, "product name")?;
            if entry.price_per_unit <= Decimal::ZERO {
                return Err(CatalogError::NonPositivePrice {
                    name: entry.name,
                    price: entry.price_per_unit,
                });
            }
            if products.contains_key(&entry.name) {
                return Err(CatalogError::DuplicateProduct(entry.name));
            }
            products.insert(entry.name.clone(), entry);
        }

        let aliases = tables
            .aliases
            .into_iter()
            .map(|a| {
                Ok(AliasEntry {
                    alias: normalize_word(&a.alias, "alias")?,
                    product: normalize_word(&a.product, "alias target")?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        for a in &aliases {
            if !products.contains_key(&a.product) {
                warn!(alias = %a.alias, product = %a.product, "Alias points at a product missing from the catalog");
            }
        }

        let units = tables
            .units
            .into_iter()
            .map(|u| {
                Ok(UnitKeyword {
                    keyword: normalize_word(&u.keyword, "unit keyword")?,
                    unit: u.unit,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let connectors = normalize_words(tables.connectors, "connector")?;
        let conjunctions = normalize_words(tables.conjunctions, "conjunction")?;

        Ok(Self {
            products,
            aliases,
            units,
            connectors,
            conjunctions,
        })
    }

    /// Catalog built from the shipped tables.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(CatalogTables::builtin())
    }

    pub fn product(&self, name: &str) -> Option<&ProductEntry> {
        self.products.get(name)
    }

    /// Products sorted by name.
    pub fn products(&self) -> Vec<&ProductEntry> {
        let mut all: Vec<_> = self.products.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Map a spoken product phrase to a canonical name.
    ///
    /// An exact alias wins. Otherwise the first alias (in table order) that
    /// contains the phrase or is contained in it is taken. This tolerates
    /// clipped transcriptions and also lets a short alias capture an
    /// unrelated longer word.
    pub fn resolve_alias(&self, phrase: &str) -> Option<&str> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return None;
        }
        self.aliases
            .iter()
            .find(|a| a.alias == phrase)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|a| phrase.contains(a.alias.as_str()) || a.alias.contains(phrase))
            })
            .map(|a| a.product.as_str())
    }

    /// First unit keyword contained in `token`.
    pub fn unit_hint(&self, token: &str) -> Option<Unit> {
        let token = token.trim().to_lowercase();
        self.units
            .iter()
            .find(|u| token.contains(u.keyword.as_str()))
            .map(|u| u.unit)
    }

    pub fn unit_keywords(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.keyword.as_str())
    }

    pub fn connectors(&self) -> &[String] {
        &self.connectors
    }

    pub fn conjunctions(&self) -> &[String] {
        &self.conjunctions
    }
}

fn normalize_word(word: &str, what: &'static str) -> Result<String, CatalogError> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(CatalogError::EmptyName(what));
    }
    Ok(word)
}

fn normalize_words(words: Vec<String>, what: &'static str) -> Result<Vec<String>, CatalogError> {
    words.iter().map(|w| normalize_word(w, what)).collect()
}
