use crate::catalog::{AliasEntry, Catalog, CatalogTables, ProductEntry, UnitKeyword};
use crate::error::CatalogError;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub catalog: Option<CatalogSection>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

/// Replacement tables. A missing list keeps the built-in one.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSection {
    pub products: Option<Vec<ProductEntry>>,
    pub aliases: Option<Vec<AliasEntry>>,
    pub units: Option<Vec<UnitKeyword>>,
    pub connectors: Option<Vec<String>>,
    pub conjunctions: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            currency: default_currency(),
            catalog: None,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in tables overlaid with whatever the `[catalog]` section provides.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        let builtin = CatalogTables::builtin();
        let Some(section) = &self.catalog else {
            return Catalog::new(builtin);
        };
        Catalog::new(CatalogTables {
            products: section.products.clone().unwrap_or(builtin.products),
            aliases: section.aliases.clone().unwrap_or(builtin.aliases),
            units: section.units.clone().unwrap_or(builtin.units),
            connectors: section.connectors.clone().unwrap_or(builtin.connectors),
            conjunctions: section.conjunctions.clone().unwrap_or(builtin.conjunctions),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BaseUnit, Unit};
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = Config::parse("").unwrap();
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.currency, "₹");
        let catalog = cfg.catalog().unwrap();
        assert!(catalog.product("sugar").is_some());
    }

    #[test]
    fn test_catalog_section_replaces_tables() {
        let cfg = Config::parse(
            r#"
currency = "Rs "

[catalog]
conjunctions = ["and", "plus"]

[[catalog.products]]
name = "Basmati"
price = "95.50"
unit = "kg"

[[catalog.aliases]]
alias = "basmati rice"
product = "basmati"

[[catalog.aliases]]
alias = "basmati"
product = "basmati"
"#,
        )
        .unwrap();
        assert_eq!(cfg.currency, "Rs ");

        let catalog = cfg.catalog().unwrap();
        let basmati = catalog.product("basmati").unwrap();
        assert_eq!(basmati.price_per_unit, Decimal::new(9550, 2));
        assert_eq!(basmati.base_unit, BaseUnit::Kg);
        assert!(catalog.product("sugar").is_none());
        assert_eq!(catalog.resolve_alias("basmati rice"), Some("basmati"));
        // units fell back to the built-in list
        assert_eq!(catalog.unit_hint("kilo"), Some(Unit::Kg));
        assert_eq!(catalog.conjunctions(), ["and", "plus"]);
    }

    #[test]
    fn test_bad_unit_is_rejected() {
        let err = Config::parse(
            r#"
[[catalog.units]]
keyword = "tola"
unit = "tola"
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_invalid_catalog_surfaces_error() {
        let cfg = Config::parse(
            r#"
[[catalog.products]]
name = "rice"
price = "0"
unit = "kg"
"#,
        )
        .unwrap();
        assert!(matches!(
            cfg.catalog(),
            Err(CatalogError::NonPositivePrice { .. })
        ));
    }
}
