use super::{AliasEntry, BaseUnit, CatalogTables, ProductEntry, Unit, UnitKeyword};
use rust_decimal::Decimal;

// Prices are in paise.
const PRODUCTS: &[(&str, i64, BaseUnit)] = &[
    ("wheat flour", 4000, BaseUnit::Kg),
    ("rice", 6000, BaseUnit::Kg),
    ("sugar", 4500, BaseUnit::Kg),
    ("salt", 2500, BaseUnit::Kg),
    ("dal", 12000, BaseUnit::Kg),
    ("onion", 4000, BaseUnit::Kg),
    ("potato", 3000, BaseUnit::Kg),
    ("tomato", 5000, BaseUnit::Kg),
    ("oil", 15000, BaseUnit::Liter),
    ("milk", 6000, BaseUnit::Liter),
    ("ghee", 55000, BaseUnit::Kg),
    ("egg", 700, BaseUnit::Piece),
    ("bread", 4000, BaseUnit::Piece),
    ("tea", 50000, BaseUnit::Kg),
    ("soap", 3500, BaseUnit::Piece),
];

// Order matters: the substring fallback takes the first hit.
const ALIASES: &[(&str, &str)] = &[
    ("wheat flour", "wheat flour"),
    ("atta", "wheat flour"),
    ("aata", "wheat flour"),
    ("आटा", "wheat flour"),
    ("flour", "wheat flour"),
    ("rice", "rice"),
    ("chawal", "rice"),
    ("chaawal", "rice"),
    ("चावल", "rice"),
    ("sugar", "sugar"),
    ("cheeni", "sugar"),
    ("chini", "sugar"),
    ("चीनी", "sugar"),
    ("शक्कर", "sugar"),
    ("shakkar", "sugar"),
    ("salt", "salt"),
    ("namak", "salt"),
    ("नमक", "salt"),
    ("dal", "dal"),
    ("daal", "dal"),
    ("दाल", "dal"),
    ("lentil", "dal"),
    ("onion", "onion"),
    ("pyaz", "onion"),
    ("pyaaz", "onion"),
    ("प्याज़", "onion"),
    ("प्याज", "onion"),
    ("potato", "potato"),
    ("aloo", "potato"),
    ("alu", "potato"),
    ("आलू", "potato"),
    ("tomato", "tomato"),
    ("tamatar", "tomato"),
    ("टमाटर", "tomato"),
    ("oil", "oil"),
    ("tel", "oil"),
    ("तेल", "oil"),
    ("milk", "milk"),
    ("doodh", "milk"),
    ("dudh", "milk"),
    ("दूध", "milk"),
    ("ghee", "ghee"),
    ("घी", "ghee"),
    ("egg", "egg"),
    ("anda", "egg"),
    ("ande", "egg"),
    ("अंडा", "egg"),
    ("अंडे", "egg"),
    ("bread", "bread"),
    ("pav", "bread"),
    ("ब्रेड", "bread"),
    ("tea", "tea"),
    ("chai", "tea"),
    ("चाय", "tea"),
    ("soap", "soap"),
    ("sabun", "soap"),
    ("साबुन", "soap"),
];

// Longer keywords that contain shorter ones ("kg" contains "g",
// "millilitre" contains "litre") must come first.
const UNITS: &[(&str, Unit)] = &[
    ("kilogram", Unit::Kg),
    ("kilo", Unit::Kg),
    ("kg", Unit::Kg),
    ("किलोग्राम", Unit::Kg),
    ("किलो", Unit::Kg),
    ("millilitre", Unit::Ml),
    ("milliliter", Unit::Ml),
    ("ml", Unit::Ml),
    ("मिलीलीटर", Unit::Ml),
    ("मिली", Unit::Ml),
    ("litre", Unit::Liter),
    ("liter", Unit::Liter),
    ("ltr", Unit::Liter),
    ("लीटर", Unit::Liter),
    ("लिटर", Unit::Liter),
    ("gram", Unit::Gram),
    ("gm", Unit::Gram),
    ("g", Unit::Gram),
    ("ग्राम", Unit::Gram),
    ("piece", Unit::Piece),
    ("pcs", Unit::Piece),
    ("pc", Unit::Piece),
    ("packet", Unit::Piece),
    ("unit", Unit::Piece),
    ("पैकेट", Unit::Piece),
    ("पीस", Unit::Piece),
];

const CONNECTORS: &[&str] = &["of", "ka", "ki", "ke", "का", "की", "के"];

const CONJUNCTIONS: &[&str] = &["and", "aur", "और", "तथा"];

pub(super) fn tables() -> CatalogTables {
    CatalogTables {
        products: PRODUCTS
            .iter()
            .map(|&(name, paise, base_unit)| ProductEntry {
                name: name.to_string(),
                price_per_unit: Decimal::new(paise, 2),
                base_unit,
            })
            .collect(),
        aliases: ALIASES
            .iter()
            .map(|&(alias, product)| AliasEntry {
                alias: alias.to_string(),
                product: product.to_string(),
            })
            .collect(),
        units: UNITS
            .iter()
            .map(|&(keyword, unit)| UnitKeyword {
                keyword: keyword.to_string(),
                unit,
            })
            .collect(),
        connectors: CONNECTORS.iter().map(|s| s.to_string()).collect(),
        conjunctions: CONJUNCTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
