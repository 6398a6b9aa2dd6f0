// src/pricing.rs

use crate::catalog::{BaseUnit, Catalog, ProductEntry, Unit};
use crate::error::BillingError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// One priced entry on a bill.
///
/// Only [`line_item`] builds these, so `total_price` is always
/// `quantity * price_per_unit` rounded half-up to two places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLineItem {
    product: String,
    quantity: Decimal,
    unit: BaseUnit,
    price_per_unit: Decimal,
    total_price: Decimal,
}

impl ParsedLineItem {
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Quantity in the product's base unit.
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit(&self) -> BaseUnit {
        self.unit
    }

    pub fn price_per_unit(&self) -> Decimal {
        self.price_per_unit
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

/// Bring a spoken quantity into a coarse unit.
///
/// Grams become kilograms and millilitres become litres. A coarse hint is
/// kept as is; no hint means the product's own base unit.
pub fn convert_quantity(raw: Decimal, hint: Option<Unit>, base: BaseUnit) -> (Decimal, BaseUnit) {
    let thousand = Decimal::from(1000);
    match hint {
        Some(Unit::Gram) => (raw / thousand, BaseUnit::Kg),
        Some(Unit::Ml) => (raw / thousand, BaseUnit::Liter),
        Some(coarse) => (raw, coarse.as_base().unwrap_or(base)),
        None => (raw, base),
    }
}

/// Round half-up to whole paise, always carrying two decimal places.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Price `quantity` (already in base units) of `product`.
///
/// Both the voice and manual paths go through here, so a quantity that is
/// not positive after conversion, or a total that does not fit in a
/// `Decimal`, is rejected the same way.
pub fn line_item(product: &ProductEntry, quantity: Decimal) -> Result<ParsedLineItem, BillingError> {
    if quantity <= Decimal::ZERO {
        return Err(BillingError::NonPositiveQuantity(quantity));
    }
    let total = quantity
        .checked_mul(product.price_per_unit)
        .ok_or(BillingError::QuantityOutOfRange(quantity))?;
    Ok(ParsedLineItem {
        product: product.name.clone(),
        quantity: quantity.normalize(),
        unit: product.base_unit,
        price_per_unit: product.price_per_unit,
        total_price: round_money(total),
    })
}

/// Build a line item from an explicit product, quantity and unit.
///
/// Errors report `quantity` as the caller gave it, before unit conversion.
pub fn manual_entry(
    catalog: &Catalog,
    product: &str,
    quantity: Decimal,
    unit: Unit,
) -> Result<ParsedLineItem, BillingError> {
    let name = product.trim().to_lowercase();
    let entry = catalog
        .product(&name)
        .ok_or_else(|| BillingError::UnknownProduct(name.clone()))?;

    let (converted, _) = convert_quantity(quantity, Some(unit), entry.base_unit);
    line_item(entry, converted).map_err(|e| match e {
        BillingError::NonPositiveQuantity(_) => BillingError::NonPositiveQuantity(quantity),
        BillingError::QuantityOutOfRange(_) => BillingError::QuantityOutOfRange(quantity),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(name: &str, price: &str, unit: BaseUnit) -> ProductEntry {
        ProductEntry {
            name: name.to_string(),
            price_per_unit: d(price),
            base_unit: unit,
        }
    }

    #[test]
    fn test_fine_units_convert_to_coarse() {
        assert_eq!(
            convert_quantity(d("500"), Some(Unit::Gram), BaseUnit::Kg),
            (d("0.5"), BaseUnit::Kg)
        );
        assert_eq!(
            convert_quantity(d("250"), Some(Unit::Ml), BaseUnit::Liter),
            (d("0.25"), BaseUnit::Liter)
        );
    }

    #[test]
    fn test_coarse_and_missing_hints() {
        assert_eq!(
            convert_quantity(d("2"), Some(Unit::Liter), BaseUnit::Kg),
            (d("2"), BaseUnit::Liter)
        );
        assert_eq!(
            convert_quantity(d("6"), None, BaseUnit::Piece),
            (d("6"), BaseUnit::Piece)
        );
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(d("0.125")), d("0.13"));
        assert_eq!(round_money(d("1.005")), d("1.01"));
        assert_eq!(round_money(d("1.004")), d("1.00"));
        assert_eq!(round_money(d("12.5")).to_string(), "12.50");
        assert_eq!(round_money(d("90")).to_string(), "90.00");
    }

    #[test]
    fn test_line_item_total_is_recomputed() {
        let item = line_item(&entry("dal", "2.01", BaseUnit::Kg), d("0.5")).unwrap();
        assert_eq!(item.quantity(), d("0.5"));
        assert_eq!(item.unit(), BaseUnit::Kg);
        assert_eq!(item.price_per_unit(), d("2.01"));
        assert_eq!(item.total_price(), d("1.01"));
    }

    #[test]
    fn test_manual_entry() {
        let catalog = Catalog::builtin().unwrap();
        let item = manual_entry(&catalog, "Dal", d("500"), Unit::Gram).unwrap();
        assert_eq!(item.product(), "dal");
        assert_eq!(item.quantity(), d("0.5"));
        assert_eq!(item.total_price(), d("60"));

        // total == round(quantity_in_base_unit * price, 2) for every product
        for product in catalog.products() {
            let item = manual_entry(&catalog, &product.name, d("1.5"), product.base_unit.into()).unwrap();
            assert_eq!(item.total_price(), round_money(d("1.5") * product.price_per_unit));
            assert_eq!(item.unit(), product.base_unit);
        }
    }

    #[test]
    fn test_manual_entry_rejects_bad_input() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            manual_entry(&catalog, "sugar", Decimal::ZERO, Unit::Kg),
            Err(BillingError::NonPositiveQuantity(Decimal::ZERO))
        );
        assert_eq!(
            manual_entry(&catalog, "sugar", d("-1"), Unit::Kg),
            Err(BillingError::NonPositiveQuantity(d("-1")))
        );
        assert_eq!(
            manual_entry(&catalog, "unicorn", d("1"), Unit::Kg),
            Err(BillingError::UnknownProduct("unicorn".to_string()))
        );
    }

    #[test]
    fn test_manual_entry_rejects_quantity_lost_in_conversion() {
        let catalog = Catalog::builtin().unwrap();
        let tiny = d("0.0000000000000000000000000001");
        assert_eq!(
            manual_entry(&catalog, "sugar", tiny, Unit::Gram),
            Err(BillingError::NonPositiveQuantity(tiny))
        );
        assert_eq!(
            manual_entry(&catalog, "milk", tiny, Unit::Ml),
            Err(BillingError::NonPositiveQuantity(tiny))
        );
    }

    #[test]
    fn test_manual_entry_overflow_reports_given_quantity() {
        let catalog = Catalog::builtin().unwrap();
        let huge = Decimal::MAX;
        assert_eq!(
            manual_entry(&catalog, "sugar", huge, Unit::Kg),
            Err(BillingError::QuantityOutOfRange(huge))
        );
        let litres = d("1000000000000000000000000000");
        assert_eq!(
            manual_entry(&catalog, "oil", litres, Unit::Liter),
            Err(BillingError::QuantityOutOfRange(litres))
        );
    }

    #[test]
    fn test_line_item_rejects_non_positive_quantity() {
        let sugar = entry("sugar", "45", BaseUnit::Kg);
        assert_eq!(
            line_item(&sugar, Decimal::ZERO),
            Err(BillingError::NonPositiveQuantity(Decimal::ZERO))
        );
    }
}
