use rust_decimal::Decimal;

/// Service for computing amendment line-item prices
pub struct PriceCalculator;

impl PriceCalculator {
    /// Compute the effective unit price for an added product
    ///
    /// # Arguments
    /// * `base_price` - Catalog price of the product
    /// * `discount` - Configured flat discount, if any
    ///
    /// # Returns
    /// Base price minus discount, clamped at zero. A discount larger than
    /// the price never produces a negative unit price.
    pub fn effective_unit_price(base_price: Decimal, discount: Option<Decimal>) -> Decimal {
        match discount {
            Some(amount) => (base_price - amount).max(Decimal::ZERO),
            None => base_price,
        }
    }

    /// Compute the subtotal for a line item (quantity * unit price)
    pub fn line_subtotal(quantity: i32, unit_price: Decimal) -> Decimal {
        Decimal::from(quantity) * unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_effective_price_without_discount() {
        let price = PriceCalculator::effective_unit_price(dec!(100.00), None);
        assert_eq!(price, dec!(100.00));
    }

    #[test]
    fn test_effective_price_with_discount() {
        let price = PriceCalculator::effective_unit_price(dec!(100.00), Some(dec!(30.00)));
        assert_eq!(price, dec!(70.00));
    }

    #[test]
    fn test_effective_price_discount_equal_to_price() {
        let price = PriceCalculator::effective_unit_price(dec!(25.00), Some(dec!(25.00)));
        assert_eq!(price, dec!(0.00));
    }

    #[test]
    fn test_effective_price_clamps_at_zero() {
        let price = PriceCalculator::effective_unit_price(dec!(100.00), Some(dec!(150.00)));
        assert_eq!(price, Decimal::ZERO);
    }

    #[test]
    fn test_line_subtotal_basic() {
        let subtotal = PriceCalculator::line_subtotal(2, dec!(4.50));
        assert_eq!(subtotal, dec!(9.00));
    }

    #[test]
    fn test_line_subtotal_free_item() {
        let subtotal = PriceCalculator::line_subtotal(3, Decimal::ZERO);
        assert_eq!(subtotal, Decimal::ZERO);
    }
}
