//! Strategy: the shopping cart delegates payment to whichever
//! [`PaymentStrategy`] it currently holds.

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub name: String,
    pub price: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

// ============================================================================
// Strategies
// ============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait PaymentStrategy {
    /// Pays `amount` and returns a confirmation line.
    fn pay(&self, amount: u64) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u64) -> String {
        format!("Paying {amount} using Credit Card")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u64) -> String {
        format!("Paying {amount} using PayPal")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferPayment;

impl PaymentStrategy for BankTransferPayment {
    fn pay(&self, amount: u64) -> String {
        format!("Paying {amount} using Bank Transfer")
    }
}

/// Names a built-in strategy, e.g. in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "credit-card")]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    #[serde(rename = "bank-transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub fn strategy(self) -> Box<dyn PaymentStrategy> {
        match self {
            PaymentMethod::CreditCard => Box::new(CreditCardPayment),
            PaymentMethod::PayPal => Box::new(PayPalPayment),
            PaymentMethod::BankTransfer => Box::new(BankTransferPayment),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard => f.write_str("credit-card"),
            PaymentMethod::PayPal => f.write_str("paypal"),
            PaymentMethod::BankTransfer => f.write_str("bank-transfer"),
        }
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct ShoppingCart {
    items: Vec<Item>,
    strategy: Box<dyn PaymentStrategy>,
}

impl ShoppingCart {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self {
            items: Vec::new(),
            strategy,
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> Result<u64> {
        self.items.iter().try_fold(0u64, |total, item| {
            total
                .checked_add(item.price)
                .ok_or_else(|| PatternError::price_overflow(&item.name))
        })
    }

    /// Charges the cart total through the current strategy. The cart keeps
    /// its items, so checking out twice charges twice.
    pub fn checkout(&self) -> Result<Receipt> {
        let total = self.total()?;
        let payment = self.strategy.pay(total);
        info!(total, items = self.items.len(), "checkout");

        Ok(Receipt {
            total,
            payment,
            items: self.items.clone(),
        })
    }
}

impl fmt::Debug for ShoppingCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingCart")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub total: u64,
    pub payment: String,
    pub items: Vec<Item>,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.payment)?;
        write!(f, "Items purchased:")?;
        for item in &self.items {
            write!(f, "\n- {} (${})", item.name, item.price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    fn mock_paying(amount: u64, times: usize) -> MockPaymentStrategy {
        let mut mock = MockPaymentStrategy::new();
        mock.expect_pay()
            .with(eq(amount))
            .times(times)
            .returning(|amount| format!("Paying {amount} using Mock"));
        mock
    }

    #[test]
    fn test_checkout_pays_sum_once() {
        let mut cart = ShoppingCart::new(Box::new(mock_paying(1220, 1)));
        cart.add_item(Item::new("Laptop", 1200));
        cart.add_item(Item::new("Mouse", 20));

        let receipt = cart.checkout().unwrap();
        assert_eq!(receipt.total, 1220);
        assert_eq!(receipt.payment, "Paying 1220 using Mock");
    }

    #[test]
    fn test_swapping_strategy_keeps_total() {
        let mut cart = ShoppingCart::new(Box::new(mock_paying(1220, 1)));
        cart.add_item(Item::new("Laptop", 1200));
        cart.add_item(Item::new("Mouse", 20));
        cart.checkout().unwrap();

        // Dropping the first mock verifies it was called exactly once.
        cart.set_strategy(Box::new(mock_paying(1220, 1)));
        cart.checkout().unwrap();
    }

    #[test]
    fn test_strategy_never_called_without_checkout() {
        let mut cart = ShoppingCart::new(Box::new(mock_paying(0, 0)));
        cart.add_item(Item::new("Laptop", 1200));
    }

    #[test]
    fn test_builtin_strategies() {
        assert_eq!(CreditCardPayment.pay(1220), "Paying 1220 using Credit Card");
        assert_eq!(PayPalPayment.pay(800), "Paying 800 using PayPal");
        assert_eq!(BankTransferPayment.pay(90), "Paying 90 using Bank Transfer");
    }

    #[test]
    fn test_payment_method_selects_strategy() {
        assert_eq!(PaymentMethod::PayPal.strategy().pay(1), "Paying 1 using PayPal");
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "bank-transfer");
    }

    #[test]
    fn test_receipt_lines() {
        let mut cart = ShoppingCart::new(Box::new(CreditCardPayment));
        cart.add_item(Item::new("Laptop", 1200));
        cart.add_item(Item::new("Mouse", 20));

        let receipt = cart.checkout().unwrap();
        assert_eq!(
            receipt.to_string(),
            "Paying 1220 using Credit Card\nItems purchased:\n- Laptop ($1200)\n- Mouse ($20)"
        );
    }

    #[test]
    fn test_empty_cart_pays_zero() {
        let cart = ShoppingCart::new(Box::new(mock_paying(0, 1)));
        let receipt = cart.checkout().unwrap();
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.to_string(), "Paying 0 using Mock\nItems purchased:");
    }

    #[test]
    fn test_overflow_is_an_error_and_skips_payment() {
        let mut cart = ShoppingCart::new(Box::new(mock_paying(0, 0)));
        cart.add_item(Item::new("Yacht", u64::MAX));
        cart.add_item(Item::new("Anchor", 1));

        let err = cart.checkout().unwrap_err();
        assert!(matches!(err, PatternError::PriceOverflow { ref item } if item == "Anchor"));
    }

    proptest! {
        #[test]
        fn test_total_is_sum_of_prices(prices in prop::collection::vec(0u64..1_000_000, 0..64)) {
            let mut cart = ShoppingCart::new(Box::new(CreditCardPayment));
            for (i, price) in prices.iter().enumerate() {
                cart.add_item(Item::new(format!("item-{i}"), *price));
            }
            let receipt = cart.checkout().unwrap();
            prop_assert_eq!(receipt.total, prices.iter().sum::<u64>());
            prop_assert_eq!(receipt.items.len(), prices.len());
        }
    }
}
