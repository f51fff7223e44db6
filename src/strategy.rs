//! Payment strategy switch (Strategy pattern).
//!
//! A [`CheckoutContext`] delegates `checkout` to whichever
//! [`PaymentStrategy`] is currently assigned. Checking out before any
//! strategy was set is a precondition violation and surfaces as
//! [`PatternError::StrategyNotSet`].

use std::any::Any;

use crate::console::Console;
use crate::demo::Demo;
use crate::error::{PatternError, PatternResult};

/// Interchangeable payment algorithm selected at runtime.
pub trait PaymentStrategy: Send + Sync {
    /// Charge `amount` and return a human-readable receipt line.
    fn pay(&self, amount: f64) -> String;
}

/// Credit-card payment; the receipt shows only the last four digits.
#[derive(Debug)]
pub struct CreditCard {
    number: String,
}

impl CreditCard {
    /// Create a strategy for the given card number.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    fn last_four(&self) -> &str {
        let cut = self.number.len().saturating_sub(4);
        &self.number[cut..]
    }
}

impl PaymentStrategy for CreditCard {
    fn pay(&self, amount: f64) -> String {
        format!(
            "Paid {:.2} with credit card ending {}",
            amount,
            self.last_four()
        )
    }
}

/// PayPal payment bound to an account address.
#[derive(Debug)]
pub struct PayPal {
    account: String,
}

impl PayPal {
    /// Create a strategy for the given account.
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }
}

impl PaymentStrategy for PayPal {
    fn pay(&self, amount: f64) -> String {
        format!("Paid {:.2} via PayPal account {}", amount, self.account)
    }
}

/// Context holding the currently assigned payment strategy.
///
/// The outcome of [`checkout`](CheckoutContext::checkout) depends only on the
/// strategy assigned at call time; there is no history.
#[derive(Default)]
pub struct CheckoutContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl CheckoutContext {
    /// Create a context with no strategy assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active strategy unconditionally.
    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Check whether a strategy has been assigned.
    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    /// Charge `amount` through the active strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::StrategyNotSet`] if no strategy was ever
    /// assigned.
    pub fn checkout(&self, amount: f64) -> PatternResult<String> {
        let strategy = self.strategy.as_ref().ok_or(PatternError::StrategyNotSet)?;
        Ok(strategy.pay(amount))
    }
}

/// Bundled strategy scenario: two checkouts through two different strategies.
#[derive(Debug)]
pub struct StrategyDemo;

impl Demo for StrategyDemo {
    fn name(&self) -> &str {
        "strategy"
    }

    fn summary(&self) -> &str {
        "a checkout context delegates payment to the currently assigned strategy"
    }

    fn tags(&self) -> &[&str] {
        &["behavioral", "payment"]
    }

    fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
        let mut context = CheckoutContext::new();

        context.set_strategy(Box::new(CreditCard::new("4111-1111-1111-1111")));
        console.line(&context.checkout(250.0)?);

        context.set_strategy(Box::new(PayPal::new("dana@example.com")));
        console.line(&context.checkout(99.95)?);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn test_checkout_uses_active_strategy_only() {
        let mut context = CheckoutContext::new();
        context.set_strategy(Box::new(CreditCard::new("4111-1111-1111-1111")));
        assert_eq!(
            context.checkout(250.0).unwrap(),
            "Paid 250.00 with credit card ending 1111"
        );

        // Replacing the strategy redirects subsequent checkouts.
        context.set_strategy(Box::new(PayPal::new("dana@example.com")));
        assert_eq!(
            context.checkout(99.95).unwrap(),
            "Paid 99.95 via PayPal account dana@example.com"
        );
    }

    #[test]
    fn test_checkout_without_strategy_is_an_error() {
        let context = CheckoutContext::new();
        assert!(!context.has_strategy());
        assert_eq!(
            context.checkout(10.0).unwrap_err(),
            PatternError::StrategyNotSet
        );
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = BufferConsole::new();
        StrategyDemo.run(&mut console).unwrap();
        assert_eq!(
            console.lines(),
            &[
                "Paid 250.00 with credit card ending 1111",
                "Paid 99.95 via PayPal account dana@example.com",
            ]
        );
    }
}
