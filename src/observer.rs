//! Notification broadcast (Observer pattern).
//!
//! A [`Ticker`] holds a symbol and a price and notifies every registered
//! [`PriceWatcher`] synchronously, in registration order, whenever the price
//! changes.

use std::any::Any;

use crate::console::Console;
use crate::demo::Demo;
use crate::error::PatternResult;

/// Capability invoked by a [`Ticker`] on every price change.
///
/// Watchers are stateless from the ticker's point of view; they receive the
/// ticker's symbol and the new price and may not fail.
pub trait PriceWatcher: Send + Sync {
    /// React to a price change.
    fn on_price(&self, console: &mut dyn Console, symbol: &str, price: f64);
}

/// Subject holding a symbol, a price, and an ordered watcher list.
///
/// Watchers are never removed; registration order is notification order.
pub struct Ticker {
    symbol: String,
    price: f64,
    watchers: Vec<Box<dyn PriceWatcher>>,
}

impl Ticker {
    /// Create a ticker with an initial price and no watchers.
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            watchers: Vec::new(),
        }
    }

    /// The ticker's symbolic name.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The most recently stored price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Append a watcher to the notification list.
    ///
    /// No duplicate detection and no capacity limit.
    pub fn register(&mut self, watcher: Box<dyn PriceWatcher>) {
        self.watchers.push(watcher);
    }

    /// Number of registered watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Store the new price, then notify every watcher in registration order.
    ///
    /// Notification is synchronous and blocking; each watcher sees the
    /// updated price.
    pub fn set_price(&mut self, console: &mut dyn Console, price: f64) {
        self.price = price;
        tracing::debug!(symbol = %self.symbol, price, "price updated, notifying watchers");
        for watcher in &self.watchers {
            watcher.on_price(console, &self.symbol, price);
        }
    }
}

/// Watcher that formats an email-style alert line.
#[derive(Debug)]
pub struct EmailAlert {
    address: String,
}

impl EmailAlert {
    /// Create an alert bound to a recipient address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl PriceWatcher for EmailAlert {
    fn on_price(&self, console: &mut dyn Console, symbol: &str, price: f64) {
        console.line(&format!(
            "[email to {}] {} is now {:.2}",
            self.address, symbol, price
        ));
    }
}

/// Watcher that formats a mobile push-notification line.
#[derive(Debug)]
pub struct MobileApp {
    user: String,
}

impl MobileApp {
    /// Create a watcher bound to an app user.
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}

impl PriceWatcher for MobileApp {
    fn on_price(&self, console: &mut dyn Console, symbol: &str, price: f64) {
        console.line(&format!(
            "[push to {}] {} changed to {:.2}",
            self.user, symbol, price
        ));
    }
}

/// Bundled observer scenario: one ticker, two watchers, two price changes.
#[derive(Debug)]
pub struct ObserverDemo;

impl Demo for ObserverDemo {
    fn name(&self) -> &str {
        "observer"
    }

    fn summary(&self) -> &str {
        "a ticker broadcasts price changes to registered watchers in order"
    }

    fn tags(&self) -> &[&str] {
        &["behavioral", "broadcast"]
    }

    fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
        let mut ticker = Ticker::new("ACME", 100.0);
        ticker.register(Box::new(EmailAlert::new("ops@example.com")));
        ticker.register(Box::new(MobileApp::new("dana")));

        ticker.set_price(console, 101.5);
        ticker.set_price(console, 99.25);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
