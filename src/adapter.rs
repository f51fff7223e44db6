//! Protocol adapter (Adapter pattern).
//!
//! [`GatewayAdapter`] owns one [`LegacyGateway`] and exposes it through the
//! [`PaymentProcessor`] target interface: it writes a translation-marker line
//! first, then delegates to the legacy operation.

use std::any::Any;

use crate::console::Console;
use crate::demo::Demo;
use crate::error::PatternResult;

/// Target interface expected by modern callers.
pub trait PaymentProcessor {
    /// Process a payment, writing progress lines to the console.
    fn process(&self, console: &mut dyn Console);
}

/// Incompatible legacy entity with a differently named operation.
#[derive(Debug)]
pub struct LegacyGateway {
    merchant: String,
}

impl LegacyGateway {
    /// Create a gateway for the given merchant.
    pub fn new(merchant: impl Into<String>) -> Self {
        Self {
            merchant: merchant.into(),
        }
    }

    /// The legacy operation the adapter forwards to.
    pub fn process_payment(&self, console: &mut dyn Console) {
        console.line(&format!(
            "Legacy gateway settling payment for {}",
            self.merchant
        ));
    }
}

/// Adapter exclusively owning exactly one adaptee, supplied at construction.
///
/// Ownership makes a missing adaptee unrepresentable; the adaptee is never
/// shared or reassigned.
#[derive(Debug)]
pub struct GatewayAdapter {
    legacy: LegacyGateway,
}

impl GatewayAdapter {
    /// Wrap a legacy gateway behind the [`PaymentProcessor`] interface.
    pub fn new(legacy: LegacyGateway) -> Self {
        Self { legacy }
    }
}

impl PaymentProcessor for GatewayAdapter {
    fn process(&self, console: &mut dyn Console) {
        console.line("Adapter translating process() into a legacy gateway call");
        self.legacy.process_payment(console);
    }
}

/// Bundled adapter scenario: one adapted call against a legacy gateway.
#[derive(Debug)]
pub struct AdapterDemo;

impl Demo for AdapterDemo {
    fn name(&self) -> &str {
        "adapter"
    }

    fn summary(&self) -> &str {
        "a legacy gateway exposed through a target-compatible interface"
    }

    fn tags(&self) -> &[&str] {
        &["structural", "payment"]
    }

    fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
        let adapter = GatewayAdapter::new(LegacyGateway::new("ACME Store"));
        adapter.process(console);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
