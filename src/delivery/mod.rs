use std::fmt;
use std::sync::Arc;

use crate::console::Console;

// ============================================================================
// Delivery Strategy - how a finished order reaches the customer
// ============================================================================
//
// A strategy is a named closure over (console, order label). The built-in
// modes cover pickup, car and bike; callers can plug in anything else with
// `from_fn`.
//
// ============================================================================

type DeliverFn = dyn Fn(&Console, &str) + Send + Sync;

#[derive(Clone)]
pub struct DeliveryStrategy {
    mode: String,
    deliver: Arc<DeliverFn>,
}

impl DeliveryStrategy {
    pub fn from_fn<F>(mode: impl Into<String>, deliver: F) -> Self
    where
        F: Fn(&Console, &str) + Send + Sync + 'static,
    {
        Self {
            mode: mode.into(),
            deliver: Arc::new(deliver),
        }
    }

    /// Customer collects the order at the counter
    pub fn pickup() -> Self {
        Self::from_fn("pickup", |console, label| {
            console.say(format!(
                "[Pickup] Customer will pick up the order \"{}\" from the pizzeria.",
                label
            ));
        })
    }

    pub fn car() -> Self {
        Self::from_fn("car", |console, label| {
            console.say(format!("[Delivery-Car] Delivering order \"{}\" by car.", label));
        })
    }

    pub fn bike() -> Self {
        Self::from_fn("bike", |console, label| {
            console.say(format!("[Delivery-Bike] Delivering order \"{}\" by bike.", label));
        })
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn deliver(&self, console: &Console, label: &str) {
        tracing::info!(mode = %self.mode, order = %label, "Delivering order");
        (self.deliver)(console, label);
    }
}

impl Default for DeliveryStrategy {
    fn default() -> Self {
        Self::pickup()
    }
}

impl fmt::Debug for DeliveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryStrategy")
            .field("mode", &self.mode)
            .finish()
    }
}
