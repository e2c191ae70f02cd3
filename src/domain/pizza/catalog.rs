use crate::console::Console;
use super::errors::OrderError;
use super::product::{BasePizza, Pizza};
use super::value_objects::PizzaKind;

// ============================================================================
// Pizza Catalog - key -> fresh product
// ============================================================================

#[derive(Clone, Debug)]
pub struct PizzaCatalog {
    console: Console,
}

impl PizzaCatalog {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    /// Build a new pizza for a case-insensitive key.
    ///
    /// Every call returns an independently owned instance. Empty or unknown
    /// keys produce a diagnostic line and an error, never a panic.
    pub fn create(&self, key: &str) -> Result<Box<dyn Pizza>, OrderError> {
        match PizzaKind::parse(key) {
            Ok(kind) => {
                tracing::debug!(kind = %kind, "Catalog built pizza");
                Ok(Box::new(BasePizza::new(kind)))
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Catalog lookup failed");
                self.console.say(err.to_string());
                Err(err)
            }
        }
    }
}
