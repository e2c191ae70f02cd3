use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::OrderError;

// ============================================================================
// Pizza Value Objects
// ============================================================================

/// Closed set of pizzas the catalog can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaKind {
    Rancho,
    Margherita,
    Barbeque,
}

/// Per-variant parameters for the four lifecycle steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub bake_degrees: u32,
    pub slices: u32,
    pub box_note: Option<&'static str>,
}

impl PizzaKind {
    pub const ALL: [PizzaKind; 3] = [PizzaKind::Rancho, PizzaKind::Margherita, PizzaKind::Barbeque];

    /// Catalog key (lowercase) for this kind
    pub fn key(&self) -> &'static str {
        match self {
            PizzaKind::Rancho => "rancho",
            PizzaKind::Margherita => "margherita",
            PizzaKind::Barbeque => "barbeque",
        }
    }

    /// Variant identity used in order labels
    pub fn label(&self) -> &'static str {
        match self {
            PizzaKind::Rancho => "Rancho",
            PizzaKind::Margherita => "Margherita",
            PizzaKind::Barbeque => "Barbeque",
        }
    }

    pub fn recipe(&self) -> Recipe {
        match self {
            PizzaKind::Rancho => Recipe {
                bake_degrees: 200,
                slices: 8,
                box_note: Some("and preparing it for delivery"),
            },
            PizzaKind::Margherita => Recipe {
                bake_degrees: 220,
                slices: 6,
                box_note: None,
            },
            PizzaKind::Barbeque => Recipe {
                bake_degrees: 220,
                slices: 6,
                box_note: None,
            },
        }
    }

    /// Case-insensitive lookup of a catalog key
    pub fn parse(key: &str) -> Result<Self, OrderError> {
        if key.is_empty() {
            return Err(OrderError::EmptyKind);
        }

        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| OrderError::UnknownKind(key.to_string()))
    }
}

impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra applied on top of a pizza during preparation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topping {
    ExtraCheese,
    ExtraOlives,
    StuffedCrust,
}

impl Topping {
    pub fn parse(name: &str) -> Result<Self, OrderError> {
        match name.to_lowercase().as_str() {
            "cheese" => Ok(Topping::ExtraCheese),
            "olives" => Ok(Topping::ExtraOlives),
            "stuffed" => Ok(Topping::StuffedCrust),
            _ => Err(OrderError::UnknownTopping(name.to_string())),
        }
    }

    /// Line appended after the wrapped pizza is prepared
    pub fn prepare_line(&self) -> &'static str {
        match self {
            Topping::ExtraCheese => " + adding extra cheese",
            Topping::ExtraOlives => " + adding extra olives",
            Topping::StuffedCrust => " + using stuffed crust",
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topping::ExtraCheese => "cheese",
            Topping::ExtraOlives => "olives",
            Topping::StuffedCrust => "stuffed",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
