use serde::{Deserialize, Serialize};

// ============================================================================
// Pizzeria Configuration
// ============================================================================
//
// Orchestration constants used by the order facade. Nothing is read from
// disk or the environment; callers construct the struct (or take the
// defaults) and hand it to the facade.
//
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PizzeriaConfig {
    /// Oven temperature set before every baked order
    pub preheat_degrees: u32,
    /// Cooking time for orders without toppings
    pub simple_bake_minutes: u32,
    /// Cooking time for orders with a topping chain
    pub topping_bake_minutes: u32,
    /// Label handed to the delivery strategy for custom orders
    pub custom_order_label: String,
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        Self {
            preheat_degrees: 220,
            simple_bake_minutes: 15,
            topping_bake_minutes: 18,
            custom_order_label: "CustomPizza".to_string(),
        }
    }
}
