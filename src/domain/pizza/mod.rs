// ============================================================================
// Pizza Domain - Products and how they are built
// ============================================================================
//
// - Value objects (PizzaKind, Topping, Recipe)
// - Product capability (Pizza trait, BasePizza)
// - Decoration (ToppingLayer, apply_toppings)
// - Catalog (PizzaCatalog)
// - Staged custom pizzas (CustomPizza, CustomPizzaBuilder)
// - Errors (OrderError)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod product;
pub mod toppings;
pub mod catalog;
pub mod custom;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use product::*;
pub use toppings::*;
pub use catalog::*;
pub use custom::*;
