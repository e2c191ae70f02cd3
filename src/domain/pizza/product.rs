use std::fmt;

use crate::console::Console;
use super::value_objects::{PizzaKind, Topping};

// ============================================================================
// Pizza - the four-step product capability
// ============================================================================
//
// Steps have no return value; their only effect is the line they write to
// the console. The conventional order is prepare -> bake -> cut -> box but
// nothing here enforces it: callers decide which steps to run.
//
// ============================================================================

pub trait Pizza: fmt::Debug + Send + Sync {
    fn prepare(&self, console: &Console);
    fn bake(&self, console: &Console);
    fn cut(&self, console: &Console);
    fn box_up(&self, console: &Console);

    /// Variant of the base pizza at the bottom of any wrapper chain
    fn kind(&self) -> PizzaKind;

    /// Label used by the registry, observers and delivery
    fn label(&self) -> &'static str {
        self.kind().label()
    }

    /// Toppings applied to this pizza, innermost first
    fn toppings(&self) -> Vec<Topping> {
        Vec::new()
    }
}

/// Plain catalog pizza; behavior is looked up from its kind
#[derive(Debug)]
pub struct BasePizza {
    kind: PizzaKind,
}

impl BasePizza {
    pub fn new(kind: PizzaKind) -> Self {
        Self { kind }
    }
}

impl Pizza for BasePizza {
    fn prepare(&self, console: &Console) {
        console.say(format!("Preparing {} Pizza", self.kind));
    }

    fn bake(&self, console: &Console) {
        let recipe = self.kind.recipe();
        console.say(format!("Baking {} Pizza at {} degrees", self.kind, recipe.bake_degrees));
    }

    fn cut(&self, console: &Console) {
        let recipe = self.kind.recipe();
        console.say(format!("Cutting {} Pizza into {} slices", self.kind, recipe.slices));
    }

    fn box_up(&self, console: &Console) {
        match self.kind.recipe().box_note {
            Some(note) => console.say(format!("Boxing {} Pizza {}", self.kind, note)),
            None => console.say(format!("Boxing {} Pizza", self.kind)),
        }
    }

    fn kind(&self) -> PizzaKind {
        self.kind
    }
}
