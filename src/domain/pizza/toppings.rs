use crate::console::Console;
use super::product::Pizza;
use super::value_objects::{PizzaKind, Topping};

// ============================================================================
// Topping Layers - Decoration of a pizza
// ============================================================================
//
// Each layer owns exactly one inner pizza. `prepare` runs the inner
// preparation first and then appends the layer's own line; every other step
// is forwarded untouched. A chain built from [a, b] therefore prints the
// base line, then a, then b.
//
// ============================================================================

#[derive(Debug)]
pub struct ToppingLayer {
    topping: Topping,
    inner: Box<dyn Pizza>,
}

impl ToppingLayer {
    pub fn new(topping: Topping, inner: Box<dyn Pizza>) -> Self {
        Self { topping, inner }
    }

    pub fn topping(&self) -> Topping {
        self.topping
    }
}

impl Pizza for ToppingLayer {
    fn prepare(&self, console: &Console) {
        self.inner.prepare(console);
        console.say(self.topping.prepare_line());
    }

    fn bake(&self, console: &Console) {
        self.inner.bake(console);
    }

    fn cut(&self, console: &Console) {
        self.inner.cut(console);
    }

    fn box_up(&self, console: &Console) {
        self.inner.box_up(console);
    }

    fn kind(&self) -> PizzaKind {
        self.inner.kind()
    }

    fn toppings(&self) -> Vec<Topping> {
        let mut toppings = self.inner.toppings();
        toppings.push(self.topping);
        toppings
    }
}

/// Fold topping names over `base`, left to right; the last valid name ends
/// up outermost. Unknown names are reported and skipped.
pub fn apply_toppings<S: AsRef<str>>(
    base: Box<dyn Pizza>,
    names: &[S],
    console: &Console,
) -> Box<dyn Pizza> {
    names.iter().fold(base, |pizza, name| {
        match Topping::parse(name.as_ref()) {
            Ok(topping) => Box::new(ToppingLayer::new(topping, pizza)),
            Err(err) => {
                tracing::warn!(topping = %name.as_ref(), "Skipping unknown topping");
                console.say(err.to_string());
                pizza
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pizza::BasePizza;

    fn margherita() -> Box<dyn Pizza> {
        Box::new(BasePizza::new(PizzaKind::Margherita))
    }

    #[test]
    fn test_prepare_lines_follow_construction_order() {
        let console = Console::capture();
        let pizza = apply_toppings(margherita(), &["cheese", "olives"], &console);

        pizza.prepare(&console);

        assert_eq!(
            console.lines(),
            vec![
                "Preparing Margherita Pizza",
                " + adding extra cheese",
                " + adding extra olives",
            ]
        );
    }

    #[test]
    fn test_other_steps_are_forwarded_unchanged() {
        let console = Console::capture();
        let pizza = apply_toppings(margherita(), &["cheese", "olives"], &console);

        pizza.bake(&console);
        pizza.cut(&console);
        pizza.box_up(&console);

        assert_eq!(
            console.lines(),
            vec![
                "Baking Margherita Pizza at 220 degrees",
                "Cutting Margherita Pizza into 6 slices",
                "Boxing Margherita Pizza",
            ]
        );
    }

    #[test]
    fn test_unknown_topping_is_skipped() {
        let console = Console::capture();
        let pizza = apply_toppings(margherita(), &["cheese", "bogus"], &console);

        assert_eq!(console.lines(), vec!["Unknown topping: bogus"]);
        assert_eq!(pizza.toppings(), vec![Topping::ExtraCheese]);
    }

    #[test]
    fn test_manual_nesting_matches_fold() {
        let console = Console::capture();
        let nested = ToppingLayer::new(
            Topping::ExtraCheese,
            Box::new(ToppingLayer::new(
                Topping::ExtraOlives,
                Box::new(ToppingLayer::new(Topping::StuffedCrust, margherita())),
            )),
        );

        nested.prepare(&console);

        assert_eq!(nested.topping(), Topping::ExtraCheese);
        assert_eq!(
            console.lines(),
            vec![
                "Preparing Margherita Pizza",
                " + using stuffed crust",
                " + adding extra olives",
                " + adding extra cheese",
            ]
        );
    }

    #[test]
    fn test_wrapping_keeps_identity() {
        let console = Console::capture();
        let pizza = apply_toppings(margherita(), &["stuffed"], &console);

        assert_eq!(pizza.kind(), PizzaKind::Margherita);
        assert_eq!(pizza.label(), "Margherita");
    }

    #[test]
    fn test_empty_list_returns_base() {
        let console = Console::capture();
        let names: [&str; 0] = [];
        let pizza = apply_toppings(margherita(), &names, &console);

        assert!(pizza.toppings().is_empty());
        assert!(console.lines().is_empty());
    }
}
