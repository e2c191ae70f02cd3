use crate::domain::pizza::OrderError;
use crate::facade::OrderFacade;

// ============================================================================
// Order Commands - facade calls bound to their arguments
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    Simple {
        kind: String,
    },
    WithToppings {
        kind: String,
        toppings: Vec<String>,
    },
    Custom {
        size: String,
        crust: String,
        cheese: bool,
        pepperoni: bool,
        mushrooms: bool,
    },
}

impl OrderCommand {
    pub fn simple(kind: impl Into<String>) -> Self {
        OrderCommand::Simple { kind: kind.into() }
    }

    pub fn with_toppings<S: Into<String>>(kind: impl Into<String>, toppings: impl IntoIterator<Item = S>) -> Self {
        OrderCommand::WithToppings {
            kind: kind.into(),
            toppings: toppings.into_iter().map(Into::into).collect(),
        }
    }

    pub fn custom(
        size: impl Into<String>,
        crust: impl Into<String>,
        cheese: bool,
        pepperoni: bool,
        mushrooms: bool,
    ) -> Self {
        OrderCommand::Custom {
            size: size.into(),
            crust: crust.into(),
            cheese,
            pepperoni,
            mushrooms,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrderCommand::Simple { .. } => "SimpleOrder",
            OrderCommand::WithToppings { .. } => "ToppingsOrder",
            OrderCommand::Custom { .. } => "CustomOrder",
        }
    }

    /// Run the bound facade call. Commands can be executed any number of
    /// times; each run places a new order.
    pub fn execute(&self, facade: &OrderFacade) -> Result<(), OrderError> {
        match self {
            OrderCommand::Simple { kind } => facade.order_simple(kind).map(|_| ()),
            OrderCommand::WithToppings { kind, toppings } => {
                facade.order_with_toppings(kind, toppings.as_slice()).map(|_| ())
            }
            OrderCommand::Custom { size, crust, cheese, pepperoni, mushrooms } => {
                facade.order_custom(size, crust, *cheese, *pepperoni, *mushrooms);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::registry::OrderRegistry;

    fn facade() -> OrderFacade {
        let console = Console::capture();
        OrderFacade::new(OrderRegistry::new(console.clone()), console)
    }

    #[test]
    fn test_constructors_bind_arguments() {
        assert_eq!(
            OrderCommand::with_toppings("rancho", ["cheese", "olives"]),
            OrderCommand::WithToppings {
                kind: "rancho".to_string(),
                toppings: vec!["cheese".to_string(), "olives".to_string()],
            }
        );
        assert_eq!(OrderCommand::simple("margherita").name(), "SimpleOrder");
        assert_eq!(OrderCommand::custom("Large", "Thin", true, false, false).name(), "CustomOrder");
    }

    #[test]
    fn test_execute_is_replayable() {
        let facade = facade();
        let command = OrderCommand::simple("rancho");

        command.execute(&facade).unwrap();
        command.execute(&facade).unwrap();

        assert_eq!(facade.registry().len(), 2);
    }

    #[test]
    fn test_execute_surfaces_rejection() {
        let facade = facade();

        let result = OrderCommand::with_toppings("pineapple", Vec::<String>::new()).execute(&facade);

        assert!(matches!(result, Err(OrderError::UnknownKind(_))));
    }
}
