use crate::config::PizzeriaConfig;
use crate::console::Console;
use crate::delivery::DeliveryStrategy;
use crate::domain::pizza::{apply_toppings, CustomPizza, OrderError, Pizza, PizzaCatalog};
use crate::kitchen::{LegacyOven, LegacyOvenAdapter, Oven};
use crate::metrics::Metrics;
use crate::registry::OrderRegistry;

// ============================================================================
// Order Facade - single entry point for placing orders
// ============================================================================
//
// Orchestrates: Catalog → Toppings → Oven → Registry → Delivery
//
// Custom orders only go through the builder and delivery; they are never
// baked in the oven or recorded in the registry.
//
// ============================================================================

pub struct OrderFacade {
    config: PizzeriaConfig,
    catalog: PizzaCatalog,
    oven: Box<dyn Oven>,
    registry: OrderRegistry,
    delivery: DeliveryStrategy,
    metrics: Option<Metrics>,
    console: Console,
}

impl OrderFacade {
    pub fn new(registry: OrderRegistry, console: Console) -> Self {
        Self::with_config(registry, console, PizzeriaConfig::default())
    }

    pub fn with_config(registry: OrderRegistry, console: Console, config: PizzeriaConfig) -> Self {
        let oven = LegacyOvenAdapter::new(LegacyOven::new(console.clone()), console.clone());

        Self {
            config,
            catalog: PizzaCatalog::new(console.clone()),
            oven: Box::new(oven),
            registry,
            delivery: DeliveryStrategy::default(),
            metrics: None,
            console,
        }
    }

    /// Count deliveries in `metrics`
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Takes effect for every delivery made after the call
    pub fn set_delivery_strategy(&mut self, strategy: DeliveryStrategy) {
        tracing::info!(from = %self.delivery.mode(), to = %strategy.mode(), "Switching delivery strategy");
        self.delivery = strategy;
    }

    pub fn delivery_strategy(&self) -> &DeliveryStrategy {
        &self.delivery
    }

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PizzeriaConfig {
        &self.config
    }

    /// Catalog pizza, baked, recorded and delivered
    pub fn order_simple(&self, kind: &str) -> Result<Box<dyn Pizza>, OrderError> {
        let pizza = self.create(kind)?;

        self.oven.preheat(self.config.preheat_degrees);
        self.oven.bake(pizza.as_ref(), self.config.simple_bake_minutes);

        self.registry.add_order(pizza.as_ref());
        self.deliver(pizza.label());

        Ok(pizza)
    }

    /// Like `order_simple`, with the toppings folded on before baking.
    /// Unknown toppings are reported and skipped.
    pub fn order_with_toppings<S: AsRef<str>>(
        &self,
        kind: &str,
        toppings: &[S],
    ) -> Result<Box<dyn Pizza>, OrderError> {
        let base = self.create(kind)?;
        let pizza = apply_toppings(base, toppings, &self.console);

        self.oven.preheat(self.config.preheat_degrees);
        self.oven.bake(pizza.as_ref(), self.config.topping_bake_minutes);

        self.registry.add_order(pizza.as_ref());
        self.deliver(pizza.label());

        Ok(pizza)
    }

    /// Build, show and deliver a custom pizza. Only flags that are set add
    /// the matching extra.
    pub fn order_custom(
        &self,
        size: &str,
        crust: &str,
        cheese: bool,
        pepperoni: bool,
        mushrooms: bool,
    ) -> CustomPizza {
        let mut builder = CustomPizza::builder().size(size).crust_type(crust);

        if cheese {
            builder = builder.add_extra_cheese();
        }
        if pepperoni {
            builder = builder.add_extra_pepperoni();
        }
        if mushrooms {
            builder = builder.add_extra_mushrooms();
        }

        let pizza = builder.build();

        self.console.say("[Custom Pizza Created]");
        pizza.display(&self.console);

        self.deliver(&self.config.custom_order_label);

        pizza
    }

    pub fn print_orders(&self) {
        self.registry.print_orders();
    }

    fn create(&self, kind: &str) -> Result<Box<dyn Pizza>, OrderError> {
        self.catalog
            .create(kind)
            .inspect_err(|_| self.console.say("Invalid pizza type!"))
    }

    fn deliver(&self, label: &str) {
        if let Some(metrics) = &self.metrics {
            metrics
                .deliveries_total
                .with_label_values(&[self.delivery.mode()])
                .inc();
        }
        self.delivery.deliver(&self.console, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::domain::pizza::{PizzaKind, Topping};
    use crate::registry::{BillingObserver, KitchenDisplayObserver};

    fn facade() -> (OrderFacade, Console) {
        let console = Console::capture();
        let registry = OrderRegistry::new(console.clone());
        (OrderFacade::new(registry, console.clone()), console)
    }

    #[test]
    fn test_order_simple_full_sequence() {
        let (facade, console) = facade();

        let pizza = facade.order_simple("margherita").unwrap();

        assert_eq!(pizza.kind(), PizzaKind::Margherita);
        assert_eq!(
            console.lines(),
            vec![
                "Legacy oven heating up to 220 degrees",
                "Preparing Margherita Pizza",
                "Legacy oven cooking for 15 minutes",
                "Cutting Margherita Pizza into 6 slices",
                "Boxing Margherita Pizza",
                "Order added: Margherita",
                "[Pickup] Customer will pick up the order \"Margherita\" from the pizzeria.",
            ]
        );
    }

    #[test]
    fn test_order_simple_rejects_unknown_kind() {
        let (facade, console) = facade();

        let result = facade.order_simple("calzone");

        assert_eq!(result.unwrap_err(), OrderError::UnknownKind("calzone".to_string()));
        assert_eq!(console.lines(), vec!["Invalid pizza type: calzone", "Invalid pizza type!"]);
        assert!(facade.registry().is_empty());
    }

    #[test]
    fn test_order_with_toppings_skips_unknown() {
        let (facade, console) = facade();

        let pizza = facade.order_with_toppings("rancho", &["cheese", "bogus"]).unwrap();

        assert_eq!(pizza.toppings(), vec![Topping::ExtraCheese]);
        assert_eq!(facade.registry().show_orders().collect::<Vec<_>>(), vec!["Rancho"]);

        let lines = console.lines();
        assert_eq!(lines[0], "Unknown topping: bogus");
        assert!(lines.contains(&"Legacy oven cooking for 18 minutes".to_string()));
        assert!(lines.contains(&" + adding extra cheese".to_string()));
    }

    #[test]
    fn test_order_with_toppings_prepare_order() {
        let (facade, console) = facade();

        facade.order_with_toppings("margherita", &["cheese", "olives"]).unwrap();

        assert_eq!(
            console.lines()[1..4],
            [
                "Preparing Margherita Pizza",
                " + adding extra cheese",
                " + adding extra olives",
            ]
        );
    }

    #[test]
    fn test_order_with_toppings_rejects_unknown_kind() {
        let (facade, _console) = facade();

        let result = facade.order_with_toppings("", &["cheese"]);

        assert_eq!(result.unwrap_err(), OrderError::EmptyKind);
        assert!(facade.registry().is_empty());
    }

    #[test]
    fn test_order_custom_not_registered() {
        let (facade, console) = facade();

        let pizza = facade.order_custom("Large", "Thin Crust", true, false, true);

        assert_eq!(pizza.size(), "Large");
        assert_eq!(pizza.crust_type(), "Thin Crust");
        assert!(pizza.extra_cheese());
        assert!(!pizza.extra_pepperoni());
        assert!(pizza.extra_mushrooms());
        assert!(facade.registry().is_empty());

        let lines = console.lines();
        assert_eq!(lines[0], "[Custom Pizza Created]");
        assert_eq!(
            lines.last().unwrap(),
            "[Pickup] Customer will pick up the order \"CustomPizza\" from the pizzeria."
        );
        assert!(lines.iter().all(|line| !line.starts_with("Legacy oven")));
    }

    #[test]
    fn test_current_strategy_used_at_delivery_time() {
        let (mut facade, console) = facade();

        facade.set_delivery_strategy(DeliveryStrategy::bike());
        facade.order_simple("barbeque").unwrap();
        facade.set_delivery_strategy(DeliveryStrategy::car());
        facade.order_custom("Small", "Classic", false, false, false);

        let lines = console.lines();
        assert!(lines.contains(&"[Delivery-Bike] Delivering order \"Barbeque\" by bike.".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "[Delivery-Car] Delivering order \"CustomPizza\" by car."
        );
        assert_eq!(facade.delivery_strategy().mode(), "car");
    }

    #[test]
    fn test_observers_notified_by_orders() {
        let (facade, console) = facade();
        facade
            .registry()
            .add_observer(Arc::new(KitchenDisplayObserver::new(console.clone())));
        facade
            .registry()
            .add_observer(Arc::new(BillingObserver::new(console.clone())));

        facade.order_simple("rancho").unwrap();

        let lines = console.lines();
        let added = lines.iter().position(|l| l == "Order added: Rancho").unwrap();
        assert_eq!(lines[added + 1], "[Kitchen] New order received: Rancho");
        assert_eq!(lines[added + 2], "[Billing] Registering order for billing: Rancho");
    }

    #[test]
    fn test_config_drives_oven_parameters() {
        let console = Console::capture();
        let config = PizzeriaConfig {
            preheat_degrees: 250,
            simple_bake_minutes: 12,
            ..PizzeriaConfig::default()
        };
        let facade = OrderFacade::with_config(OrderRegistry::new(console.clone()), console.clone(), config);

        facade.order_simple("rancho").unwrap();

        let lines = console.lines();
        assert_eq!(lines[0], "Legacy oven heating up to 250 degrees");
        assert_eq!(lines[2], "Legacy oven cooking for 12 minutes");
        assert_eq!(facade.config().preheat_degrees, 250);
    }

    #[test]
    fn test_deliveries_counted_in_metrics() {
        let console = Console::capture();
        let metrics = Metrics::new().unwrap();
        let facade = OrderFacade::new(OrderRegistry::new(console.clone()), console)
            .with_metrics(metrics.clone());

        facade.order_simple("rancho").unwrap();
        facade.order_custom("Large", "Thin", false, true, false);

        assert_eq!(metrics.deliveries_total.with_label_values(&["pickup"]).get(), 2);
    }

    #[test]
    fn test_shared_registry_across_facades() {
        let console = Console::capture();
        let registry = OrderRegistry::new(console.clone());
        let first = OrderFacade::new(registry.clone(), console.clone());
        let second = OrderFacade::new(registry.clone(), console);

        first.order_simple("rancho").unwrap();
        second.order_simple("margherita").unwrap();

        assert_eq!(
            registry.show_orders().collect::<Vec<_>>(),
            vec!["Rancho", "Margherita"]
        );
    }

    #[test]
    fn test_print_orders() {
        let (facade, console) = facade();
        facade.order_simple("barbeque").unwrap();
        console.take_lines();

        facade.print_orders();

        assert_eq!(console.lines(), vec!["Current Orders:", "- Barbeque"]);
    }
}
