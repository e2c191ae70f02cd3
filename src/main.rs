use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pizzeria::domain::pizza::{BasePizza, Pizza, PizzaCatalog, PizzaKind, Topping, ToppingLayer};
use pizzeria::kitchen::{LegacyOven, LegacyOvenAdapter, Oven};
use pizzeria::registry::{BillingObserver, KitchenDisplayObserver};
use pizzeria::{
    CommandQueue, Console, DeliveryStrategy, Metrics, MetricsObserver, OrderCommand, OrderFacade,
    OrderRegistry,
};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the order transcript
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pizzeria=debug")),
        )
        .init();

    tracing::info!("🍕 Starting pizzeria order pipeline demo");

    let console = Console::stdout();
    let metrics = Metrics::new()?;

    // === 1. Decoration ===
    console.say("=== DECORATOR ===");
    let catalog = PizzaCatalog::new(console.clone());
    let margherita = catalog.create("margherita")?;
    let decorated = ToppingLayer::new(
        Topping::ExtraCheese,
        Box::new(ToppingLayer::new(
            Topping::ExtraOlives,
            Box::new(ToppingLayer::new(Topping::StuffedCrust, margherita)),
        )),
    );
    decorated.prepare(&console);
    decorated.bake(&console);
    decorated.cut(&console);
    decorated.box_up(&console);

    // === 2. Legacy oven adapter ===
    console.say("");
    console.say("=== ADAPTER ===");
    let oven = LegacyOvenAdapter::new(LegacyOven::new(console.clone()), console.clone());
    oven.preheat(220);
    oven.bake(&BasePizza::new(PizzaKind::Rancho), 15);

    // === 3. Facade with observers ===
    console.say("");
    console.say("=== FACADE ===");
    let registry = OrderRegistry::new(console.clone());
    registry.add_observer(Arc::new(KitchenDisplayObserver::new(console.clone())));
    registry.add_observer(Arc::new(BillingObserver::new(console.clone())));
    registry.add_observer(Arc::new(MetricsObserver::new(metrics.clone())));

    let mut facade = OrderFacade::new(registry.clone(), console.clone()).with_metrics(metrics.clone());

    console.say("");
    console.say("-- Simple order --");
    facade.order_simple("margherita")?;

    console.say("");
    console.say("-- Order with toppings --");
    facade.order_with_toppings("rancho", &["cheese", "olives"])?;

    console.say("");
    console.say("-- Custom order --");
    facade.order_custom("Large", "Thin Crust", true, true, false);

    // === 4. Strategy swap ===
    console.say("");
    console.say("=== STRATEGY ===");
    facade.set_delivery_strategy(DeliveryStrategy::bike());
    facade.order_simple("barbeque")?;
    facade.set_delivery_strategy(DeliveryStrategy::car());
    facade.order_with_toppings("margherita", &["stuffed", "bogus"])?;

    // === 5. Queued commands ===
    console.say("");
    console.say("=== COMMANDS ===");
    let mut queue = CommandQueue::new().with_metrics(metrics.clone());
    queue.execute(&facade, &OrderCommand::simple("rancho"));
    queue.add_command(OrderCommand::with_toppings("barbeque", ["cheese"]));
    queue.add_command(OrderCommand::simple("unknown"));
    queue.add_command(OrderCommand::custom("Medium", "Classic", false, true, true));
    queue.process_commands(&facade);

    console.say("");
    facade.print_orders();

    console.say("");
    console.say("=== METRICS ===");
    console.say(metrics.render()?);

    tracing::info!(orders = registry.len(), "🎉 Demo complete!");

    Ok(())
}
