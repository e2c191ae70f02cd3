// ============================================================================
// Pizzeria - order composition pipeline
// ============================================================================
//
// Structure:
// - domain/   - pizzas, toppings, catalog, custom builder, errors
// - kitchen/  - oven capability and the legacy oven adapter
// - delivery/ - pluggable delivery strategies
// - registry/ - shared order ledger and its observers
// - facade    - high-level ordering operations
// - commands/ - deferred, replayable order commands and their queue
// - metrics/  - Prometheus counters
//
// ============================================================================

pub mod commands;
pub mod config;
pub mod console;
pub mod delivery;
pub mod domain;
pub mod facade;
pub mod kitchen;
pub mod metrics;
pub mod registry;

pub use commands::{CommandQueue, OrderCommand};
pub use config::PizzeriaConfig;
pub use console::Console;
pub use delivery::DeliveryStrategy;
pub use facade::OrderFacade;
pub use metrics::{Metrics, MetricsObserver};
pub use registry::{OrderObserver, OrderRecord, OrderRegistry};
