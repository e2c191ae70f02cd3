// ============================================================================
// Registry Module
// ============================================================================
//
// - order_registry/ - shared ledger of accepted orders (OrderRegistry)
// - observers/      - notification fan-out targets (OrderObserver + impls)
//
// ============================================================================

pub mod observers;
pub mod order_registry;

pub use observers::{BillingObserver, KitchenDisplayObserver, OrderObserver};
pub use order_registry::{OrderRecord, OrderRegistry};
