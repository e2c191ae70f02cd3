use crate::console::Console;

// ============================================================================
// Order Observers
// ============================================================================

/// Anything that wants to hear about newly recorded orders
pub trait OrderObserver: Send + Sync {
    fn on_order_added(&self, label: &str);
}

/// Kitchen screen showing incoming orders
pub struct KitchenDisplayObserver {
    console: Console,
}

impl KitchenDisplayObserver {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl OrderObserver for KitchenDisplayObserver {
    fn on_order_added(&self, label: &str) {
        self.console.say(format!("[Kitchen] New order received: {}", label));
    }
}

pub struct BillingObserver {
    console: Console,
}

impl BillingObserver {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl OrderObserver for BillingObserver {
    fn on_order_added(&self, label: &str) {
        self.console.say(format!("[Billing] Registering order for billing: {}", label));
    }
}
