use crate::console::Console;
use crate::domain::pizza::Pizza;

// ============================================================================
// Oven Capability & Legacy Oven Adapter
// ============================================================================
//
// The order pipeline expects an `Oven` (preheat + bake a pizza). The only
// oven on hand is the legacy unit with a heat/cook interface, so the
// adapter translates between the two.
//
// ============================================================================

/// Oven interface used by the order pipeline
pub trait Oven: Send + Sync {
    fn preheat(&self, degrees: u32);
    fn bake(&self, pizza: &dyn Pizza, minutes: u32);
}

/// Pre-existing heating/cooking unit
#[derive(Clone, Debug)]
pub struct LegacyOven {
    console: Console,
}

impl LegacyOven {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn heat_up(&self, degrees: u32) {
        self.console.say(format!("Legacy oven heating up to {} degrees", degrees));
    }

    pub fn cook(&self, minutes: u32) {
        self.console.say(format!("Legacy oven cooking for {} minutes", minutes));
    }
}

pub struct LegacyOvenAdapter {
    legacy: LegacyOven,
    console: Console,
}

impl LegacyOvenAdapter {
    pub fn new(legacy: LegacyOven, console: Console) -> Self {
        Self { legacy, console }
    }
}

impl Oven for LegacyOvenAdapter {
    fn preheat(&self, degrees: u32) {
        self.legacy.heat_up(degrees);
    }

    /// prepare -> legacy cook -> cut -> box. The pizza's own `bake` step is
    /// replaced by the legacy cook cycle.
    fn bake(&self, pizza: &dyn Pizza, minutes: u32) {
        tracing::debug!(pizza = %pizza.label(), minutes, "Baking in legacy oven");
        pizza.prepare(&self.console);
        self.legacy.cook(minutes);
        pizza.cut(&self.console);
        pizza.box_up(&self.console);
    }
}
