// ============================================================================
// Domain Layer - Products
// ============================================================================
//
// Everything about what a pizza is and how one gets built. Orchestration
// (oven, registry, delivery) lives outside this layer.
//
// ============================================================================

pub mod pizza;
