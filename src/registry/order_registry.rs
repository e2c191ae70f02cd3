use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::console::Console;
use crate::domain::pizza::Pizza;
use super::observers::OrderObserver;

// ============================================================================
// Order Registry - the shared ledger of accepted orders
// ============================================================================
//
// One registry is created at start-up and its handle is cloned into every
// component that records or reads orders. Clones share the same ledger.
//
// Invariants:
// - Orders are append-only; insertion order is the only index
// - Observers are notified synchronously, in registration order
// - Append + notify form one critical section (the mutator lock); the
//   ledger lock is released before observers run, so they may read it
//
// ============================================================================

/// Ledger entry; keeps the order's label, not the pizza itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: Uuid,
    pub label: String,
    pub placed_at: DateTime<Utc>,
}

#[derive(Default)]
struct RegistryState {
    orders: Vec<OrderRecord>,
    observers: Vec<Arc<dyn OrderObserver>>,
}

#[derive(Clone)]
pub struct OrderRegistry {
    state: Arc<Mutex<RegistryState>>,
    mutator: Arc<Mutex<()>>,
    console: Console,
}

impl OrderRegistry {
    pub fn new(console: Console) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState::default())),
            mutator: Arc::new(Mutex::new(())),
            console,
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record an order and notify every observer.
    ///
    /// Observers may read the registry while being notified but must not
    /// add orders from inside `on_order_added`.
    pub fn add_order(&self, pizza: &dyn Pizza) -> OrderRecord {
        let record = OrderRecord {
            order_id: Uuid::new_v4(),
            label: pizza.label().to_string(),
            placed_at: Utc::now(),
        };

        let _mutation = self.mutator.lock().unwrap_or_else(PoisonError::into_inner);

        let observers = {
            let mut state = self.lock();
            state.orders.push(record.clone());
            state.observers.clone()
        };
        self.console.say(format!("Order added: {}", record.label));

        tracing::info!(
            order_id = %record.order_id,
            label = %record.label,
            observers = observers.len(),
            "Order recorded"
        );

        for observer in &observers {
            observer.on_order_added(&record.label);
        }

        record
    }

    /// Register an observer; it only hears about orders added from now on
    pub fn add_observer(&self, observer: Arc<dyn OrderObserver>) {
        self.lock().observers.push(observer);
    }

    /// Labels of all recorded orders in insertion order.
    ///
    /// Iterates over a snapshot; call again to start over.
    pub fn show_orders(&self) -> impl Iterator<Item = String> {
        self.orders().into_iter().map(|record| record.label)
    }

    pub fn orders(&self) -> Vec<OrderRecord> {
        self.lock().orders.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    pub fn print_orders(&self) {
        self.console.say("Current Orders:");
        for label in self.show_orders() {
            self.console.say(format!("- {}", label));
        }
    }
}
