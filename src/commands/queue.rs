use crate::facade::OrderFacade;
use crate::metrics::Metrics;
use super::command::OrderCommand;

// ============================================================================
// Command Queue - immediate or batched execution of order commands
// ============================================================================
//
// `process_commands` is a single pass in insertion order: a rejected order
// is logged and the next command still runs. The queue is empty afterwards.
//
// ============================================================================

#[derive(Default)]
pub struct CommandQueue {
    queue: Vec<OrderCommand>,
    metrics: Option<Metrics>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run one command right away
    pub fn execute(&self, facade: &OrderFacade, command: &OrderCommand) {
        self.run(facade, command);
    }

    pub fn add_command(&mut self, command: OrderCommand) {
        tracing::debug!(command = command.name(), pending = self.queue.len() + 1, "Queued command");
        self.queue.push(command);
    }

    /// Run every queued command in order, then clear the queue
    pub fn process_commands(&mut self, facade: &OrderFacade) {
        let pending = std::mem::take(&mut self.queue);
        tracing::info!(count = pending.len(), "Processing queued commands");

        for command in &pending {
            self.run(facade, command);
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn run(&self, facade: &OrderFacade, command: &OrderCommand) {
        if let Err(err) = command.execute(facade) {
            tracing::warn!(command = command.name(), error = %err, "Command rejected");
        }
        if let Some(metrics) = &self.metrics {
            metrics.commands_processed.inc();
        }
    }
}
