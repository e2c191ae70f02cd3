use std::sync::{Arc, Mutex, PoisonError};

// ============================================================================
// Console - Customer-facing progress stream
// ============================================================================
//
// Every progress or diagnostic line the pizzeria produces goes through a
// Console handle. Clones share the same sink, so the order of lines across
// components is exactly the order in which operations ran.
//
// Sinks:
// - Stdout:   print each line as it is written
// - Captured: keep an in-memory transcript (used by tests and tooling)
//
// ============================================================================

#[derive(Debug)]
enum Sink {
    Stdout,
    Captured(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct Console {
    sink: Arc<Mutex<Sink>>,
}

impl Console {
    /// Console that prints to standard output
    pub fn stdout() -> Self {
        Self {
            sink: Arc::new(Mutex::new(Sink::Stdout)),
        }
    }

    /// Console that records every line into a transcript
    pub fn capture() -> Self {
        Self {
            sink: Arc::new(Mutex::new(Sink::Captured(Vec::new()))),
        }
    }

    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "pizzeria::console", "{}", line);

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *sink {
            Sink::Stdout => println!("{}", line),
            Sink::Captured(lines) => lines.push(line),
        }
    }

    /// Snapshot of the captured transcript (empty for stdout consoles)
    pub fn lines(&self) -> Vec<String> {
        let sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &*sink {
            Sink::Stdout => Vec::new(),
            Sink::Captured(lines) => lines.clone(),
        }
    }

    /// Drain the captured transcript, leaving it empty
    pub fn take_lines(&self) -> Vec<String> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *sink {
            Sink::Stdout => Vec::new(),
            Sink::Captured(lines) => std::mem::take(lines),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}
