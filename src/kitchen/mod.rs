pub mod oven;

pub use oven::{LegacyOven, LegacyOvenAdapter, Oven};
