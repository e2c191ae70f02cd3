pub mod command;
pub mod queue;

pub use command::OrderCommand;
pub use queue::CommandQueue;
