pub mod batch_processor;

pub use batch_processor::{BatchProcessor, BatchRow, BatchSummary};
