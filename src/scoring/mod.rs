pub mod aggregate;
pub mod extractor;
pub mod hooks;
pub mod tips;

pub use aggregate::FactorWeights;
pub use extractor::{Extraction, FactorDeltas};
pub use hooks::HookSignal;
