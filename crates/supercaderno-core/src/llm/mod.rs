//! Model-caller seam
//!
//! Single integration point for language models. Everything here is a
//! deterministic placeholder with the interface the real client will
//! have; the cache gate and the call counters are already live.

mod caller;
mod gate;

pub use caller::{GenerationRequest, ModelCaller, ModelTier, StubCaller};
pub use gate::{CachedCaller, CallCounters, CallTotals};
