//! Player statistics
//!
//! The pure aggregation rule, the stores it is persisted through, and the
//! recorder that connects finished sessions to a store.

mod aggregate;
mod recorder;
mod store;

pub use aggregate::{GuessDistribution, PlayerStatistics, record_outcome};
pub use recorder::{RecordError, Recorder};
pub use store::{DeviceStore, MemoryStore, PlayerId, StatsStore, StoreError};
pub(crate) use store::checked_on_load;
