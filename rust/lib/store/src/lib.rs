//! PaperDesk record stores.
//!
//! A store owns the ordered, in-memory sequence of records for one entity
//! type. The entity payload implements `Fields` to declare its name and
//! its partial-update type; ids and creation timestamps are managed by the
//! store.
//!
//! ```ignore
//! let store = RecordStore::with_seed(seed, Arc::new(NoLatency))?;
//! let created = store.create(customer_fields).await;
//! store.update(created.id, CustomerPatch { status: Some(..), ..Default::default() }).await?;
//! ```

pub mod fixture;
pub mod latency;
pub mod memory;
pub mod record;

pub use fixture::FixtureLoader;
pub use latency::{Latency, NoLatency, Operation, SimulatedLatency};
pub use memory::RecordStore;
pub use record::{Fields, Record};
