//! Subscription module: customers, the publication catalog and the
//! billing overview built on top of them.

pub mod billing;
pub mod model;
pub mod search;
pub mod service;

pub use billing::{summarize, BillingSummary};
pub use search::{filter, Searchable};
pub use service::SubscriptionService;
