use std::sync::Arc;

use paperdesk_core::{LatencyConfig, ServiceConfig, ServiceError};
use paperdesk_store::{FixtureLoader, Latency, NoLatency, Record, RecordStore, SimulatedLatency};
use tracing::info;

use crate::billing::{summarize, BillingSummary};
use crate::model::{Customer, Publication};
use crate::search;

const CUSTOMERS_FIXTURE: &str = include_str!("../fixtures/customers.json");
const PUBLICATIONS_FIXTURE: &str = include_str!("../fixtures/publications.json");

/// Fixture file names looked up inside the configured data dir.
pub const CUSTOMERS_FILE: &str = "customers.json";
pub const PUBLICATIONS_FILE: &str = "publications.json";

/// Owns the customer and publication stores.
///
/// The two stores share no state and are locked independently.
pub struct SubscriptionService {
    customers: RecordStore<Customer>,
    publications: RecordStore<Publication>,
}

impl SubscriptionService {
    pub fn new(customers: RecordStore<Customer>, publications: RecordStore<Publication>) -> Self {
        Self {
            customers,
            publications,
        }
    }

    /// Build both stores from configuration: fixtures from `data_dir` when
    /// present (embedded otherwise), latency per the `latency` section.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let latency: Arc<dyn Latency> = if config.latency.enabled {
            Arc::new(SimulatedLatency::new(config.latency.clone()))
        } else {
            Arc::new(NoLatency)
        };

        let customers = FixtureLoader::load_or_embedded::<Customer>(
            config.resolve_fixture_path(CUSTOMERS_FILE).as_deref(),
            CUSTOMERS_FIXTURE,
        )?;
        let publications = FixtureLoader::load_or_embedded::<Publication>(
            config.resolve_fixture_path(PUBLICATIONS_FILE).as_deref(),
            PUBLICATIONS_FIXTURE,
        )?;

        info!(
            "subscription service ready (latency {})",
            if config.latency.enabled { "simulated" } else { "off" }
        );

        Ok(Self::new(
            RecordStore::with_seed(customers, latency.clone())?,
            RecordStore::with_seed(publications, latency)?,
        ))
    }

    /// Embedded fixtures, no latency. Handy for tests and demos.
    pub fn with_defaults() -> Result<Self, ServiceError> {
        Self::from_config(&ServiceConfig {
            latency: LatencyConfig::disabled(),
            ..Default::default()
        })
    }

    pub fn customers(&self) -> &RecordStore<Customer> {
        &self.customers
    }

    pub fn publications(&self) -> &RecordStore<Publication> {
        &self.publications
    }

    /// Customers matching a search term (all when empty).
    pub async fn search_customers(&self, term: &str) -> Vec<Record<Customer>> {
        search::filter(&self.customers.get_all().await, term)
    }

    /// Publications matching a search term (all when empty).
    pub async fn search_publications(&self, term: &str) -> Vec<Record<Publication>> {
        search::filter(&self.publications.get_all().await, term)
    }

    /// Snapshot both stores concurrently and fold them into a billing summary.
    pub async fn billing(&self) -> BillingSummary {
        let (customers, publications) =
            tokio::join!(self.customers.get_all(), self.publications.get_all());
        summarize(&customers, &publications)
    }
}
