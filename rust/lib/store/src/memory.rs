//! In-memory record store.

use std::collections::HashSet;
use std::sync::Arc;

use paperdesk_core::{now_rfc3339, RecordId, ServiceError};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::latency::{Latency, Operation};
use crate::record::{Fields, Record};

/// In-memory CRUD store for one entity type.
///
/// Records keep insertion order. Every record returned is an owned clone,
/// so callers can never reach into the store's sequence. Each operation
/// does its lookup and mutation inside one critical section, then waits
/// out its latency with the lock released; operations therefore apply in
/// the order they were issued even when their delays differ.
pub struct RecordStore<F: Fields> {
    state: Mutex<StoreState<F>>,
    latency: Arc<dyn Latency>,
}

struct StoreState<F> {
    records: Vec<Record<F>>,
    /// Largest id ever held. Freed ids stay below it.
    high_water: RecordId,
}

impl<F> StoreState<F> {
    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl<F: Fields> RecordStore<F> {
    /// Create an empty store.
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                records: Vec::new(),
                high_water: 0,
            }),
            latency,
        }
    }

    /// Create a store seeded with `seed`, kept in the given order.
    /// Fails with `Conflict` if two seed records share an id, and with
    /// `Validation` if the largest seed id leaves no id for `create`.
    pub fn with_seed(seed: Vec<Record<F>>, latency: Arc<dyn Latency>) -> Result<Self, ServiceError> {
        let mut seen = HashSet::with_capacity(seed.len());
        for record in &seed {
            if !seen.insert(record.id) {
                return Err(ServiceError::Conflict(format!(
                    "{} '{}' appears more than once in seed data",
                    F::ENTITY,
                    record.id
                )));
            }
        }

        let high_water = seed.iter().map(|r| r.id).max().unwrap_or(0);
        if high_water == RecordId::MAX {
            return Err(ServiceError::Validation(format!(
                "{} id {} in seed data leaves no id for new records",
                F::ENTITY,
                high_water
            )));
        }
        info!("{} store seeded with {} records", F::ENTITY, seed.len());

        Ok(Self {
            state: Mutex::new(StoreState {
                records: seed,
                high_water,
            }),
            latency,
        })
    }

    fn not_found(id: RecordId) -> ServiceError {
        ServiceError::NotFound(format!("{} '{}' not found", F::ENTITY, id))
    }

    /// All records, in current order.
    pub async fn get_all(&self) -> Vec<Record<F>> {
        let records = self.state.lock().await.records.clone();
        self.latency.wait(Operation::GetAll).await;
        records
    }

    /// Get one record, or NotFound.
    pub async fn get_by_id(&self, id: RecordId) -> Result<Record<F>, ServiceError> {
        let found = {
            let state = self.state.lock().await;
            state.position(id).map(|i| state.records[i].clone())
        };
        self.latency.wait(Operation::GetById).await;
        found.ok_or_else(|| Self::not_found(id))
    }

    /// Number of records currently held.
    pub async fn count(&self) -> usize {
        self.state.lock().await.records.len()
    }

    /// Append a new record. The store assigns the id and `createdAt`.
    ///
    /// Panics once `RecordId::MAX` has been handed out; `with_seed` never
    /// starts a store there.
    pub async fn create(&self, fields: F) -> Record<F> {
        let created = {
            let mut state = self.state.lock().await;
            let id = next_id(state.high_water);
            state.high_water = id;
            let record = Record::new(id, fields, now_rfc3339());
            state.records.push(record.clone());
            record
        };
        debug!("{} '{}' created", F::ENTITY, created.id);
        self.latency.wait(Operation::Create).await;
        created
    }

    /// Merge `patch` over the record's fields. Id and `createdAt` are kept.
    pub async fn update(&self, id: RecordId, patch: F::Patch) -> Result<Record<F>, ServiceError> {
        let updated = {
            let mut state = self.state.lock().await;
            let pos = state.position(id);
            pos.map(|i| {
                let record = &mut state.records[i];
                record.fields.merge(patch);
                record.clone()
            })
        };
        self.latency.wait(Operation::Update).await;
        match updated {
            Some(record) => {
                debug!("{} '{}' updated", F::ENTITY, id);
                Ok(record)
            }
            None => Err(Self::not_found(id)),
        }
    }

    /// Remove a record, or NotFound.
    pub async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
        let removed = {
            let mut state = self.state.lock().await;
            state.position(id).map(|i| state.records.remove(i))
        };
        self.latency.wait(Operation::Delete).await;
        match removed {
            Some(_) => {
                debug!("{} '{}' deleted", F::ENTITY, id);
                Ok(())
            }
            None => Err(Self::not_found(id)),
        }
    }
}

fn next_id(high_water: RecordId) -> RecordId {
    match high_water.checked_add(1) {
        Some(id) => id,
        None => panic!("record id space exhausted"),
    }
}
