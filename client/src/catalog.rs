//! The catalog session.
//!
//! [`Catalog`] owns the current record list, the only mutable state in the
//! application. Every read goes through the pure core (`summarize`,
//! `RecordFilter`) and every write is validated before the store sees it,
//! then followed by a full reload so the list always mirrors the store.

use mediashelf::{summarize, RawForm, Record, RecordFilter, RecordId, StatsSummary};

use crate::api::RecordStore;
use crate::error::{CatalogError, CatalogResult};
use crate::logs::{log_debug, log_success};

pub struct Catalog<S> {
    store: S,
    records: Vec<Record>,
}

impl<S: RecordStore> Catalog<S> {
    /// Empty catalog; call [`Catalog::refresh`] to load.
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the current list with the store's.
    pub async fn refresh(&mut self) -> CatalogResult<()> {
        self.records = self.store.list().await?;
        log_debug(format!("loaded {} record(s)", self.records.len()));
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id.as_ref() == Some(id))
    }

    pub fn filtered(&self, filter: &RecordFilter) -> Vec<&Record> {
        filter.apply(&self.records)
    }

    /// Fresh statistics over the current list.
    pub fn stats(&self) -> StatsSummary {
        summarize(&self.records)
    }

    /// Validate a form and save it: create without `id`, update with one.
    ///
    /// Invalid forms return every violation and never reach the store.
    pub async fn submit(&mut self, form: &RawForm, id: Option<RecordId>) -> CatalogResult<()> {
        let record = form.parse().into_record(None)?;

        match &id {
            Some(id) => {
                if self.find(id).is_none() {
                    return Err(CatalogError::NotFound(id.clone()));
                }
                self.store.update(id, &record).await?;
                log_success(format!("Updated \"{}\"", record.title));
            }
            None => {
                self.store.create(&record).await?;
                log_success(format!("Added \"{}\"", record.title));
            }
        }

        self.refresh().await
    }

    /// Delete a record by id and return what was removed.
    pub async fn remove(&mut self, id: &RecordId) -> CatalogResult<Record> {
        let record = self
            .find(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        self.store.delete(id).await?;
        log_success(format!("Deleted \"{}\"", record.title));

        self.refresh().await?;
        Ok(record)
    }
}
