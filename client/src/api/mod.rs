//! Records API module.
//!
//! [`RecordStore`] is the persistence collaborator seen by the catalog;
//! [`RecordsApi`] implements it over HTTP.
//!
//! # API Endpoints
//!
//! | Method | Path                 | Body        |
//! |--------|----------------------|-------------|
//! | GET    | `/api/records`       | -           |
//! | POST   | `/api/records`       | record JSON |
//! | PUT    | `/api/records/{id}`  | record JSON |
//! | DELETE | `/api/records/{id}`  | -           |

pub mod client;
pub mod types;

use async_trait::async_trait;
use mediashelf::{Record, RecordId};

use crate::error::ApiResult;

pub use client::RecordsApi;
pub use types::records_from_value;

/// Where records live. The catalog only talks to this trait.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<Record>>;

    async fn create(&self, record: &Record) -> ApiResult<()>;

    async fn update(&self, id: &RecordId, record: &Record) -> ApiResult<()>;

    async fn delete(&self, id: &RecordId) -> ApiResult<()>;
}
