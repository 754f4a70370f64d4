use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use tally_core::{DomainError, DomainResult, Entity, ReceiptId};
use tally_infra::{InMemoryStore, KeyValueStore, StoreError};
use tally_receipts::{Receipt, ScoredReceipt};

/// Where scored receipts live, keyed by their minted identifier.
pub type ReceiptStore = dyn KeyValueStore<ReceiptId, ScoredReceipt>;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Operations behind the HTTP handlers.
pub struct AppServices {
    receipts: Arc<ReceiptStore>,
}

impl AppServices {
    pub fn new(receipts: Arc<ReceiptStore>) -> Self {
        Self { receipts }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::<ReceiptId, ScoredReceipt>::new()))
    }

    /// Validate, score and store a receipt under a fresh identifier.
    ///
    /// Every call mints a new identifier, including for a receipt identical to
    /// one already stored. The store write has completed when this returns.
    pub fn process_receipt(&self, receipt: Receipt) -> Result<ScoredReceipt, ProcessError> {
        let id = ReceiptId::new();
        let scored = ScoredReceipt::score(id, receipt, Utc::now())?;
        self.receipts.put(id, scored.clone())?;

        tracing::debug!(
            receipt_id = %scored.id(),
            breakdown = ?scored.breakdown(),
            "receipt scored"
        );
        Ok(scored)
    }

    /// Points for the receipt stored under `id`, as received on the wire.
    ///
    /// Fails with `InvalidId` when `id` is not an identifier at all and with
    /// `NotFound` when nothing is stored under it.
    pub fn points(&self, id: &str) -> DomainResult<u64> {
        let id: ReceiptId = id.parse()?;
        self.receipts
            .get(&id)
            .map(|scored| scored.points())
            .ok_or_else(DomainError::not_found)
    }

    pub fn stored_receipts(&self) -> usize {
        self.receipts.len()
    }
}
