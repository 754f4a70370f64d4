use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{DomainResult, Entity, ReceiptId};

use crate::receipt::Receipt;
use crate::scoring::{self, PointsBreakdown};
use crate::validation;

/// A receipt that was accepted and scored, keyed by its minted identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    id: ReceiptId,
    receipt: Receipt,
    breakdown: PointsBreakdown,
    scored_at: DateTime<Utc>,
}

impl ScoredReceipt {
    /// Validate and score `receipt` under `id`.
    ///
    /// Fails with `DomainError::Validation` when the receipt may not be scored.
    pub fn score(id: ReceiptId, receipt: Receipt, scored_at: DateTime<Utc>) -> DomainResult<Self> {
        let breakdown = {
            let validated = validation::check(&receipt)?;
            scoring::breakdown(&validated)
        };

        Ok(Self {
            id,
            receipt,
            breakdown,
            scored_at,
        })
    }

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    pub fn points(&self) -> u64 {
        self.breakdown.total()
    }

    pub fn breakdown(&self) -> &PointsBreakdown {
        &self.breakdown
    }

    pub fn scored_at(&self) -> DateTime<Utc> {
        self.scored_at
    }
}

impl Entity for ScoredReceipt {
    type Id = ReceiptId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
