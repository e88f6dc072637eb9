use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub transaction_id: i32,
    pub order_id: String,
    pub user_id: i32,
    pub product_id: i32,
    pub amount: i64,
    pub status: String,
    pub payment_method: String,
    pub description: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Closed set of transaction states. Stored as lowercase text; every write
/// goes through [`TransactionStatus::can_transition_to`] so rows never hold
/// a string outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Completed,
    Refunded,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Refunded => "refunded",
            TransactionStatus::Failed => "failed",
        }
    }

    /// Forward-only lifecycle:
    /// pending → processing | failed, processing → completed | failed,
    /// completed → refunded. Refunded and failed are terminal. Re-asserting
    /// the current status is an accepted no-op.
    pub fn can_transition_to(&self, target: TransactionStatus) -> bool {
        if *self == target {
            return true;
        }
        matches!(
            (self, target),
            (TransactionStatus::Pending, TransactionStatus::Processing)
                | (TransactionStatus::Pending, TransactionStatus::Failed)
                | (TransactionStatus::Processing, TransactionStatus::Completed)
                | (TransactionStatus::Processing, TransactionStatus::Failed)
                | (TransactionStatus::Completed, TransactionStatus::Refunded)
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TransactionStatus::Pending),
            "processing" => Ok(TransactionStatus::Processing),
            "completed" => Ok(TransactionStatus::Completed),
            "refunded" => Ok(TransactionStatus::Refunded),
            "failed" => Ok(TransactionStatus::Failed),
            other => Err(format!("unknown transaction status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionStatus::*;
    use super::*;

    #[test]
    fn legal_transitions_are_accepted() {
        assert!(Pending.can_transition_to(Processing));
        assert!(Pending.can_transition_to(Failed));
        assert!(Processing.can_transition_to(Completed));
        assert!(Processing.can_transition_to(Failed));
        assert!(Completed.can_transition_to(Refunded));
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Refunded));
        assert!(!Processing.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Failed));
        assert!(!Refunded.can_transition_to(Completed));
        assert!(!Failed.can_transition_to(Pending));
    }

    #[test]
    fn same_status_is_idempotent() {
        for status in [Pending, Processing, Completed, Refunded, Failed] {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn parse_and_display_round_trip() {
        for status in [Pending, Processing, Completed, Refunded, Failed] {
            assert_eq!(status.as_str().parse::<TransactionStatus>(), Ok(status));
        }
        assert!("shipped".parse::<TransactionStatus>().is_err());
    }
}
