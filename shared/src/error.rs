use crate::assignment::AssignmentId;
use thiserror::Error;

/// Errors raised while ingesting assignment data or driving the selection.
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("invalid assignment data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("assignment {id} has an invalid date {value:?}")]
    InvalidDate { id: AssignmentId, value: String },

    #[error("assignment id {0} appears more than once")]
    DuplicateId(AssignmentId),

    #[error("assignment {id} has an invalid payment amount {amount}")]
    InvalidPaymentAmount { id: AssignmentId, amount: f64 },

    #[error("no assignment with id {0}")]
    UnknownAssignment(AssignmentId),
}
