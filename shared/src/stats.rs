use crate::assignment::{Assignment, AssignmentStatus, PaymentStatus};
use serde::{Deserialize, Serialize};

/// Summary numbers for the four stat cards, derived from the assignment list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
    /// Sum of payments already marked paid
    pub earned: f64,
}

impl DashboardStats {
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let count = |status: AssignmentStatus| assignments.iter().filter(|a| a.status == status).count();

        let earned: f64 = assignments
            .iter()
            .filter(|a| a.payment.status == PaymentStatus::Paid)
            .map(|a| a.payment.amount)
            .sum();

        Self {
            total: assignments.len(),
            upcoming: count(AssignmentStatus::Upcoming),
            completed: count(AssignmentStatus::Completed),
            earned,
        }
    }
}
