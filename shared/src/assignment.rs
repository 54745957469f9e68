//! Assignment records and the ingestion path that turns raw JSON into them.
//!
//! Every record that reaches the view layer has passed through
//! [`parse_assignments`], so the presentation rules can rely on a parsed
//! calendar date, unique ids and a non-negative payment amount.

use crate::error::AssignmentError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique identifier of an assignment within a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(pub u32);

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle stage of an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// Lifecycle stage of the payment attached to an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Cancelled,
}

/// Subjects a substitute can cover. Each one maps to a translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Mathematics,
    Science,
    English,
    Arabic,
    History,
    Physics,
}

impl Subject {
    /// Translation key for the subject name
    pub fn translation_key(&self) -> &'static str {
        match self {
            Subject::Mathematics => "subjects.mathematics",
            Subject::Science => "subjects.science",
            Subject::English => "subjects.english",
            Subject::Arabic => "subjects.arabic",
            Subject::History => "subjects.history",
            Subject::Physics => "subjects.physics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: f64,
    pub status: PaymentStatus,
}

/// A single scheduled teaching engagement. Built only by [`parse_assignments`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub school: String,
    /// Calendar date of the engagement, no time zone
    pub date: NaiveDate,
    /// Free-text time range, e.g. "08:00 - 14:00"
    pub time_slot: String,
    pub subject: Subject,
    pub grade: String,
    pub location: String,
    pub status: AssignmentStatus,
    pub teacher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub payment: Payment,
}

impl Assignment {
    pub fn is_upcoming(&self) -> bool {
        self.status == AssignmentStatus::Upcoming
    }

    /// Notes with surrounding whitespace removed, `None` when absent or blank
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Date value standing for "the current local date" in a dataset
const TODAY: &str = "today";

/// Wire shape of an assignment before its date has been checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssignment {
    id: AssignmentId,
    school: String,
    date: String,
    time_slot: String,
    subject: Subject,
    grade: String,
    location: String,
    status: AssignmentStatus,
    teacher: String,
    #[serde(default)]
    notes: Option<String>,
    payment: Payment,
}

impl RawAssignment {
    fn validate(self, today: NaiveDate) -> Result<Assignment, AssignmentError> {
        let date = match self.date.trim() {
            TODAY => today,
            value => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                AssignmentError::InvalidDate {
                    id: self.id,
                    value: self.date.clone(),
                }
            })?,
        };

        if !self.payment.amount.is_finite() || self.payment.amount < 0.0 {
            return Err(AssignmentError::InvalidPaymentAmount {
                id: self.id,
                amount: self.payment.amount,
            });
        }

        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Assignment {
            id: self.id,
            school: self.school,
            date,
            time_slot: self.time_slot,
            subject: self.subject,
            grade: self.grade,
            location: self.location,
            status: self.status,
            teacher: self.teacher,
            notes,
            payment: self.payment,
        })
    }
}

/// Parse and validate a JSON array of assignments.
///
/// Unknown enum values are rejected by serde. Dates must be `YYYY-MM-DD`
/// or `"today"`, which resolves to `today`. Ids must be unique and payment
/// amounts finite and non-negative. Input order is preserved.
pub fn parse_assignments(json: &str, today: NaiveDate) -> Result<Vec<Assignment>, AssignmentError> {
    let raw: Vec<RawAssignment> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut assignments = Vec::with_capacity(raw.len());
    for record in raw {
        if !seen.insert(record.id) {
            return Err(AssignmentError::DuplicateId(record.id));
        }
        assignments.push(record.validate(today)?);
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn record(id: u32, date: &str, status: &str, payment_status: &str, amount: f64) -> String {
        format!(
            r#"{{
                "id": {id},
                "school": "Al Noor School",
                "date": "{date}",
                "timeSlot": "08:00 - 14:00",
                "subject": "mathematics",
                "grade": "Grade 7",
                "location": "Room 12",
                "status": "{status}",
                "teacher": "Sara Haddad",
                "payment": {{ "amount": {amount}, "status": "{payment_status}" }}
            }}"#
        )
    }

    #[test]
    fn test_parse_valid_records() {
        let json = format!(
            "[{}, {}]",
            record(1, "2025-03-05", "upcoming", "pending", 150.0),
            record(2, "2024-12-15", "completed", "paid", 120.5)
        );
        let assignments = parse_assignments(&json, today()).unwrap();

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].id, AssignmentId(1));
        assert_eq!(assignments[0].date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(assignments[0].subject, Subject::Mathematics);
        assert!(assignments[0].is_upcoming());
        assert_eq!(assignments[1].status, AssignmentStatus::Completed);
        assert_eq!(assignments[1].payment.status, PaymentStatus::Paid);
        assert_eq!(assignments[1].payment.amount, 120.5);
        assert_eq!(assignments[1].notes(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let json = format!("[{}]", record(1, "2025-03-05", "postponed", "pending", 10.0));
        assert!(matches!(parse_assignments(&json, today()), Err(AssignmentError::Json(_))));

        let json = format!("[{}]", record(1, "2025-03-05", "upcoming", "refunded", 10.0));
        assert!(matches!(parse_assignments(&json, today()), Err(AssignmentError::Json(_))));
    }

    #[test]
    fn test_parse_rejects_bad_dates() {
        for bad in ["2025-13-01", "2025-02-30", "05/03/2025", ""] {
            let json = format!("[{}]", record(4, bad, "upcoming", "pending", 10.0));
            match parse_assignments(&json, today()) {
                Err(AssignmentError::InvalidDate { id, value }) => {
                    assert_eq!(id, AssignmentId(4));
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidDate for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let json = format!(
            "[{}, {}]",
            record(7, "2025-03-05", "upcoming", "pending", 10.0),
            record(7, "2025-03-06", "completed", "paid", 10.0)
        );
        assert!(matches!(
            parse_assignments(&json, today()),
            Err(AssignmentError::DuplicateId(AssignmentId(7)))
        ));
    }

    #[test]
    fn test_parse_rejects_negative_amount() {
        let json = format!("[{}]", record(2, "2025-03-05", "completed", "paid", -5.0));
        assert!(matches!(
            parse_assignments(&json, today()),
            Err(AssignmentError::InvalidPaymentAmount { id: AssignmentId(2), .. })
        ));
    }

    #[test]
    fn test_notes_are_optional_and_trimmed() {
        let json = r#"[
            {
                "id": 1, "school": "S", "date": "2025-03-05", "timeSlot": "09:00",
                "subject": "science", "grade": "G", "location": "L",
                "status": "upcoming", "teacher": "T", "notes": "  Bring lab coats  ",
                "payment": { "amount": 0, "status": "pending" }
            },
            {
                "id": 2, "school": "S", "date": "2025-03-05", "timeSlot": "09:00",
                "subject": "science", "grade": "G", "location": "L",
                "status": "upcoming", "teacher": "T", "notes": "   ",
                "payment": { "amount": 0, "status": "pending" }
            }
        ]"#;
        let assignments = parse_assignments(json, today()).unwrap();
        assert_eq!(assignments[0].notes(), Some("Bring lab coats"));
        assert_eq!(assignments[1].notes, None);
        assert_eq!(assignments[1].notes(), None);
    }

    #[test]
    fn test_today_placeholder_only_applies_to_dates() {
        let json = r#"[
            {
                "id": 1, "school": "today", "date": "today", "timeSlot": "today",
                "subject": "history", "grade": "G", "location": "L",
                "status": "upcoming", "teacher": "T", "notes": "today",
                "payment": { "amount": 10, "status": "pending" }
            }
        ]"#;
        let assignments = parse_assignments(json, today()).unwrap();

        assert_eq!(assignments[0].date, today());
        assert_eq!(assignments[0].school, "today");
        assert_eq!(assignments[0].time_slot, "today");
        assert_eq!(assignments[0].notes(), Some("today"));
    }

    #[test]
    fn test_subject_translation_keys() {
        assert_eq!(Subject::Mathematics.translation_key(), "subjects.mathematics");
        assert_eq!(Subject::Physics.translation_key(), "subjects.physics");
    }
}
