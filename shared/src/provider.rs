//! Dataset boundary. The view layer only sees [`AssignmentProvider`], so a
//! persistence-backed source can replace [`StaticAssignments`] later.

use crate::assignment::{parse_assignments, Assignment, AssignmentId};
use crate::error::AssignmentError;
use chrono::NaiveDate;
use log::info;

const BUILTIN_DATASET: &str = include_str!("../data/assignments.json");

pub trait AssignmentProvider {
    /// Assignments in display order
    fn list_assignments(&self) -> &[Assignment];

    fn find(&self, id: AssignmentId) -> Option<&Assignment> {
        self.list_assignments().iter().find(|a| a.id == id)
    }

    fn contains(&self, id: AssignmentId) -> bool {
        self.find(id).is_some()
    }
}

/// An immutable, in-memory list of validated assignments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticAssignments {
    assignments: Vec<Assignment>,
}

impl StaticAssignments {
    /// Load any JSON dataset through the validating ingestion path.
    /// `today` resolves `"today"` dates.
    pub fn from_json(json: &str, today: NaiveDate) -> Result<Self, AssignmentError> {
        let assignments = parse_assignments(json, today)?;
        info!("Loaded {} assignments", assignments.len());
        Ok(Self { assignments })
    }

    /// The compiled-in sample dataset, with its "today" dates pinned to `today`
    pub fn builtin(today: NaiveDate) -> Result<Self, AssignmentError> {
        Self::from_json(BUILTIN_DATASET, today)
    }
}

impl AssignmentProvider for StaticAssignments {
    fn list_assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::AssignmentStatus;
    use crate::presentation::{card_badge, relative_day, status_badge, BadgeColor, CardBadge, RelativeDay, StatusGlyph};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    #[test]
    fn test_builtin_dataset_loads() {
        let provider = StaticAssignments::builtin(today()).unwrap();
        let ids: Vec<u32> = provider.list_assignments().iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_builtin_dataset_examples() {
        let provider = StaticAssignments::builtin(today()).unwrap();

        let first = provider.find(AssignmentId(1)).unwrap();
        assert_eq!(first.date, today());
        assert_eq!(relative_day(first, today()), Some(RelativeDay::Today));

        let second = provider.find(AssignmentId(2)).unwrap();
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert_eq!(second.status, AssignmentStatus::Completed);
        assert_eq!(relative_day(second, today()), None);
        let badge = status_badge(second.status);
        assert_eq!((badge.glyph, badge.color), (Some(StatusGlyph::Check), BadgeColor::Success));

        let third = provider.find(AssignmentId(3)).unwrap();
        match card_badge(third, today()) {
            Some(CardBadge::Status(badge)) => {
                assert_eq!((badge.glyph, badge.color), (Some(StatusGlyph::Cross), BadgeColor::Danger));
            }
            other => panic!("expected a status badge, got {:?}", other),
        }
    }

    #[test]
    fn test_find_and_contains() {
        let provider = StaticAssignments::builtin(today()).unwrap();
        assert!(provider.contains(AssignmentId(2)));
        assert!(!provider.contains(AssignmentId(42)));
        assert!(provider.find(AssignmentId(42)).is_none());
    }

    #[test]
    fn test_from_json_propagates_errors() {
        assert!(StaticAssignments::from_json("not json", today()).is_err());
        assert_eq!(StaticAssignments::from_json("[]", today()).unwrap().list_assignments().len(), 0);
    }
}
