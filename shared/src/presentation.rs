//! Presentation rules: pure functions from an assignment to display values.

use crate::assignment::{Assignment, AssignmentStatus, PaymentStatus};
use crate::i18n::LocaleConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How far in the future an upcoming assignment is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelativeDay {
    Today,
    Tomorrow,
    /// Two or more days away
    DaysLeft(u32),
}

impl RelativeDay {
    pub fn label(&self, locale: &LocaleConfig) -> String {
        match self {
            RelativeDay::Today => locale.t("time.today"),
            RelativeDay::Tomorrow => locale.t("time.tomorrow"),
            RelativeDay::DaysLeft(n) => locale.t_count("time.days_left", *n),
        }
    }
}

/// Relative-day label for an assignment, or `None` when it is not upcoming
/// or its date has already passed. Granularity is whole calendar days.
pub fn relative_day(assignment: &Assignment, today: NaiveDate) -> Option<RelativeDay> {
    if !assignment.is_upcoming() {
        return None;
    }

    let days_left = assignment.date.signed_duration_since(today).num_days();
    match days_left {
        0 => Some(RelativeDay::Today),
        1 => Some(RelativeDay::Tomorrow),
        n if n > 1 => Some(RelativeDay::DaysLeft(u32::try_from(n).unwrap_or(u32::MAX))),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Neutral,
    Warning,
    Success,
    Danger,
}

impl BadgeColor {
    /// CSS modifier class for the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeColor::Neutral => "badge--neutral",
            BadgeColor::Warning => "badge--warning",
            BadgeColor::Success => "badge--success",
            BadgeColor::Danger => "badge--danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusGlyph {
    Check,
    Cross,
}

impl StatusGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            StatusGlyph::Check => "✓",
            StatusGlyph::Cross => "✕",
        }
    }
}

/// Presentation facts for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label_key: &'static str,
    pub color: BadgeColor,
    pub glyph: Option<StatusGlyph>,
}

impl StatusBadge {
    pub fn label(&self, locale: &LocaleConfig) -> String {
        locale.t(self.label_key)
    }
}

pub fn status_badge(status: AssignmentStatus) -> StatusBadge {
    match status {
        AssignmentStatus::Completed => StatusBadge {
            label_key: "status.completed",
            color: BadgeColor::Success,
            glyph: Some(StatusGlyph::Check),
        },
        AssignmentStatus::Cancelled => StatusBadge {
            label_key: "status.cancelled",
            color: BadgeColor::Danger,
            glyph: Some(StatusGlyph::Cross),
        },
        AssignmentStatus::Upcoming => StatusBadge {
            label_key: "status.pending",
            color: BadgeColor::Neutral,
            glyph: None,
        },
    }
}

pub fn payment_badge(status: PaymentStatus) -> StatusBadge {
    match status {
        PaymentStatus::Pending => StatusBadge {
            label_key: "payment.pending",
            color: BadgeColor::Warning,
            glyph: None,
        },
        PaymentStatus::Paid => StatusBadge {
            label_key: "payment.paid",
            color: BadgeColor::Success,
            glyph: Some(StatusGlyph::Check),
        },
        PaymentStatus::Cancelled => StatusBadge {
            label_key: "payment.cancelled",
            color: BadgeColor::Danger,
            glyph: Some(StatusGlyph::Cross),
        },
    }
}

/// The single badge shown on a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBadge {
    RelativeDay(RelativeDay),
    Status(StatusBadge),
}

/// Upcoming cards show the relative day (or nothing once the date has
/// passed); completed and cancelled cards show their status badge.
pub fn card_badge(assignment: &Assignment, today: NaiveDate) -> Option<CardBadge> {
    match assignment.status {
        AssignmentStatus::Upcoming => relative_day(assignment, today).map(CardBadge::RelativeDay),
        status => Some(CardBadge::Status(status_badge(status))),
    }
}

/// Localized "Subject · Grade" line
pub fn subject_line(assignment: &Assignment, locale: &LocaleConfig) -> String {
    format!("{} · {}", locale.t(assignment.subject.translation_key()), assignment.grade)
}

/// Localized "Date · time slot" line
pub fn schedule_line(assignment: &Assignment, locale: &LocaleConfig) -> String {
    format!("{} · {}", locale.format_date(assignment.date), assignment.time_slot)
}
