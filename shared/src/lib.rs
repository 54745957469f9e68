//! Domain types and presentation rules shared by the assignments dashboard.
//!
//! Everything here is pure and runs natively, so the frontend only composes
//! views out of values computed by this crate.

pub mod assignment;
pub mod error;
pub mod i18n;
pub mod presentation;
pub mod provider;
pub mod selection;
pub mod stats;

pub use assignment::{
    parse_assignments, Assignment, AssignmentId, AssignmentStatus, Payment, PaymentStatus, Subject,
};
pub use error::AssignmentError;
pub use i18n::{Language, LocaleConfig, TextDirection};
pub use presentation::{
    card_badge, payment_badge, relative_day, schedule_line, status_badge, subject_line, BadgeColor,
    CardBadge, RelativeDay, StatusBadge, StatusGlyph,
};
pub use provider::{AssignmentProvider, StaticAssignments};
pub use selection::{DetailAction, Dismissed, Selection};
pub use stats::DashboardStats;
