//! Which assignment, if any, the detail modal is showing.
//!
//! Transitions:
//! - `Hidden -> Shown(a)` when card `a` is activated
//! - `Shown(a) -> Shown(b)` when card `b` is activated while `a` is open
//! - `Shown(_) -> Hidden` on either dismissal action
//!
//! Only ids present in the dataset can be selected.

use crate::assignment::AssignmentId;
use crate::error::AssignmentError;
use crate::provider::AssignmentProvider;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Hidden,
    Shown(AssignmentId),
}

/// The two ways of leaving the detail view. Both clear the selection; the
/// caller decides whether `Cancel` does anything more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailAction {
    Close,
    Cancel,
}

/// Outcome of leaving the detail view while an assignment was shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dismissed {
    pub action: DetailAction,
    pub id: AssignmentId,
}

impl Dismissed {
    /// The id to hand to a cancellation hook, only for the `Cancel` action
    pub fn cancelled_id(&self) -> Option<AssignmentId> {
        match self.action {
            DetailAction::Cancel => Some(self.id),
            DetailAction::Close => None,
        }
    }
}

impl Selection {
    pub fn selected(&self) -> Option<AssignmentId> {
        match self {
            Selection::Hidden => None,
            Selection::Shown(id) => Some(*id),
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Selection::Shown(_))
    }

    /// Show `id` in the detail view. Unknown ids leave the state untouched.
    pub fn select<P: AssignmentProvider + ?Sized>(
        &mut self,
        id: AssignmentId,
        provider: &P,
    ) -> Result<(), AssignmentError> {
        if !provider.contains(id) {
            return Err(AssignmentError::UnknownAssignment(id));
        }
        debug!("selection {:?} -> Shown({})", self, id);
        *self = Selection::Shown(id);
        Ok(())
    }

    /// Hide the detail view. Returns what was dismissed, or `None` when
    /// nothing was shown.
    pub fn dismiss(&mut self, action: DetailAction) -> Option<Dismissed> {
        let previous = self.selected();
        debug!("selection {:?} -> Hidden via {:?}", self, action);
        *self = Selection::Hidden;
        previous.map(|id| Dismissed { action, id })
    }
}
