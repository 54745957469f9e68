use std::rc::Rc;
use yew::prelude::*;
use shared::{AssignmentId, DetailAction, Selection, StaticAssignments};
use crate::services::logging::Logger;

pub struct UseSelectionResult {
    pub selection: Selection,
    pub actions: UseSelectionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSelectionActions {
    pub select: Callback<AssignmentId>,
    pub close: Callback<()>,
    pub cancel: Callback<()>,
}

/// Owns the detail-view selection. `on_cancel` receives the id that was open
/// when the cancel action fired; the selection is cleared either way.
#[hook]
pub fn use_selection(
    assignments: Rc<StaticAssignments>,
    on_cancel: Callback<AssignmentId>,
) -> UseSelectionResult {
    let selection = use_state(Selection::default);

    let select = {
        let selection = selection.clone();
        Callback::from(move |id: AssignmentId| {
            let mut next = *selection;
            match next.select(id, assignments.as_ref()) {
                Ok(()) => selection.set(next),
                Err(e) => Logger::error_with_component("selection", &e.to_string()),
            }
        })
    };

    let dismiss = {
        let selection = selection.clone();
        move |action: DetailAction| {
            let mut next = *selection;
            let dismissed = next.dismiss(action);
            selection.set(next);
            dismissed
        }
    };

    let close = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| {
            dismiss(DetailAction::Close);
        })
    };

    let cancel = Callback::from(move |_| {
        if let Some(id) = dismiss(DetailAction::Cancel).and_then(|d| d.cancelled_id()) {
            on_cancel.emit(id);
        }
    });

    UseSelectionResult {
        selection: *selection,
        actions: UseSelectionActions { select, close, cancel },
    }
}
