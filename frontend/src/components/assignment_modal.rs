use yew::prelude::*;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use shared::{payment_badge, schedule_line, status_badge, subject_line, Assignment, LocaleConfig};
use super::badge::Badge;

#[derive(Properties, PartialEq)]
pub struct AssignmentModalProps {
    /// The assignment to show; `None` renders nothing
    pub assignment: Option<Assignment>,
    pub locale: LocaleConfig,
    pub on_close: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(AssignmentModal)]
pub fn assignment_modal(props: &AssignmentModalProps) -> Html {
    let is_open = props.assignment.is_some();

    // Escape closes the modal while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with(is_open, move |is_open| {
            let listener = if *is_open {
                window().and_then(|w| w.document()).map(|document| {
                    EventListener::new(&document, "keydown", move |e| {
                        if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    let Some(assignment) = &props.assignment else {
        return html! {};
    };
    let locale = &props.locale;
    let status = status_badge(assignment.status);
    let payment = payment_badge(assignment.payment.status);

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="assignment-modal-title"
                onclick={on_modal_click}
            >
                <div class="modal-header">
                    <div>
                        <p class="modal-eyebrow">{locale.t("assignment.details")}</p>
                        <h3 id="assignment-modal-title" class="modal-title">{&assignment.school}</h3>
                    </div>
                    <Badge label={status.label(locale)} color={status.color} glyph={status.glyph} />
                </div>

                <dl class="modal-fields">
                    <div class="modal-field">
                        <dt>{locale.t("assignment.subject")}</dt>
                        <dd>{subject_line(assignment, locale)}</dd>
                    </div>
                    <div class="modal-field">
                        <dt>{locale.t("assignment.date")}</dt>
                        <dd>{schedule_line(assignment, locale)}</dd>
                    </div>
                    <div class="modal-field">
                        <dt>{locale.t("assignment.location")}</dt>
                        <dd>{&assignment.location}</dd>
                    </div>
                    <div class="modal-field">
                        <dt>{locale.t("assignment.teacher")}</dt>
                        <dd>{&assignment.teacher}</dd>
                    </div>
                    <div class="modal-field">
                        <dt>{locale.t("assignment.payment")}</dt>
                        <dd class="modal-payment">
                            <span class="payment-amount">{locale.format_amount(assignment.payment.amount)}</span>
                            <Badge label={payment.label(locale)} color={payment.color} glyph={payment.glyph} />
                        </dd>
                    </div>
                    {if let Some(notes) = assignment.notes() {
                        html! {
                            <div class="modal-field modal-field--wide">
                                <dt>{locale.t("assignment.notes")}</dt>
                                <dd class="modal-notes">{notes}</dd>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </dl>

                <div class="modal-buttons">
                    <button type="button" class="btn btn-danger-outline" onclick={on_cancel_click}>
                        {locale.t("actions.cancel")}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_close_click}>
                        {locale.t("actions.close")}
                    </button>
                </div>
            </div>
        </div>
    }
}
