use chrono::NaiveDate;
use yew::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};
use shared::{
    card_badge, schedule_line, subject_line, Assignment, AssignmentId, AssignmentStatus, BadgeColor, CardBadge,
    LocaleConfig,
};
use super::badge::Badge;

#[derive(Properties, PartialEq)]
pub struct AssignmentCardProps {
    pub assignment: Assignment,
    pub today: NaiveDate,
    pub locale: LocaleConfig,
    pub on_select: Callback<AssignmentId>,
}

#[function_component(AssignmentCard)]
pub fn assignment_card(props: &AssignmentCardProps) -> Html {
    let assignment = &props.assignment;
    let locale = &props.locale;

    let on_click = {
        let on_select = props.on_select.clone();
        let id = assignment.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    let on_keydown = {
        let on_select = props.on_select.clone();
        let id = assignment.id;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_select.emit(id);
            }
        })
    };

    // Upcoming cards carry the relative day, the rest their status
    let badge = match card_badge(assignment, props.today) {
        Some(CardBadge::RelativeDay(day)) => html! {
            <Badge label={day.label(locale)} color={BadgeColor::Warning} />
        },
        Some(CardBadge::Status(status)) => html! {
            <Badge label={status.label(locale)} color={status.color} glyph={status.glyph} />
        },
        None => html! {},
    };

    html! {
        <article
            class={classes!("assignment-card", format!("assignment-card--{}", status_class(assignment)))}
            role="button"
            tabindex="0"
            onclick={on_click}
            onkeydown={on_keydown}
        >
            <div class="assignment-card-header">
                <h3 class="assignment-school">{&assignment.school}</h3>
                {badge}
            </div>
            <p class="assignment-schedule">{schedule_line(assignment, locale)}</p>
            <p class="assignment-subject">{subject_line(assignment, locale)}</p>
            <dl class="assignment-facts">
                <div class="assignment-fact">
                    <dt>{locale.t("assignment.location")}</dt>
                    <dd>{&assignment.location}</dd>
                </div>
                <div class="assignment-fact">
                    <dt>{locale.t("assignment.teacher")}</dt>
                    <dd>{&assignment.teacher}</dd>
                </div>
            </dl>
            {if let Some(notes) = assignment.notes() {
                html! { <p class="assignment-notes">{notes}</p> }
            } else {
                html! {}
            }}
            <span class="assignment-card-link">
                {locale.t("assignment.view_details")}
                <span class="direction-arrow" aria-hidden="true">{locale.direction().forward_arrow()}</span>
            </span>
        </article>
    }
}

fn status_class(assignment: &Assignment) -> &'static str {
    match assignment.status {
        AssignmentStatus::Upcoming => "upcoming",
        AssignmentStatus::Completed => "completed",
        AssignmentStatus::Cancelled => "cancelled",
    }
}
