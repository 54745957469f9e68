use std::rc::Rc;
use chrono::NaiveDate;
use yew::prelude::*;
use shared::{AssignmentId, AssignmentProvider, DashboardStats, LocaleConfig, StaticAssignments};
use super::assignment_card::AssignmentCard;
use super::stats_grid::StatsGrid;

#[derive(Properties, PartialEq)]
pub struct AssignmentListProps {
    pub assignments: Rc<StaticAssignments>,
    pub today: NaiveDate,
    pub locale: LocaleConfig,
    pub on_select: Callback<AssignmentId>,
}

/// Stat cards followed by one card per assignment
#[function_component(AssignmentList)]
pub fn assignment_list(props: &AssignmentListProps) -> Html {
    let locale = &props.locale;
    let assignments = props.assignments.list_assignments();

    let stats = {
        let assignments = props.assignments.clone();
        use_memo(assignments, |assignments| {
            DashboardStats::from_assignments(assignments.list_assignments())
        })
    };

    html! {
        <>
            <StatsGrid stats={*stats} locale={*locale} />

            <section class="assignments-section">
                <h2 class="section-title">{locale.t("assignments.heading")}</h2>
                {if assignments.is_empty() {
                    html! { <p class="assignments-empty">{locale.t("assignments.empty")}</p> }
                } else {
                    html! {
                        <div class="assignments-grid">
                            {for assignments.iter().map(|assignment| html! {
                                <AssignmentCard
                                    key={assignment.id.to_string()}
                                    assignment={assignment.clone()}
                                    today={props.today}
                                    locale={*locale}
                                    on_select={props.on_select.clone()}
                                />
                            })}
                        </div>
                    }
                }}
            </section>
        </>
    }
}
