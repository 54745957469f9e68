use std::rc::Rc;
use yew::prelude::*;
use shared::{AssignmentId, AssignmentProvider, StaticAssignments};

mod components;
mod hooks;
mod services;

use components::assignment_list::AssignmentList;
use components::assignment_modal::AssignmentModal;
use components::hero::Hero;
use hooks::use_locale::use_locale;
use hooks::use_selection::use_selection;
use services::config::AppConfig;
use services::date_utils;
use services::logging::{self, Logger};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let today = use_memo((), |_| date_utils::today());
    let dataset = use_memo(*today, |today| match StaticAssignments::builtin(*today) {
        Ok(assignments) => Some(Rc::new(assignments)),
        Err(e) => {
            Logger::error_with_component("app", &format!("Failed to load assignments: {}", e));
            None
        }
    });
    let assignments = (*dataset).clone().unwrap_or_default();

    let locale = use_locale(props.config.language);

    // No cancellation command exists yet, so cancel only closes the modal
    let on_cancel = Callback::from(|id: AssignmentId| {
        Logger::info_with_component("app", &format!("Cancel requested for assignment {}", id));
    });
    let selection = use_selection(assignments.clone(), on_cancel);

    let selected = selection
        .selection
        .selected()
        .and_then(|id| assignments.find(id))
        .cloned();

    html! {
        <>
            <Hero locale={locale.locale} on_toggle_language={locale.toggle_language.clone()} />

            <main class="main">
                <div class="container">
                    {if dataset.is_some() {
                        html! {
                            <AssignmentList
                                assignments={assignments.clone()}
                                today={*today}
                                locale={locale.locale}
                                on_select={selection.actions.select.clone()}
                            />
                        }
                    } else {
                        html! {
                            <div class="form-message error">{locale.locale.t("assignments.load_error")}</div>
                        }
                    }}
                </div>
            </main>

            <AssignmentModal
                assignment={selected}
                locale={locale.locale}
                on_close={selection.actions.close.clone()}
                on_cancel={selection.actions.cancel.clone()}
            />
        </>
    }
}

fn main() {
    let config = AppConfig::from_window();
    logging::init(config.log_level);
    Logger::debug_with_component("app", &format!("Starting with {:?}", config));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
