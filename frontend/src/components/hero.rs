use yew::prelude::*;
use web_sys::MouseEvent;
use shared::LocaleConfig;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub locale: LocaleConfig,
    pub on_toggle_language: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let locale = &props.locale;

    let on_toggle_click = {
        let on_toggle_language = props.on_toggle_language.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_language.emit(());
        })
    };

    html! {
        <header class="hero">
            <div class="container hero-content">
                <div class="hero-text">
                    <p class="hero-eyebrow">{locale.t("app.title")}</p>
                    <h1 class="hero-title">{locale.t("hero.title")}</h1>
                    <p class="hero-subtitle">{locale.t("hero.subtitle")}</p>
                </div>
                <button type="button" class="btn btn-ghost language-toggle" onclick={on_toggle_click}>
                    {locale.t("language.switch")}
                </button>
            </div>
        </header>
    }
}
