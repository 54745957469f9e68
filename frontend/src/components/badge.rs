use yew::prelude::*;
use shared::{BadgeColor, StatusGlyph};

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub label: AttrValue,
    pub color: BadgeColor,
    #[prop_or_default]
    pub glyph: Option<StatusGlyph>,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.color.css_class())}>
            {if let Some(glyph) = props.glyph {
                html! { <span class="badge-glyph" aria-hidden="true">{glyph.symbol()}</span> }
            } else {
                html! {}
            }}
            <span class="badge-label">{props.label.clone()}</span>
        </span>
    }
}
