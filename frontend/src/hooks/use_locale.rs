use yew::prelude::*;
use shared::{Language, LocaleConfig};
use web_sys::window;
use crate::services::logging::Logger;

pub struct UseLocaleResult {
    pub locale: LocaleConfig,
    pub toggle_language: Callback<()>,
}

/// Current language plus a toggle. Keeps `<html lang dir>` in sync so the
/// stylesheet can mirror the layout for right-to-left languages.
#[hook]
pub fn use_locale(initial: Language) -> UseLocaleResult {
    let language = use_state(|| initial);

    let toggle_language = {
        let language = language.clone();
        use_callback(*language, move |_: (), current| {
            let next = current.toggled();
            Logger::info_with_component("locale", &format!("Switching language to {}", next.code()));
            language.set(next);
        })
    };

    use_effect_with(*language, |language| {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(root) => {
                let direction = language.direction();
                if root.set_attribute("lang", language.code()).is_err()
                    || root.set_attribute("dir", direction.as_attr()).is_err()
                {
                    Logger::warn_with_component("locale", "Failed to update document lang/dir");
                }
            }
            None => Logger::warn_with_component("locale", "No document element to localize"),
        }
        || ()
    });

    UseLocaleResult {
        locale: LocaleConfig::new(*language),
        toggle_language,
    }
}
