use log::LevelFilter;
use shared::Language;
use web_sys::{window, UrlSearchParams};

/// Startup configuration, resolved once from the page URL and browser settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub language: Language,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// `?lang=ar|en` wins over `navigator.language`; `?log=debug` sets the level
    pub fn from_window() -> Self {
        let params = query_params();
        let param = |name: &str| params.as_ref().and_then(|p| p.get(name));

        let language = Language::resolve(param("lang").as_deref(), browser_language().as_deref());

        let log_level = param("log")
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self { language, log_level }
    }
}

fn query_params() -> Option<UrlSearchParams> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()
}

fn browser_language() -> Option<String> {
    window()?.navigator().language()
}
