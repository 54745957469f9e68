use yew::prelude::*;
use shared::{DashboardStats, LocaleConfig};

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    value: AttrValue,
    icon: AttrValue,
    color: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", format!("stat-card--{}", props.color))}>
            <div class="stat-card-icon" aria-hidden="true">{props.icon.clone()}</div>
            <div class="stat-card-content">
                <div class="stat-card-value">{props.value.clone()}</div>
                <div class="stat-card-title">{props.title.clone()}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: DashboardStats,
    pub locale: LocaleConfig,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    let locale = &props.locale;
    let stats = &props.stats;

    html! {
        <section class="stats-grid">
            <StatCard title={locale.t("stats.total")} value={stats.total.to_string()} icon="📋" color="blue" />
            <StatCard title={locale.t("stats.upcoming")} value={stats.upcoming.to_string()} icon="📅" color="amber" />
            <StatCard title={locale.t("stats.completed")} value={stats.completed.to_string()} icon="✅" color="green" />
            <StatCard title={locale.t("stats.earned")} value={locale.format_amount(stats.earned)} icon="💰" color="purple" />
        </section>
    }
}
