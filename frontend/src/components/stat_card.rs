use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_default]
    pub accent: Option<&'static str>,
}

/// KPI tile on the dashboard.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let class = classes!("stat-card", props.accent);
    html! {
        <div {class}>
            <p class="stat-title">{props.title.clone()}</p>
            <p class="stat-value">{props.value.clone()}</p>
            if let Some(subtitle) = &props.subtitle {
                <p class="stat-subtitle">{subtitle.clone()}</p>
            }
        </div>
    }
}
