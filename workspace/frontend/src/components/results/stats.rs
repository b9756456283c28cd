use predict::ResultView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: ResultView,
}

#[function_component(ResultStats)]
pub fn result_stats(props: &Props) -> Html {
    let view = &props.view;
    let trend_class = if view.is_up_trend { "text-success" } else { "text-error" };
    let badge_class = if view.is_up_trend { "badge-success" } else { "badge-error" };
    let badge_icon = if view.is_up_trend { "📈" } else { "📉" };

    html! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h2 class="card-title">{"📊 Hasil Prediksi"}</h2>
                <div class="stats stats-vertical lg:stats-horizontal shadow">
                    <div class="stat">
                        <div class="stat-title">{"Harga Terakhir"}</div>
                        <div class="stat-value text-2xl">{view.last_price.to_string()}</div>
                        <div class="stat-desc">{format!("Per {}", view.last_data_date)}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-title">{"Prediksi Harga"}</div>
                        <div class={classes!("stat-value", "text-2xl", trend_class)}>
                            {view.predicted_price.to_string()}
                        </div>
                        <div class="stat-desc">{format!("Target {}", view.target_date)}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-title">{"Perubahan"}</div>
                        <div class={classes!("stat-value", "text-2xl", trend_class)}>
                            {view.change_label()}
                        </div>
                        <div class="stat-desc">
                            <span class={classes!("badge", badge_class)}>
                                {format!("{} {}", badge_icon, view.trend_label())}
                            </span>
                        </div>
                    </div>

                    <div class="stat">
                        <div class="stat-title">{"Rentang Prediksi"}</div>
                        <div class="stat-value text-base">
                            {view.confidence_lower.to_string()}
                            <br />
                            <span class="text-xs text-gray-500">{"sampai"}</span>
                            <br />
                            {view.confidence_upper.to_string()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
