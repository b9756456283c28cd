use predict::ResultView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: ResultView,
}

#[function_component(AnalysisPanel)]
pub fn analysis_panel(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm border-l-4 border-primary">
            <div class="card-body">
                <h3 class="card-title text-lg">{"💡 Analisis Prediksi"}</h3>
                <p>{props.view.headline()}</p>
                <p>
                    {"Area berwarna biru pada grafik menunjukkan rentang ketidakpastian prediksi. "}
                    {props.view.band_summary()}
                </p>
            </div>
        </div>
    }
}
