use common::ChartPayload;
use predict::{ChartMount, MountOutcome, CHART_CONTAINER_ID};
use yew::prelude::*;

use crate::bokeh::BokehRenderer;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub payload: Option<ChartPayload>,
}

#[function_component(PredictionChart)]
pub fn prediction_chart(props: &Props) -> Html {
    let mount = use_mut_ref(ChartMount::default);

    use_effect_with(props.payload.clone(), move |payload| {
        match mount.borrow_mut().mount(&BokehRenderer, payload.as_ref()) {
            MountOutcome::Mounted => log::debug!("Chart rendered"),
            MountOutcome::Unchanged => log::trace!("Chart already up to date"),
            MountOutcome::RuntimeUnavailable => log::warn!("BokehJS is not loaded"),
            MountOutcome::NoPayload => log::warn!("Response carries no chart"),
            MountOutcome::Failed(err) => log::error!("Chart rendering failed: {}", err),
        }
        || ()
    });

    html! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h2 class="card-title">{"📈 Visualisasi Prediksi"}</h2>

                <div class="alert text-sm">
                    <div>
                        <p class="font-semibold">{"📖 Cara Membaca Grafik"}</p>
                        <ul class="list-disc list-inside">
                            <li><strong>{"Garis Gelap:"}</strong>{" Data historis harga saham BBRI (90 hari terakhir)"}</li>
                            <li><strong>{"Garis Merah:"}</strong>{" Prediksi harga (nilai median)"}</li>
                            <li><strong>{"Area Biru Transparan:"}</strong>{" Rentang kemungkinan harga (confidence interval 10%-90%)"}</li>
                            <li><strong>{"Hover:"}</strong>{" Arahkan kursor ke grafik untuk melihat detail harga dan tanggal"}</li>
                        </ul>
                    </div>
                </div>

                <div id={CHART_CONTAINER_ID} class="w-full min-h-[400px] overflow-x-auto"></div>
            </div>
        </div>
    }
}
