use std::rc::Rc;

use common::PredictionResponse;
use predict::derive_view;
use yew::prelude::*;

use super::analysis::AnalysisPanel;
use super::chart::PredictionChart;
use super::disclaimer::Disclaimer;
use super::stats::ResultStats;
use crate::common::error::ErrorBanner;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub response: Rc<PredictionResponse>,
}

#[function_component(PredictionResults)]
pub fn prediction_results(props: &Props) -> Html {
    let view = match derive_view(&props.response) {
        Ok(view) => view,
        Err(err) => {
            log::error!("Cannot render prediction result: {}", err);
            return html! { <ErrorBanner message={err.to_string()} /> };
        }
    };

    html! {
        <div class="flex flex-col gap-6">
            <ResultStats view={view.clone()} />
            <AnalysisPanel view={view} />
            <PredictionChart payload={props.response.chart_payload.clone()} />
            <Disclaimer />
        </div>
    }
}
