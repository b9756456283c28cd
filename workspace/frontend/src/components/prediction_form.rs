use chrono::NaiveDate;
use predict::format::format_long_date;
use predict::window::{
    day_options, default_selection, latest_target, month_options, year_options, DateSelection,
};
use predict::HORIZON_DAYS;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub today: NaiveDate,
    pub disabled: bool,
    pub on_submit: Callback<DateSelection>,
}

fn selected_value<T: std::str::FromStr>(event: &Event) -> Option<T> {
    event
        .target_unchecked_into::<HtmlSelectElement>()
        .value()
        .trim()
        .parse()
        .ok()
}

#[function_component(PredictionForm)]
pub fn prediction_form(props: &Props) -> Html {
    let today = props.today;
    let selection = use_state(move || default_selection(today));

    let on_day = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            selection.set(DateSelection {
                day: selected_value(&e),
                ..*selection
            });
        })
    };

    let on_month = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            selection.set(DateSelection {
                month: selected_value(&e),
                ..*selection
            });
        })
    };

    let on_year = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            selection.set(DateSelection {
                year: selected_value(&e),
                ..*selection
            });
        })
    };

    let onsubmit = {
        let selection = selection.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Form submitted with {:?}", *selection);
            on_submit.emit(*selection);
        })
    };

    let current = *selection;

    html! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h2 class="card-title">{"Pilih Tanggal Target Prediksi"}</h2>
                <p class="text-sm text-gray-500">
                    {format!("Prediksi dapat dilakukan hingga {} hari ke depan", HORIZON_DAYS)}
                </p>

                <form class="flex flex-col gap-4" {onsubmit}>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <label class="form-control w-full">
                            <div class="label"><span class="label-text">{"Tanggal"}</span></div>
                            <select class="select select-bordered" onchange={on_day} disabled={props.disabled}>
                                <option value="" selected={current.day.is_none()}>{"Pilih Tanggal"}</option>
                                { for day_options().into_iter().map(|day| html! {
                                    <option value={day.to_string()} selected={current.day == Some(day)}>{day.to_string()}</option>
                                }) }
                            </select>
                        </label>

                        <label class="form-control w-full">
                            <div class="label"><span class="label-text">{"Bulan"}</span></div>
                            <select class="select select-bordered" onchange={on_month} disabled={props.disabled}>
                                <option value="" selected={current.month.is_none()}>{"Pilih Bulan"}</option>
                                { for month_options().into_iter().map(|(month, name)| html! {
                                    <option value={month.to_string()} selected={current.month == Some(month)}>{name}</option>
                                }) }
                            </select>
                        </label>

                        <label class="form-control w-full">
                            <div class="label"><span class="label-text">{"Tahun"}</span></div>
                            <select class="select select-bordered" onchange={on_year} disabled={props.disabled}>
                                <option value="" selected={current.year.is_none()}>{"Pilih Tahun"}</option>
                                { for year_options(today).into_iter().map(|year| html! {
                                    <option value={year.to_string()} selected={current.year == Some(year)}>{year.to_string()}</option>
                                }) }
                            </select>
                        </label>
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={props.disabled}>
                        {if props.disabled {
                            html! { <><span class="loading loading-spinner"></span>{" Memproses Prediksi..."}</> }
                        } else {
                            html! { <>{"🔮 Prediksi Sekarang"}</> }
                        }}
                    </button>
                </form>

                <div class="alert alert-info mt-4 text-sm">
                    <i class="fas fa-info-circle"></i>
                    <div>
                        <p class="font-semibold">{"ℹ️ Informasi:"}</p>
                        <ul class="list-disc list-inside">
                            <li>{"Pilih tanggal di masa depan"}</li>
                            <li>{format!("Maksimal {} hari dari hari ini", HORIZON_DAYS)}</li>
                            <li>{format!("Tanggal terakhir yang dapat dipilih: {}", format_long_date(latest_target(today)))}</li>
                            <li>{"Prediksi menggunakan model Temporal Fusion Transformer"}</li>
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
