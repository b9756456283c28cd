use yew::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <div class="navbar bg-primary text-primary-content shadow-sm">
            <div class="flex-1 px-4 flex flex-col items-start">
                <h1 class="text-xl font-bold">{"📈 Prediksi Saham BBRI"}</h1>
                <p class="text-sm opacity-80">
                    {"Sistem Prediksi Harga Saham Bank Rakyat Indonesia menggunakan Temporal Fusion Transformer"}
                </p>
            </div>
            <div class="flex-none">
                <span class="badge badge-outline">{"BBRI.JK"}</span>
            </div>
        </div>
    }
}
