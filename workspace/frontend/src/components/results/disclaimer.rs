use yew::prelude::*;

#[function_component(Disclaimer)]
pub fn disclaimer() -> Html {
    html! {
        <div role="alert" class="alert alert-warning">
            <div>
                <h3 class="font-bold">{"⚠️ Disclaimer"}</h3>
                <p class="text-sm">
                    {"Prediksi ini dibuat menggunakan model machine learning dan "}
                    <strong>{"bukan merupakan saran investasi"}</strong>
                    {". Harga saham dipengaruhi oleh banyak faktor yang tidak dapat sepenuhnya diprediksi. \
                      Selalu lakukan riset mendalam dan konsultasi dengan ahli keuangan sebelum membuat keputusan investasi."}
                </p>
            </div>
        </div>
    }
}
