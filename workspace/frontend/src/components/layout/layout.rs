use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="flex-1 container mx-auto max-w-5xl p-6 flex flex-col gap-6">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center p-4 bg-base-100 text-base-content text-sm">
                <p>{"© 2025 BBRI Stock Prediction System"}</p>
                <p class="text-gray-500">{"Powered by Temporal Fusion Transformer (TFT)"}</p>
            </footer>
        </div>
    }
}
