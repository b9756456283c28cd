use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body flex flex-col justify-center items-center py-12 gap-4">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                {if let Some(text) = &props.text {
                    html! { <p class="text-sm text-gray-500">{text}</p> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
