use common::ChartPayload;
use predict::{RenderError, Renderer};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["Bokeh", "embed"], js_name = embed_item)]
    fn embed_item(item: JsValue, target_id: &str) -> Result<JsValue, JsValue>;
}

/// Draws chart payloads with the BokehJS runtime loaded by `index.html`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BokehRenderer;

impl Renderer for BokehRenderer {
    fn is_available(&self) -> bool {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Bokeh"))
            .map(|bokeh| !bokeh.is_undefined() && !bokeh.is_null())
            .unwrap_or(false)
    }

    fn clear(&self, container: &str) -> Result<(), RenderError> {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(container))
            .ok_or_else(|| RenderError::MissingContainer(container.to_string()))?;
        element.set_inner_html("");
        Ok(())
    }

    fn embed(&self, container: &str, payload: &ChartPayload) -> Result<(), RenderError> {
        let item = payload
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|err| RenderError::Payload(err.to_string()))?;

        let returned = embed_item(item, container)
            .map_err(|err| RenderError::Runtime(js_error_message(&err)))?;

        // BokehJS 3 embeds asynchronously; rejections surface after this call returns.
        if let Ok(pending) = returned.dyn_into::<js_sys::Promise>() {
            let container = container.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(pending).await {
                    log::error!("Error embedding chart in {}: {}", container, js_error_message(&err));
                }
            });
        }
        Ok(())
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => error.message().into(),
        None => format!("{:?}", value),
    }
}
