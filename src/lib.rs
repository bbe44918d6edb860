#![cfg(target_arch = "wasm32")]
use crate::constants::{CONTACT_NETWORK_ERROR, PARTICLE_CANVAS_ID, STARFIELD_CONTAINER_ID};
use crate::core::contact::ContactForm;
use crate::core::StarfieldConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod mount;
mod net;

pub use mount::BackdropHandle;

thread_local! {
    // Backdrops mounted by `start`; they live until `unmount_all`.
    static AUTO_MOUNTED: RefCell<Vec<BackdropHandle>> = const { RefCell::new(Vec::new()) };
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; nothing mounted");
        return Ok(());
    };

    if let Some(el) = document.get_element_by_id(PARTICLE_CANVAS_ID) {
        match el.dyn_into::<web::HtmlCanvasElement>() {
            Ok(canvas) => keep_mounted(mount::particle_network(canvas), "particles"),
            Err(_) => log::warn!("#{} is not a <canvas>", PARTICLE_CANVAS_ID),
        }
    }

    if let Some(el) = document.get_element_by_id(STARFIELD_CONTAINER_ID) {
        let mounted = mount::config_from_attributes(&el).and_then(|config| {
            let container = el
                .dyn_into::<web::HtmlElement>()
                .map_err(|_| anyhow::anyhow!("#{} is not an HTML element", STARFIELD_CONTAINER_ID))?;
            mount::starfield(container, config)
        });
        keep_mounted(mounted, "starfield");
    }
    Ok(())
}

fn keep_mounted(result: anyhow::Result<BackdropHandle>, label: &str) {
    match result {
        Ok(handle) => AUTO_MOUNTED.with(|m| m.borrow_mut().push(handle)),
        // the page simply renders without this backdrop
        Err(e) => log::warn!("[{}] not started: {:#}", label, e),
    }
}

/// Tear down every backdrop mounted by `start`.
#[wasm_bindgen]
pub fn unmount_all() {
    let handles = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    for mut h in handles {
        h.unmount();
    }
}

/// Mount the particle network on the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn mount_particle_network(canvas_id: &str) -> Result<BackdropHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{canvas_id}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a <canvas>")))?;
    mount::particle_network(canvas).map_err(to_js)
}

/// Mount a starfield inside the element with id `container_id`. Options come
/// from `options` when given, otherwise from the element's `data-*`
/// attributes.
#[wasm_bindgen]
pub fn mount_starfield(
    container_id: &str,
    options: Option<js_sys::Object>,
) -> Result<BackdropHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{container_id}")))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{container_id} is not an HTML element")))?;
    let config: StarfieldConfig = match &options {
        Some(obj) => mount::config_from_object(obj),
        None => mount::config_from_attributes(&container),
    }
    .map_err(to_js)?;
    mount::starfield(container, config).map_err(to_js)
}

/// Ask the chat assistant. Resolves to the reply text, or `null` when the
/// question is blank.
#[wasm_bindgen]
pub async fn ask_chat(
    api_key: String,
    persona: String,
    resume_json: String,
    question: String,
) -> Result<JsValue, JsValue> {
    let Some(question) = core::chat::normalize_question(&question) else {
        return Ok(JsValue::NULL);
    };
    let reply = net::ask(&api_key, &persona, &resume_json, question).await;
    Ok(JsValue::from_str(&reply))
}

/// Validate and send the contact form. Resolves to the relay's success flag;
/// rejects with the validation messages or a network error.
#[wasm_bindgen]
pub async fn submit_contact(
    access_key: String,
    name: String,
    email: String,
    message: String,
) -> Result<bool, JsValue> {
    let form = ContactForm {
        name,
        email,
        message,
    };
    if let Err(errors) = form.validate() {
        let text = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(JsValue::from_str(&text));
    }
    net::submit(&access_key, &form).await.map_err(|e| {
        log::warn!("[contact] {:#}", e);
        JsValue::from_str(CONTACT_NETWORK_ERROR)
    })
}
