//! Outbound calls for the chat widget and the contact form. One attempt each;
//! failures are reported, never retried.

use crate::constants::{CHAT_ENDPOINT, CHAT_MODEL, CONTACT_ENDPOINT};
use crate::core::chat::{self, GenerateRequest};
use crate::core::contact::{ContactForm, RelayReply};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Status and body of a completed POST.
struct Posted {
    ok: bool,
    body: String,
}

async fn post_json(url: &str, body: &str) -> anyhow::Result<Posted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_body(&JsValue::from_str(body));
    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))?;
    if !response.ok() {
        log::warn!("[net] {} answered HTTP {}", url, response.status());
    }
    Ok(Posted {
        ok: response.ok(),
        body: text,
    })
}

/// Ask the text-generation service. Always yields something to show the
/// user: the generated text, the empty-reply apology, or the offline message.
pub async fn ask(api_key: &str, persona: &str, resume_json: &str, question: &str) -> String {
    let prompt = chat::build_prompt(persona, resume_json, question);
    let request = GenerateRequest::new(prompt, chat::DEFAULT_TEMPERATURE);
    let body = match serde_json::to_string(&request) {
        Ok(b) => b,
        Err(e) => {
            log::error!("[chat] could not encode request: {}", e);
            return chat::OFFLINE_REPLY.to_string();
        }
    };
    let url = format!("{CHAT_ENDPOINT}/{CHAT_MODEL}:generateContent?key={api_key}");
    match post_json(&url, &body).await {
        Ok(Posted { ok: true, body }) => chat::reply_from_body(&body),
        Ok(Posted { ok: false, .. }) => chat::OFFLINE_REPLY.to_string(),
        Err(e) => {
            log::warn!("[chat] request failed: {:?}", e);
            chat::OFFLINE_REPLY.to_string()
        }
    }
}

/// Post a validated contact form to the relay and return its success flag.
pub async fn submit(access_key: &str, form: &ContactForm) -> anyhow::Result<bool> {
    let body = serde_json::to_string(&form.payload(access_key))?;
    // the relay explains refusals in the body, whatever the status
    let posted = post_json(CONTACT_ENDPOINT, &body).await?;
    let reply: RelayReply = serde_json::from_str(&posted.body)?;
    if !reply.success {
        log::warn!(
            "[contact] relay refused submission: {}",
            reply.message.as_deref().unwrap_or("no reason given")
        );
    }
    Ok(reply.success)
}
