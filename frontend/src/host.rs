//! Telegram WebApp bridge. Every call degrades to a no-op (or a plain
//! browser fallback) when the page is opened outside the Telegram client.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

fn web_app() -> Option<JsValue> {
    let window = window()?;
    let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }

    let app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if app.is_undefined() || app.is_null() {
        None
    } else {
        Some(app)
    }
}

fn call_method(target: &JsValue, name: &str, args: &Array) -> bool {
    let Ok(method) = Reflect::get(target, &JsValue::from_str(name)) else {
        return false;
    };
    match method.dyn_into::<Function>() {
        Ok(method) => method.apply(target, args).is_ok(),
        Err(_) => false,
    }
}

pub fn signal_ready() {
    match web_app() {
        Some(app) => {
            call_method(&app, "ready", &Array::new());
            call_method(&app, "expand", &Array::new());
        }
        None => log::debug!("no Telegram WebApp, running standalone"),
    }
}

/// Raw `initData` string passed by the client, empty outside Telegram.
pub fn init_data() -> String {
    web_app()
        .and_then(|app| Reflect::get(&app, &JsValue::from_str("initData")).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

pub fn open_telegram_link(url: &str) {
    if let Some(app) = web_app() {
        if call_method(&app, "openTelegramLink", &Array::of1(&JsValue::from_str(url))) {
            return;
        }
    }

    log::warn!("openTelegramLink unavailable, opening in a new window");
    if let Some(window) = window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            log::warn!("window.open was refused for {}", url);
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}
