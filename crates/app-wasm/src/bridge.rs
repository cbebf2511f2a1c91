//! JavaScript bridge for the page
//!
//! Messages are passed as JSON strings in the `detail` of CustomEvents on
//! the window object.

use livery_ipc::{BevyToUi, UiToBevy, parse_ui_message, to_json};
use std::cell::RefCell;
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

/// Event the page dispatches with a [`UiToBevy`] payload
pub const UI_TO_BEVY_EVENT: &str = "livery:ui-to-bevy";
/// Event dispatched to the page with a [`BevyToUi`] payload
pub const BEVY_TO_UI_EVENT: &str = "livery:bevy-to-ui";

thread_local! {
    /// Queue of messages received from the page
    static MESSAGE_QUEUE: RefCell<VecDeque<UiToBevy>> = RefCell::new(VecDeque::new());
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Install the window listener for page messages
pub fn init_bridge() -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
        let Some(detail) = event.detail().as_string() else {
            web_sys::console::warn_1(&"UI message without a string detail".into());
            return;
        };
        match parse_ui_message(&detail) {
            Ok(msg) => MESSAGE_QUEUE.with(|queue| queue.borrow_mut().push_back(msg)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to parse UI message: {}", e).into());
            }
        }
    }) as Box<dyn FnMut(_)>);

    window()?.add_event_listener_with_callback(UI_TO_BEVY_EVENT, closure.as_ref().unchecked_ref())?;

    // The listener lives as long as the page
    closure.forget();

    web_sys::console::log_1(&"Livery WASM bridge initialized".into());
    Ok(())
}

/// Poll for the next message from the page (non-blocking)
pub fn poll_ui_message() -> Option<UiToBevy> {
    MESSAGE_QUEUE.with(|queue| queue.borrow_mut().pop_front())
}

/// Dispatch a message to the page
pub fn send_to_ui(msg: &BevyToUi) -> Result<(), JsValue> {
    let json = to_json(msg).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&json));
    let event = web_sys::CustomEvent::new_with_event_init_dict(BEVY_TO_UI_EVENT, &init)?;

    window()?.dispatch_event(&event)?;
    Ok(())
}
