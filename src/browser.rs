use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::session::PageEnv;

#[wasm_bindgen]
extern "C" {
    /// Touch drag-and-drop shim bundled with the page (ios-drag-drop).
    fn dragndrop(options: &JsValue);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DragDropOptions {
    enable_enter_leave: bool,
}

/// Turns on the touch drag-and-drop shim so pieces can be dragged on
/// iOS, with enter/leave events for square highlighting.
pub fn enable_touch_drag() {
    let options = JsValue::from_serde(&DragDropOptions {
        enable_enter_leave: true,
    })
    .unwrap();
    dragndrop(&options);
}

fn location() -> web_sys::Location {
    web_sys::window().unwrap().location()
}

/// Reads the location snapshot the bootstrap works from.
pub fn page_env() -> PageEnv {
    let location = location();
    PageEnv {
        protocol: location.protocol().unwrap(),
        host: location.host().unwrap(),
        search: location.search().unwrap(),
        origin: location.origin().unwrap(),
    }
}

/// Full navigation, not a history update.
pub fn navigate(url: &str) {
    location().set_href(url).unwrap();
}

pub fn app_mount_point() -> Element {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("chess-main")
        .unwrap()
}
