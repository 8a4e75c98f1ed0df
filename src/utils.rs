use crate::objects::ApiError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| "error getting window".into())
}

/// Resolves after `ms` milliseconds.
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
            {
                log::error!("could not schedule timeout: {:?}", e);
            }
        }
    });

    if let Err(e) = JsFuture::from(promise).await {
        log::error!("timeout failed: {:?}", e);
    }
}

/// Milliseconds since the epoch.
pub fn now() -> f64 {
    js_sys::Date::now()
}

pub fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Writes `text` via `navigator.clipboard.writeText`.
pub async fn write_clipboard(text: &str) -> Result<(), ApiError> {
    let navigator = window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(clipboard_error)?;

    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ApiError::Clipboard("clipboard not available".into()));
    }

    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(clipboard_error)?
            .dyn_into()
            .map_err(clipboard_error)?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(clipboard_error)?
        .dyn_into()
        .map_err(clipboard_error)?;

    JsFuture::from(promise).await.map_err(clipboard_error)?;

    Ok(())
}

fn clipboard_error(val: JsValue) -> ApiError {
    ApiError::Clipboard(match val.as_string() {
        Some(description) => description,
        None => format!("{:?}", val),
    })
}

pub fn prefers_dark_mode() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn document_element() -> Result<web_sys::Element, ApiError> {
    window()?
        .document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| "error getting document element".into())
}

/// The theme last applied to this page, if any.
pub fn applied_theme() -> Option<bool> {
    let classes = document_element().ok()?.class_list();

    match (classes.contains("dark"), classes.contains("light")) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Marks the document element with either the `dark` or the `light` class.
pub fn apply_theme(dark: bool) -> Result<(), ApiError> {
    let classes = document_element()?.class_list();
    let (add, remove) = match dark {
        true => ("dark", "light"),
        false => ("light", "dark"),
    };

    classes.remove_1(remove)?;
    classes.add_1(add)?;

    Ok(())
}
