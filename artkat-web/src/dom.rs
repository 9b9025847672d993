use artkat_gallery::ScrollLock;
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, KeyboardEvent, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

fn body() -> Option<HtmlElement> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
}

/// Whether an element with `id` is currently attached to the document.
#[must_use]
pub fn element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .is_some()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Page scroll lock backed by `body.style.overflow`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        if let Some(body) = body()
            && let Err(err) = body.style().set_property("overflow", value)
        {
            log::warn!("could not set body overflow: {}", js_error_message(&err));
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("auto");
    }
}

/// Document-level listener that stays attached until dropped.
pub struct DocumentListener {
    event: &'static str,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl DocumentListener {
    /// Attach `handler` for `event` on the document.
    ///
    /// # Errors
    /// Returns the JavaScript exception if the listener cannot be registered.
    pub fn keyboard(
        event: &'static str,
        handler: impl FnMut(KeyboardEvent) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(handler);
        document().add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self { event, closure })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
