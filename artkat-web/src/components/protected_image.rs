use crate::dom::DocumentListener;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that refuses the context menu and drag-to-save.
#[function_component(ProtectedImage)]
pub fn protected_image(props: &Props) -> Html {
    let on_context_menu = Callback::from(|e: MouseEvent| e.prevent_default());
    let on_drag_start = Callback::from(|e: DragEvent| e.prevent_default());

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            draggable="false"
            oncontextmenu={on_context_menu}
            ondragstart={on_drag_start}
        />
    }
}

/// Whether a key combination opens the browser's inspection tools.
#[must_use]
pub fn is_inspection_shortcut(key: &str, ctrl: bool, shift: bool) -> bool {
    match key {
        "F12" => true,
        "I" | "i" | "C" | "c" => ctrl && shift,
        "U" | "u" => ctrl,
        _ => false,
    }
}

/// Swallow inspection shortcuts while the calling component is mounted.
#[hook]
pub fn use_inspection_guard() {
    use_effect_with((), |()| {
        let listener = DocumentListener::keyboard("keydown", |e: KeyboardEvent| {
            if is_inspection_shortcut(&e.key(), e.ctrl_key(), e.shift_key()) {
                e.prevent_default();
            }
        })
        .map_err(|err| {
            log::warn!(
                "inspection guard not installed: {}",
                crate::dom::js_error_message(&err)
            );
        })
        .ok();
        move || drop(listener)
    });
}
