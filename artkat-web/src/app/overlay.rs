use crate::dom::BodyScrollLock;
use artkat_gallery::{CatalogItem, OverlayController, SampleKind};
use yew::prelude::*;

/// Overlay host handed to click handlers.
#[derive(Clone, PartialEq)]
pub struct OverlayHandle {
    pub selected: Option<CatalogItem>,
    pub open: Callback<CatalogItem>,
    pub open_derived: Callback<(String, SampleKind)>,
    pub close: Callback<()>,
}

/// Detail overlay backed by one [`OverlayController`] per mounted gallery.
///
/// The controller is the only writer of the body scroll lock. Unmounting the
/// gallery closes it, so the lock never outlives the page.
#[hook]
pub fn use_detail_overlay() -> OverlayHandle {
    let controller = use_mut_ref(|| OverlayController::new(BodyScrollLock));
    let selected = use_state(|| None::<CatalogItem>);

    let open = {
        let controller = controller.clone();
        let selected = selected.clone();
        Callback::from(move |item: CatalogItem| {
            let mut controller = controller.borrow_mut();
            controller.open(item);
            selected.set(controller.selected().cloned());
        })
    };

    let open_derived = {
        let controller = controller.clone();
        let selected = selected.clone();
        Callback::from(move |(source, kind): (String, SampleKind)| {
            let mut controller = controller.borrow_mut();
            controller.open_derived(&source, kind);
            selected.set(controller.selected().cloned());
        })
    };

    let close = {
        let controller = controller.clone();
        let selected = selected.clone();
        Callback::from(move |()| {
            controller.borrow_mut().close();
            selected.set(None);
        })
    };

    use_effect_with((), move |()| move || controller.borrow_mut().close());

    OverlayHandle {
        selected: (*selected).clone(),
        open,
        open_derived,
        close,
    }
}
