//! ArtPlayer binding for the art-process tab.

use crate::dom;
use artkat_gallery::{MediaEntry, MediaError, MediaLifecycle, OthersTab, PlayerBackend, PlayerConfig};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Delay before the declared aspect ratio is applied; the player sizes itself on init.
const ASPECT_RATIO_DELAY_MS: i32 = 100;
const PLAYER_GLOBAL: &str = "Artplayer";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Artplayer)]
    type ArtPlayer;

    #[wasm_bindgen(constructor, catch, js_class = "Artplayer")]
    fn new(options: &JsValue) -> Result<ArtPlayer, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Artplayer")]
    fn destroy(this: &ArtPlayer, remove_html: bool) -> Result<(), JsValue>;
}

pub struct ArtPlayerHandle {
    player: ArtPlayer,
    alive: Rc<Cell<bool>>,
}

/// Creates players through the global `Artplayer` constructor.
#[derive(Debug, Default)]
pub struct ArtPlayerBackend;

impl ArtPlayerBackend {
    fn library_loaded() -> bool {
        js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(PLAYER_GLOBAL))
            .unwrap_or(false)
    }
}

impl PlayerBackend for ArtPlayerBackend {
    type Handle = ArtPlayerHandle;

    fn create(&mut self, config: &PlayerConfig) -> Result<ArtPlayerHandle, MediaError> {
        if !Self::library_loaded() {
            return Err(MediaError::Unavailable);
        }
        if !dom::element_exists(config.mount_id()) {
            return Err(MediaError::MissingMount(config.mount_id().to_string()));
        }
        let options = serde_wasm_bindgen::to_value(config)
            .map_err(|err| MediaError::Create(err.to_string()))?;
        let player = ArtPlayer::new(&options)
            .map_err(|err| MediaError::Create(dom::js_error_message(&err)))?;

        let alive = Rc::new(Cell::new(true));
        apply_aspect_ratio_later(
            JsValue::clone(&player),
            config.aspect_ratio.clone(),
            alive.clone(),
        );
        Ok(ArtPlayerHandle { player, alive })
    }

    fn destroy(&mut self, handle: ArtPlayerHandle) {
        handle.alive.set(false);
        if let Err(err) = handle.player.destroy(true) {
            log::warn!("player destroy failed: {}", dom::js_error_message(&err));
        }
    }
}

fn apply_aspect_ratio_later(player: JsValue, ratio: String, alive: Rc<Cell<bool>>) {
    wasm_bindgen_futures::spawn_local(async move {
        if dom::sleep_ms(ASPECT_RATIO_DELAY_MS).await.is_err() || !alive.get() {
            return;
        }
        if let Err(err) = js_sys::Reflect::set(
            &player,
            &JsValue::from_str("aspectRatio"),
            &JsValue::from_str(&ratio),
        ) {
            log::warn!("aspect ratio {ratio} not applied: {}", dom::js_error_message(&err));
        }
    });
}

/// Keep the art-process players in step with the active sub-tab.
///
/// Syncing runs after each commit so the mount points exist; unmounting the
/// gallery tears every player down.
#[hook]
pub fn use_media_lifecycle(entries: Rc<Vec<MediaEntry>>, active_tab: Option<OthersTab>) {
    let media = use_mut_ref(move || MediaLifecycle::new(ArtPlayerBackend, (*entries).clone()));

    {
        let media = media.clone();
        use_effect_with(active_tab, move |tab| {
            media.borrow_mut().sync(*tab);
        });
    }

    use_effect_with((), move |()| move || media.borrow_mut().deactivate());
}
