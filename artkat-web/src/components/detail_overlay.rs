use crate::components::protected_image::ProtectedImage;
use crate::paths::asset_path;
use artkat_gallery::{DetailInfo, DetailView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub detail: DetailView,
    pub on_close: Callback<()>,
}

/// Full-screen detail card for the selected item.
///
/// Backdrop clicks, the close button and Escape all emit `on_close`; clicks
/// inside the card stay inside it.
#[function_component(DetailOverlay)]
pub fn detail_overlay(props: &Props) -> Html {
    let card_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        use_effect_with((), move |()| {
            if let Some(el) = card_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.set_attribute("tabindex", "-1");
                let _ = el.focus();
            }
            || {}
        });
    }

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let keep_inside = Callback::from(|e: MouseEvent| e.stop_propagation());

    let detail = &props.detail;
    html! {
        <div class="detail-overlay" role="presentation" onclick={on_close.clone()}>
            <div
                class="detail-card"
                role="dialog"
                aria-modal="true"
                aria-label={detail.title.clone()}
                onclick={keep_inside}
                onkeydown={on_keydown}
                ref={card_ref}
            >
                <button type="button" class="detail-close" aria-label="Close detail" onclick={on_close}>
                    { "×" }
                </button>
                <div class={classes!("detail-content", detail.is_image_only().then_some("lineart-detail"))}>
                    <div class="detail-image">
                        { detail.image.as_ref().map(|src| html! {
                            <ProtectedImage
                                src={AttrValue::from(asset_path(src))}
                                alt={AttrValue::from(detail.title.clone())}
                                class={classes!(detail.image_class)}
                            />
                        }).unwrap_or_default() }
                    </div>
                    { detail.info.as_ref().map(|info| render_info(&detail.title, info)).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

fn render_info(title: &str, info: &DetailInfo) -> Html {
    html! {
        <div class="detail-info">
            <div class="detail-header">
                <h2 class="detail-title">{ title.to_string() }</h2>
            </div>
            <div class="detail-scrollable">
                if let Some(description) = &info.description {
                    <div class="detail-summary">
                        <h3 class="detail-subtitle">{ "Summary" }</h3>
                        <div class="detail-description-container">
                            <p class="detail-description">{ description.clone() }</p>
                        </div>
                    </div>
                }
                if !info.genres.is_empty() {
                    <div class="detail-genres-section">
                        <h3 class="detail-subtitle">{ "Genres" }</h3>
                        <div class="detail-genres">
                            { for info.genres.iter().map(|genre| html! {
                                <span class="genre-tag">{ genre.clone() }</span>
                            }) }
                        </div>
                    </div>
                }
                if let Some((tags, platform)) = &info.categories {
                    <div class="detail-categories-section">
                        <h3 class="detail-subtitle">{ "Categories" }</h3>
                        <div class="detail-meta">
                            { for tags.iter().map(|tag| html! {
                                <span class={classes!("detail-category", tag.clone())}>{ tag.clone() }</span>
                            }) }
                            { platform.map(|(label, class)| html! {
                                <span class={classes!("platform-badge", class)}>{ label }</span>
                            }).unwrap_or_default() }
                        </div>
                    </div>
                }
            </div>
            if let Some((url, label)) = &info.action {
                <div class="detail-actions-fixed">
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn btn--primary">
                        { *label }
                    </a>
                </div>
            }
        </div>
    }
}
