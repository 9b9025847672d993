use crate::components::protected_image::ProtectedImage;
use crate::paths::asset_path;
use artkat_gallery::{BreakdownRow, CatalogItem, MediaSlot, OthersContent, OthersTab, OthersView, SampleKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: OthersView,
    pub on_tab: Callback<OthersTab>,
    pub on_open_item: Callback<CatalogItem>,
    /// Emits the clicked crop and which stage it shows.
    pub on_open_sample: Callback<(String, SampleKind)>,
}

#[function_component(OthersPanel)]
pub fn others_panel(props: &Props) -> Html {
    let tabs = props.view.tabs.iter().map(|tab| {
        let target = tab.tab;
        let onclick = props.on_tab.reform(move |_: MouseEvent| target);
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("others-tab", tab.active.then_some("active"))}
                aria-selected={tab.active.to_string()}
                data-tab={target.key()}
                {onclick}
            >
                { tab.label }
            </button>
        }
    });

    let content = match &props.view.content {
        OthersContent::Breakdown(rows) => html! {
            <div class="lineart-grid">
                { for rows.iter().map(|row| breakdown_row(row, &props.on_open_sample)) }
            </div>
        },
        OthersContent::CharacterDesign { caption, items } => html! {
            <div class="character-design-grid">
                <div class="category-header"><em class="charDesign">{ *caption }</em></div>
                { for items.iter().map(|item| character_sheet(item, &props.on_open_item)) }
            </div>
        },
        OthersContent::ArtProcess { caption, slots } => html! {
            <div class="art-process-grid">
                <div class="category-header"><em class="artProcess">{ *caption }</em></div>
                <div class="video-grid">
                    { for slots.iter().map(media_mount) }
                </div>
            </div>
        },
    };

    html! {
        <div class="others-container">
            <div class="others-tabs" role="tablist">{ for tabs }</div>
            <div class="others-tab-content">{ content }</div>
        </div>
    }
}

fn breakdown_row(row: &BreakdownRow, on_open: &Callback<(String, SampleKind)>) -> Html {
    html! {
        <div key={row.base_image.clone()} class="lineart-artwork">
            <div class="visual-breakdown-grid">
                { for row.panels.iter().map(|panel| {
                    let crop = panel.crop_src.clone();
                    let kind = panel.kind;
                    let onclick = on_open.reform(move |_: MouseEvent| (crop.clone(), kind));
                    html! {
                        <div class="visual-breakdown-column" {onclick}>
                            <div class="visual-breakdown-image-container">
                                <ProtectedImage
                                    src={AttrValue::from(asset_path(&panel.crop_src))}
                                    alt={AttrValue::from(format!("{} version", panel.caption))}
                                    class={classes!("visual-breakdown-image")}
                                />
                                <div class="visual-breakdown-hover-overlay">
                                    <span class="visual-breakdown-hover-text">{ panel.caption }</span>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn character_sheet(item: &CatalogItem, on_open: &Callback<CatalogItem>) -> Html {
    let onclick = {
        let item = item.clone();
        on_open.reform(move |_: MouseEvent| item.clone())
    };
    html! {
        <div key={item.title.clone()} class="portfolio-item character-design" {onclick}>
            { item.image.as_ref().map(|src| html! {
                <ProtectedImage
                    src={AttrValue::from(asset_path(src))}
                    alt={AttrValue::from(item.title.clone())}
                    class={classes!("portfolio-item__img")}
                />
            }).unwrap_or_default() }
        </div>
    }
}

fn media_mount(slot: &MediaSlot) -> Html {
    html! {
        <div key={slot.entry_id.clone()} class="video-item">
            <div class="video-player-container">
                <div id={slot.mount_id.clone()} class="art-player-wrapper"></div>
            </div>
        </div>
    }
}
