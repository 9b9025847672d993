use crate::components::detail_overlay::DetailOverlay;
use crate::components::filter_bar::FilterBar;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::others_panel::OthersPanel;
use artkat_gallery::{CatalogItem, Filter, GalleryBody, GalleryView, OthersTab, SampleKind};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GalleryPageProps {
    pub view: Rc<GalleryView>,
    pub on_filter: Callback<Filter>,
    pub on_tab: Callback<OthersTab>,
    pub on_open_title: Callback<String>,
    pub on_open_item: Callback<CatalogItem>,
    pub on_open_sample: Callback<(String, SampleKind)>,
    pub on_close: Callback<()>,
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    let view = &props.view;

    let body = match &view.body {
        GalleryBody::Grid(cards) => html! {
            <GalleryGrid
                cards={cards.clone()}
                caption={view.caption.map(AttrValue::from)}
                on_open={props.on_open_title.clone()}
            />
        },
        GalleryBody::Others(others) => html! {
            <div class="portfolio__grid">
                <OthersPanel
                    view={others.clone()}
                    on_tab={props.on_tab.clone()}
                    on_open_item={props.on_open_item.clone()}
                    on_open_sample={props.on_open_sample.clone()}
                />
            </div>
        },
    };

    html! {
        <section id="portfolio" class="portfolio section">
            <div class="container">
                <h2 class="section__title">{ "Portfolio" }</h2>
                <FilterBar buttons={view.filters.clone()} on_select={props.on_filter.clone()} />
                { body }
            </div>
            { view.detail.clone().map(|detail| html! {
                <DetailOverlay {detail} on_close={props.on_close.clone()} />
            }).unwrap_or_default() }
        </section>
    }
}
