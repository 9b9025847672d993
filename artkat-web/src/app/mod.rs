use crate::components::protected_image::use_inspection_guard;
use crate::data;
use crate::pages::artwork::GalleryPage;
use crate::pages::home::HomePage;
use crate::router::Route;
use artkat_gallery::{CatalogItem, Filter, GalleryView, NavAction, OthersTab, resolve};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod media;
pub mod overlay;
pub mod routing;
pub mod state;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

/// Every gallery address renders the same page so its state survives navigation.
pub fn switch(route: Route) -> Html {
    if route.is_gallery() {
        html! { <ArtworkPage /> }
    } else {
        html! { <HomeRoute /> }
    }
}

#[function_component(HomeRoute)]
fn home_route() -> Html {
    let navigator = use_navigator();
    use_inspection_guard();
    let on_browse = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Artwork);
        }
    });
    html! { <HomePage {on_browse} /> }
}

/// Gallery container: owns navigation state, the overlay and the players.
#[function_component(ArtworkPage)]
pub fn artwork_page() -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let store = state::use_nav_store(routing::initial_path(route.as_ref()));
    routing::use_push_route_on_intent(&store, navigator);
    routing::use_sync_state_with_route(&store, route);

    let overlay = overlay::use_detail_overlay();
    let datasets = data::datasets();
    let nav_state = store.state();

    let entries = use_memo((), |()| datasets.others.art_process.clone());
    media::use_media_lifecycle(entries, nav_state.sub_tab());
    use_inspection_guard();

    let view = use_memo(
        (nav_state, overlay.selected.clone()),
        |(nav_state, selected)| {
            let displayed = resolve(&datasets.catalog, nav_state.filter());
            GalleryView::assemble(*nav_state, &displayed, &datasets.others, selected.as_ref())
        },
    );

    let on_filter = {
        let store = store.clone();
        Callback::from(move |filter: Filter| store.dispatch(NavAction::SelectFilter(filter)))
    };
    let on_tab = {
        let store = store.clone();
        Callback::from(move |tab: OthersTab| store.dispatch(NavAction::SelectTab(tab)))
    };
    let on_open_title = {
        let open = overlay.open.clone();
        Callback::from(move |title: String| match datasets.catalog.find(&title) {
            Some(item) => open.emit(item.clone()),
            None => log::warn!("no catalog item titled {title:?}"),
        })
    };
    let on_open_item: Callback<CatalogItem> = overlay.open.clone();

    html! {
        <GalleryPage
            {view}
            {on_filter}
            {on_tab}
            {on_open_title}
            {on_open_item}
            on_open_sample={overlay.open_derived.clone()}
            on_close={overlay.close.clone()}
        />
    }
}
