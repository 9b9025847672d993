use artkat_gallery::{GalleryView, NavigationState, OthersTab, resolve, state_from_path};
use artkat_web::app::ArtworkPage;
use artkat_web::data::datasets;
use artkat_web::pages::artwork::{GalleryPage, GalleryPageProps};
use artkat_web::pages::home::{HomePage, HomePageProps};
use futures::executor::block_on;
use std::rc::Rc;
use yew::prelude::*;
use yew::{Callback, LocalServerRenderer};
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::Router;

fn gallery_props(state: NavigationState) -> GalleryPageProps {
    let data = datasets();
    let displayed = resolve(&data.catalog, state.filter());
    GalleryPageProps {
        view: Rc::new(GalleryView::assemble(state, &displayed, &data.others, None)),
        on_filter: Callback::noop(),
        on_tab: Callback::noop(),
        on_open_title: Callback::noop(),
        on_open_item: Callback::noop(),
        on_open_sample: Callback::noop(),
        on_close: Callback::noop(),
    }
}

#[test]
fn home_page_renders_browse_action() {
    let props = HomePageProps {
        on_browse: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("hero__title"));
    assert!(html.contains("View My Work"));
}

#[test]
fn gallery_page_lists_every_item_under_all() {
    let html = block_on(
        LocalServerRenderer::<GalleryPage>::with_props(gallery_props(NavigationState::All))
            .render(),
    );
    assert!(html.contains(r#"id="portfolio""#));
    assert_eq!(html.matches("filter-btn active").count(), 1);
    assert!(!html.contains("category-header"));
    for item in datasets().catalog.items() {
        assert!(html.contains(&item.title), "missing {}", item.title);
    }
    assert!(!html.contains("detail-overlay"));
}

#[test]
fn gallery_page_shows_webtoon_caption_and_only_webtoons() {
    let html = block_on(
        LocalServerRenderer::<GalleryPage>::with_props(gallery_props(NavigationState::Webtoon))
            .render(),
    );
    assert!(html.contains("List of webtoon titles where I contributed as an assistant artist."));
    assert!(html.contains("Ashen Crown"));
    assert!(!html.contains("Moonlit Errand"));
}

#[test]
fn gallery_page_renders_media_mounts_only_on_art_process() {
    let art = block_on(
        LocalServerRenderer::<GalleryPage>::with_props(gallery_props(NavigationState::Others(
            OthersTab::ArtProcess,
        )))
        .render(),
    );
    assert_eq!(
        art.matches("art-player-wrapper").count(),
        datasets().others.art_process.len()
    );
    assert!(!art.contains("portfolio-item__category"));

    let sheets = block_on(
        LocalServerRenderer::<GalleryPage>::with_props(gallery_props(NavigationState::Others(
            OthersTab::CharacterDesign,
        )))
        .render(),
    );
    assert!(!sheets.contains("art-player-wrapper"));
}

#[derive(Properties, PartialEq)]
struct AtAddressProps {
    path: AttrValue,
}

#[function_component(ArtworkAtAddress)]
fn artwork_at_address(props: &AtAddressProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::with_entries(vec![props.path.to_string()]));
    html! {
        <Router {history}>
            <ArtworkPage />
        </Router>
    }
}

fn render_at(path: &str) -> String {
    block_on(
        LocalServerRenderer::<ArtworkAtAddress>::with_props(AtAddressProps {
            path: AttrValue::from(path.to_string()),
        })
        .render(),
    )
}

#[test]
fn deep_link_seeds_the_gallery_state() {
    let html = render_at("/artwork/others/character-design");
    assert_eq!(
        state_from_path("/artwork/others/character-design"),
        NavigationState::Others(OthersTab::CharacterDesign)
    );
    assert!(html.contains("others-tab active"));
    assert!(html.contains("portfolio-item character-design"));
    assert!(html.contains("filter-btn active"));
    assert!(!html.contains("art-player-wrapper"));
}

#[test]
fn bare_gallery_address_shows_all_items() {
    let html = render_at("/artwork");
    for item in datasets().catalog.items() {
        assert!(html.contains(&item.title), "missing {}", item.title);
    }
    assert!(!html.contains("others-container"));
}
