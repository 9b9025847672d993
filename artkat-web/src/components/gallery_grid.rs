use crate::components::protected_image::ProtectedImage;
use crate::paths::asset_path;
use artkat_gallery::Card;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Vec<Card>,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    /// Emits the title of the clicked card.
    pub on_open: Callback<String>,
}

#[function_component(GalleryGrid)]
pub fn gallery_grid(props: &Props) -> Html {
    html! {
        <div class="portfolio__grid">
            { props.caption.as_ref().map(|caption| html! {
                <div class="category-header"><em>{ caption.clone() }</em></div>
            }).unwrap_or_default() }
            { for props.cards.iter().map(|card| render_card(card, &props.on_open)) }
        </div>
    }
}

fn image(src: Option<&String>, alt: &str, class: &'static str) -> Html {
    src.map(|src| {
        html! {
            <ProtectedImage
                src={AttrValue::from(asset_path(src))}
                alt={AttrValue::from(alt.to_string())}
                class={classes!(class)}
            />
        }
    })
    .unwrap_or_default()
}

fn render_card(card: &Card, on_open: &Callback<String>) -> Html {
    let title = card.title().to_string();
    let onclick = {
        let title = title.clone();
        on_open.reform(move |_: MouseEvent| title.clone())
    };

    match card {
        Card::Webtoon {
            poster,
            description,
            genres,
            platform_label,
            platform_class,
            ..
        } => html! {
            <div key={title.clone()} class="portfolio-item webtoon" data-category="webtoon" {onclick}>
                <div class="webtoon-link">
                    { image(poster.as_ref(), &title, "portfolio-item__img webtoon-thumbnail") }
                    <div class="portfolio-item__info">
                        <h4>{ title.clone() }</h4>
                        <p class="webtoon-description">{ description.clone().unwrap_or_default() }</p>
                        if !genres.is_empty() {
                            <div class="webtoon-genres">
                                { for genres.iter().map(|genre| html! {
                                    <span class="genre-tag">{ genre.clone() }</span>
                                }) }
                            </div>
                        }
                        <div class="webtoon-meta">
                            <span class={classes!("platform-badge", *platform_class)}>{ *platform_label }</span>
                            <span class="portfolio-item__category">{ "webtoon" }</span>
                        </div>
                    </div>
                </div>
            </div>
        },
        Card::Artwork {
            image: src,
            description,
            primary_tag,
            tags_label,
            ..
        } => html! {
            <div
                key={title.clone()}
                class={classes!("portfolio-item", primary_tag.clone())}
                data-category={primary_tag.clone()}
                {onclick}
            >
                { image(src.as_ref(), &title, "portfolio-item__img") }
                <div class="portfolio-item__info">
                    <h4>{ title.clone() }</h4>
                    <p class="portfolio-description">{ description.clone().unwrap_or_default() }</p>
                    <span class="portfolio-item__category">{ tags_label.clone() }</span>
                </div>
            </div>
        },
    }
}
