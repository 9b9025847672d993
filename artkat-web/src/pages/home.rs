use crate::paths::asset_path;
use yew::prelude::*;

/// Landing view, also shown for unknown addresses.
#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub on_browse: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let on_browse = props.on_browse.reform(|_: MouseEvent| ());
    let background = format!("background-image: url(\"{}\")", asset_path("/splash.webp"));

    html! {
        <section id="home" class="hero">
            <div class="hero__background" style={background}></div>
            <div class="hero__overlay">
                <div class="hero__content container">
                    <h1 class="hero__title">{ "ArtKat" }</h1>
                    <p class="hero__tagline">{ "Digital Artist & Illustrator" }</p>
                    <button type="button" class="btn btn--primary" onclick={on_browse}>
                        { "View My Work" }
                    </button>
                </div>
            </div>
        </section>
    }
}
