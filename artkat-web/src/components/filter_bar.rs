use artkat_gallery::{Filter, FilterButton};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub buttons: Vec<FilterButton>,
    pub on_select: Callback<Filter>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &Props) -> Html {
    html! {
        <div class="portfolio__filters" role="toolbar" aria-label="Filter artwork">
            { for props.buttons.iter().map(|button| {
                let filter = button.filter;
                let onclick = props.on_select.reform(move |_: MouseEvent| filter);
                html! {
                    <button
                        type="button"
                        class={classes!("filter-btn", button.active.then_some("active"))}
                        data-filter={button.slug}
                        aria-pressed={button.active.to_string()}
                        {onclick}
                    >
                        { button.label }
                    </button>
                }
            }) }
        </div>
    }
}
