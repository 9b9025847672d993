use crate::app::state::NavStore;
use crate::router::Route;
use artkat_gallery::{NavAction, NavigationState, PathRequest};
use yew::prelude::*;
use yew_router::Routable;
use yew_router::prelude::Navigator;

/// Route to push for a user-intent request, skipping when the address already matches.
fn route_for_request(request: &PathRequest, current_route: Option<&Route>) -> Option<Route> {
    let route = Route::recognize(&request.path)?;
    (Some(&route) != current_route).then_some(route)
}

/// Address action for a route change; `None` when the route is not a gallery
/// route or already matches the state.
fn action_for_route(state: NavigationState, route: Option<&Route>) -> Option<NavAction> {
    let route = route?;
    let addressed = route.to_state()?;
    (addressed != state).then(|| NavAction::AddressChanged(route.to_path()))
}

/// Path used to seed the store on first render.
#[must_use]
pub fn initial_path(route: Option<&Route>) -> String {
    route.map_or_else(|| String::from("/artwork"), Routable::to_path)
}

#[hook]
pub fn use_push_route_on_intent(store: &UseReducerHandle<NavStore>, navigator: Option<Navigator>) {
    let request = store.last_push().cloned();
    let route = yew_router::hooks::use_route::<Route>();
    use_effect_with(request, move |request| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            request
                .as_ref()
                .and_then(|request| route_for_request(request, route.as_ref())),
        ) {
            nav.push(&new_route);
        }
    });
}

#[hook]
pub fn use_sync_state_with_route(store: &UseReducerHandle<NavStore>, route: Option<Route>) {
    let store = store.clone();
    use_effect_with(route, move |route| {
        if let Some(action) = action_for_route(store.state(), route.as_ref()) {
            store.dispatch(action);
        }
    });
}
