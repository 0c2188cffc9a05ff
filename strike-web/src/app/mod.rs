#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod entry;
pub mod routing;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let app_state = state::use_app_state(routing::initial_view(route.as_ref()));

    routing::use_route_view_sync(&app_state.view, navigator, route);
    entry::use_view_entry(&app_state);

    view::render_app(&app_state)
}
