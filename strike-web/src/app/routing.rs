//! Keeps the active view and the browser URL in agreement.
//!
//! A single effect reconciles both directions. When the URL differs from the
//! one seen on the previous pass (including the first pass after a reload or
//! deep link) the URL wins and the view follows. Otherwise the view wins and
//! its route is pushed.
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(any(target_arch = "wasm32", test))]
use strike_core::View;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// What one reconciliation pass asks for.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    Settled,
    ShowView(View),
    PushRoute(Route),
}

/// View to start on for the URL the app was loaded at.
#[cfg(any(target_arch = "wasm32", test))]
#[must_use]
pub fn initial_view(route: Option<&Route>) -> View {
    route.and_then(Route::to_view).unwrap_or_default()
}

/// `previous` is the route seen on the last pass, `None` before the first one.
#[cfg(any(target_arch = "wasm32", test))]
#[must_use]
pub fn reconcile(
    view: View,
    route: Option<&Route>,
    previous: Option<&Option<Route>>,
) -> SyncAction {
    let route_changed = previous.is_none_or(|seen| seen.as_ref() != route);
    if route_changed && let Some(target) = route.and_then(Route::to_view) {
        return if target == view {
            SyncAction::Settled
        } else {
            SyncAction::ShowView(target)
        };
    }

    let wanted = Route::from_view(view);
    if route == Some(&wanted) {
        SyncAction::Settled
    } else {
        SyncAction::PushRoute(wanted)
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_route_view_sync(
    view: &UseStateHandle<View>,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let last_route = use_mut_ref(|| None::<Option<Route>>);
    let view = view.clone();
    use_effect_with((*view, route), move |(current, route)| {
        let previous = last_route.borrow_mut().replace(route.clone());
        match reconcile(*current, route.as_ref(), previous.as_ref()) {
            SyncAction::Settled => {}
            SyncAction::ShowView(next) => {
                log::debug!("view follows url: {next:?}");
                view.set(next);
            }
            SyncAction::PushRoute(next) => {
                if let Some(nav) = navigator.as_ref() {
                    log::debug!("url follows view: {next:?}");
                    nav.push(&next);
                }
            }
        }
    });
}
