mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::nav_menu::NavMenu;
use crate::pages::booking::BookingPage;
use crate::pages::confirmation::ConfirmationPage;
use strike_core::View;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let view = *state.view;

    let page = match view {
        View::Booking => html! {
            <BookingPage
                draft={(*state.draft).clone()}
                error={(*state.error).clone()}
                submitting={*state.submitting}
                on_change={handlers.draft_change.clone()}
                on_submit={handlers.submit.clone()}
            />
        },
        View::Confirmation => html! {
            <ConfirmationPage
                screen={(*state.confirmation).clone()}
                on_back={handlers.back_to_booking.clone()}
            />
        },
    };

    html! {
        <div class={classes!("app", view.class())}>
            <NavMenu
                current={view}
                open={*state.menu_open}
                on_toggle={handlers.toggle_menu.clone()}
                on_navigate={handlers.navigate.clone()}
            />
            { page }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::use_app_state;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(Harness)]
    fn harness() -> Html {
        let state = use_app_state(View::Booking);
        render_app(&state)
    }

    #[function_component(ReloadedHarness)]
    fn reloaded_harness() -> Html {
        let route = crate::router::Route::Confirmation;
        let state = use_app_state(crate::app::routing::initial_view(Some(&route)));
        render_app(&state)
    }

    #[test]
    fn reload_at_confirmation_url_renders_confirmation_view() {
        let html = block_on(LocalServerRenderer::<ReloadedHarness>::new().render());
        assert!(html.contains(r#"class="app confirmation""#));
        assert!(!html.contains("strIIIIIike!"));
    }

    #[test]
    fn app_starts_on_booking_view() {
        let html = block_on(LocalServerRenderer::<Harness>::new().render());
        assert!(html.contains(r#"class="app booking""#));
        assert!(html.contains("navigation__icon"));
        assert!(html.contains("strIIIIIike!"));
        assert!(!html.contains("Booking number"));
    }
}
