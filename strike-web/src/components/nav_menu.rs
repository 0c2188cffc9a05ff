//! Hamburger navigation between the Booking and Confirmation views.
use strike_core::{NavEvent, View};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: View,
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<NavEvent>,
}

const fn event_for(target: View) -> NavEvent {
    match target {
        View::Booking => NavEvent::ToBooking,
        View::Confirmation => NavEvent::ToConfirmation,
    }
}

fn render_link(target: View, current: View, on_navigate: &Callback<NavEvent>) -> Html {
    let onclick = {
        let cb = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(event_for(target));
        })
    };
    let class = classes!(
        "navigation__link",
        (target == current).then_some("navigation__link--active")
    );
    html! {
        <a href="#" {class} {onclick}>{ target.label() }</a>
    }
}

#[function_component(NavMenu)]
pub fn nav_menu(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let links = if p.open {
        html! {
            <div class="navigation__links">
                { render_link(View::Booking, p.current, &p.on_navigate) }
                { render_link(View::Confirmation, p.current, &p.on_navigate) }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <nav class={classes!("navigation", p.open.then_some("navigation--open"))}>
            <img
                class="navigation__icon"
                src={crate::paths::asset_path(crate::paths::NAV_ICON)}
                alt="Menu"
                onclick={toggle}
            />
            { links }
        </nav>
    }
}
