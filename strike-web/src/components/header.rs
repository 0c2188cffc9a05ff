use strike_core::View;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: View,
}

/// Heading shown above each view.
#[must_use]
pub const fn title_for(view: View) -> &'static str {
    match view {
        View::Booking => "Booking",
        View::Confirmation => "See you soon!",
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header class="top">
            <img class="top__logo" src={crate::paths::asset_path(crate::paths::LOGO)} alt="Strike logo" />
            <h1 class="top__title">{ title_for(p.view) }</h1>
        </header>
    }
}
