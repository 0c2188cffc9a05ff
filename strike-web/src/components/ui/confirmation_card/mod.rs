#[cfg(test)]
mod tests;

use crate::components::button::Button;
use strike_core::{Confirmation, ConfirmationScreen, NO_BOOKING_MESSAGE};
use yew::prelude::*;

pub const BACK_LABEL: &str = "Sweet, let's go!";

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationCardProps {
    pub screen: ConfirmationScreen,
    #[prop_or_default]
    pub on_back: Callback<()>,
}

/// Label/value rows shown for a confirmed booking.
#[must_use]
pub fn detail_rows(confirmation: &Confirmation) -> [(&'static str, String); 4] {
    [
        ("When", confirmation.when.clone()),
        ("Who", confirmation.people.clone()),
        ("Lanes", confirmation.lanes.clone()),
        ("Booking number", confirmation.id.clone()),
    ]
}

fn render_row(label: &'static str, value: String) -> Html {
    html! {
        <section class="input">
            <label class="input__label">{ label }</label>
            <input class="input__field confirmation__input" type="text" {value} readonly={true} />
        </section>
    }
}

fn render_details(confirmation: &Confirmation, on_back: &Callback<()>) -> Html {
    let back = {
        let cb = on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <main class="confirmation__details">
            { for detail_rows(confirmation)
                .into_iter()
                .map(|(label, value)| render_row(label, value)) }
            <article class="confirmation__price">
                <p>{ "Total:" }</p>
                <span class="confirmation__total">{ confirmation.price_label() }</span>
            </article>
            <Button label={BACK_LABEL} class="button confirmation__button" onclick={back} />
        </main>
    }
}

#[function_component(ConfirmationCard)]
pub fn confirmation_card(props: &ConfirmationCardProps) -> Html {
    match &props.screen {
        ConfirmationScreen::Details(confirmation) => {
            render_details(confirmation, &props.on_back)
        }
        ConfirmationScreen::NoBooking => html! {
            <main class="confirmation__details">
                <h2 class="confirmation__no-booking">{ NO_BOOKING_MESSAGE }</h2>
            </main>
        },
    }
}
