//! Booking form: date, time, bowler and lane counts, shoe sizes and submit.
mod interactions;

use crate::components::button::Button;
use interactions::{field_handler, shoe_click_handler, shoe_input_handler};
use strike_core::{BookingDraft, ShoeSizes};
use yew::prelude::*;

pub use interactions::{BookingField, ShoeAction, SubmitGate, apply_shoe_action, submit_gate};

pub const SUBMIT_LABEL: &str = "strIIIIIike!";

#[derive(Properties, PartialEq, Clone)]
pub struct BookingFormProps {
    pub draft: BookingDraft,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub submitting: bool,
    pub on_change: Callback<BookingDraft>,
    pub on_submit: Callback<()>,
}

fn render_field(
    field: BookingField,
    draft: &BookingDraft,
    on_change: &Callback<BookingDraft>,
) -> Html {
    let oninput = field_handler(field, draft.clone(), on_change.clone());
    html! {
        <section class="input">
            <label class="input__label" for={field.id()}>{ field.label() }</label>
            <input
                class="input__field"
                id={field.id()}
                type={field.input_type()}
                value={field.value(draft).to_string()}
                {oninput}
            />
        </section>
    }
}

fn render_shoe(
    position: usize,
    draft: &BookingDraft,
    on_change: &Callback<BookingDraft>,
) -> Html {
    let id = format!("shoe-{position}");
    let value = draft.shoes.get(position).unwrap_or_default().to_string();
    let oninput = shoe_input_handler(position, draft.clone(), on_change.clone());
    let remove = shoe_click_handler(
        ShoeAction::Remove(position),
        draft.clone(),
        on_change.clone(),
    );
    html! {
        <article class="shoes__form" key={id.clone()}>
            <section class="input">
                <label class="input__label" for={id.clone()}>
                    { ShoeSizes::label(position) }
                </label>
                <input class="input__field shoes__input" {id} type="text" {value} {oninput} />
            </section>
            <button type="button" class="shoes__button" onclick={remove}>{ "-" }</button>
        </article>
    }
}

fn render_shoes(draft: &BookingDraft, on_change: &Callback<BookingDraft>) -> Html {
    let add = shoe_click_handler(ShoeAction::Add, draft.clone(), on_change.clone());
    html! {
        <section class="shoes">
            <header>
                <h2 class="shoes__heading">{ "Shoes" }</h2>
            </header>
            { for (0..draft.shoes.len()).map(|position| render_shoe(position, draft, on_change)) }
            <button type="button" class="shoes__button shoes__button--add" onclick={add}>
                { "+" }
            </button>
        </section>
    }
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let error = props.error.as_ref().map_or_else(
        || html! {},
        |message| html! { <p class="error-message" role="alert">{ message.clone() }</p> },
    );

    html! {
        <main class="booking__form">
            <section class="booking__when">
                { render_field(BookingField::Date, &props.draft, &props.on_change) }
                { render_field(BookingField::Time, &props.draft, &props.on_change) }
            </section>
            <section class="booking__who">
                { render_field(BookingField::People, &props.draft, &props.on_change) }
                { render_field(BookingField::Lanes, &props.draft, &props.on_change) }
            </section>
            { render_shoes(&props.draft, &props.on_change) }
            { error }
            <Button
                label={SUBMIT_LABEL}
                class="button booking__button"
                disabled={props.submitting}
                onclick={submit}
            />
        </main>
    }
}
