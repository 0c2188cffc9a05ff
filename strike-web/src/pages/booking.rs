use crate::components::header::Header;
use crate::components::ui::booking_form::BookingForm;
use strike_core::{BookingDraft, View};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BookingPageProps {
    pub draft: BookingDraft,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub submitting: bool,
    pub on_change: Callback<BookingDraft>,
    pub on_submit: Callback<()>,
}

#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    html! {
        <>
            <Header view={View::Booking} />
            <BookingForm
                draft={props.draft.clone()}
                error={props.error.clone()}
                submitting={props.submitting}
                on_change={props.on_change.clone()}
                on_submit={props.on_submit.clone()}
            />
        </>
    }
}
