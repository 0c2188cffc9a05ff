use crate::components::header::Header;
use crate::components::ui::confirmation_card::ConfirmationCard;
use strike_core::{ConfirmationScreen, View};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfirmationPageProps {
    pub screen: ConfirmationScreen,
    pub on_back: Callback<()>,
}

#[function_component(ConfirmationPage)]
pub fn confirmation_page(props: &ConfirmationPageProps) -> Html {
    html! {
        <>
            <Header view={View::Confirmation} />
            <ConfirmationCard screen={props.screen.clone()} on_back={props.on_back.clone()} />
        </>
    }
}
