pub mod booking_form;
pub mod confirmation_card;
