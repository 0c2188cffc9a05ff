#![cfg(target_arch = "wasm32")]

use strike_web::booking::{
    CONFIRMATION_KEY, Confirmation, ConfirmationScreen, ConfirmationStorage,
    SessionConfirmationStorage, load_confirmation_screen,
};
use strike_web::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn saved() -> Confirmation {
    Confirmation {
        id: "12345".to_string(),
        price: "340".to_string(),
        active: true,
        when: "2024-12-13 11:00".to_string(),
        lanes: "1".to_string(),
        people: "2".to_string(),
        shoes: vec!["42".to_string(), "43".to_string()],
    }
}

#[wasm_bindgen_test]
fn session_slot_round_trips_confirmation() {
    let storage = SessionConfirmationStorage;
    storage.clear().expect("clear slot");
    assert_eq!(storage.load().expect("load empty"), None);

    storage.save(&saved()).expect("save");
    assert_eq!(storage.load().expect("load saved"), Some(saved()));
    assert_eq!(
        load_confirmation_screen(&storage),
        ConfirmationScreen::Details(saved())
    );
    storage.clear().expect("clear slot");
}

#[wasm_bindgen_test]
fn unreadable_session_slot_means_no_booking() {
    let session = dom::session_storage().expect("session storage");
    session
        .set_item(CONFIRMATION_KEY, "{not json")
        .expect("write raw slot");
    assert_eq!(
        load_confirmation_screen(&SessionConfirmationStorage),
        ConfirmationScreen::NoBooking
    );
    session.remove_item(CONFIRMATION_KEY).expect("remove raw slot");
}
