use super::*;
use futures::executor::block_on;
use yew::LocalServerRenderer;

fn confirmation() -> Confirmation {
    Confirmation {
        id: String::from("12345"),
        price: String::from("340"),
        active: true,
        when: String::from("2024-12-13 11:00"),
        lanes: String::from("1"),
        people: String::from("2"),
        shoes: vec![String::from("42"), String::from("43")],
    }
}

fn render(screen: ConfirmationScreen) -> String {
    block_on(
        LocalServerRenderer::<ConfirmationCard>::with_props(ConfirmationCardProps {
            screen,
            on_back: Callback::noop(),
        })
        .render(),
    )
}

#[test]
fn details_show_labels_and_total() {
    let html = render(ConfirmationScreen::Details(confirmation()));
    for label in ["When", "Who", "Lanes", "Booking number", "Total:"] {
        assert!(html.contains(label), "missing {label}");
    }
    assert!(html.contains("340 sek"));
    assert!(html.contains("Sweet"));
    assert!(!html.contains(NO_BOOKING_MESSAGE));
}

#[test]
fn rows_carry_confirmation_values() {
    let rows = detail_rows(&confirmation());
    assert_eq!(rows[0], ("When", String::from("2024-12-13 11:00")));
    assert_eq!(rows[1].1, "2");
    assert_eq!(rows[2].1, "1");
    assert_eq!(rows[3], ("Booking number", String::from("12345")));
}

#[test]
fn empty_session_shows_no_booking_message() {
    let html = render(ConfirmationScreen::NoBooking);
    assert!(html.contains(NO_BOOKING_MESSAGE));
    assert!(!html.contains("Booking number"));
    assert!(!html.contains("Total:"));
}
