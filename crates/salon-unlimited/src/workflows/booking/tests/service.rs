use super::common::*;
use crate::workflows::booking::domain::{ReservationStatus, Treatment, TreatmentDecision};
use crate::workflows::booking::repository::ReservationRepository;
use crate::workflows::booking::service::BookingServiceError;
use crate::workflows::salon::domain::{SalonId, StylistId};

#[test]
fn booking_stores_reservation_and_publishes_notice() {
    let (service, reservations, _, notices) = build_desk();

    let stored = service
        .book(booking_request(day(2026, 7, 1)))
        .expect("booking succeeds");

    assert!(stored.id.0.starts_with("rsv-"));
    assert_eq!(stored.status, ReservationStatus::Booked);

    let persisted = reservations
        .fetch(&stored.id)
        .expect("repo fetch")
        .expect("reservation present");
    assert_eq!(persisted, stored);

    let events = notices.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "reservation_confirmed");
    assert_eq!(events[0].reservation_id, stored.id);
    assert_eq!(
        events[0].details.get("treatment").map(String::as_str),
        Some("full_cut")
    );
}

#[test]
fn booking_rejects_unknown_salon() {
    let (service, _, _, _) = build_desk();
    let mut request = booking_request(day(2026, 7, 1));
    request.salon_id = SalonId("sln-ghost".to_string());

    match service.book(request) {
        Err(BookingServiceError::UnknownSalon) => {}
        other => panic!("expected unknown salon, got {other:?}"),
    }
}

#[test]
fn booking_rejects_stylist_outside_roster() {
    let (service, _, _, _) = build_desk();
    let mut request = booking_request(day(2026, 7, 1));
    request.stylist_id = StylistId("sty-elsewhere".to_string());

    match service.book(request) {
        Err(BookingServiceError::StylistNotInSalon { stylist, salon }) => {
            assert_eq!(stylist, "sty-elsewhere");
            assert_eq!(salon, "sln-main");
        }
        other => panic!("expected roster mismatch, got {other:?}"),
    }
}

#[test]
fn booking_rejects_inverted_slot() {
    let (service, _, _, _) = build_desk();
    let mut request = booking_request(day(2026, 7, 1));
    request.start = at(11, 0);
    request.end = at(10, 0);

    match service.book(request) {
        Err(BookingServiceError::EmptySlot) => {}
        other => panic!("expected empty slot rejection, got {other:?}"),
    }
}

#[test]
fn open_reservation_blocks_new_booking() {
    let (service, reservations, _, notices) = build_desk();
    seed_visit(
        &reservations,
        "hist-001",
        day(2026, 6, 15),
        ReservationStatus::Booked,
    );

    match service.book(booking_request(day(2026, 7, 1))) {
        Err(BookingServiceError::BookingBlocked { date }) => {
            assert_eq!(date, day(2026, 7, 1));
        }
        other => panic!("expected blocked booking, got {other:?}"),
    }
    assert!(notices.events().is_empty());
}

#[test]
fn same_day_rebooking_is_blocked() {
    let (service, reservations, _, _) = build_desk();
    seed_visit(
        &reservations,
        "hist-001",
        day(2026, 7, 1),
        ReservationStatus::Completed,
    );

    match service.book(booking_request(day(2026, 7, 1))) {
        Err(BookingServiceError::BookingBlocked { .. }) => {}
        other => panic!("expected blocked booking, got {other:?}"),
    }
}

#[test]
fn maintenance_window_restricts_menu_to_maintenance_tier() {
    let (service, reservations, _, _) = build_desk();
    seed_visit(
        &reservations,
        "hist-001",
        day(2026, 6, 21),
        ReservationStatus::Completed,
    );

    // Full-price cut is off the menu ten days after a completed visit.
    match service.book(booking_request(day(2026, 7, 1))) {
        Err(BookingServiceError::TreatmentNotEligible {
            treatment: Treatment::FullCut,
            decision: TreatmentDecision::MaintenanceCut,
        }) => {}
        other => panic!("expected tier mismatch, got {other:?}"),
    }

    let mut request = booking_request(day(2026, 7, 1));
    request.treatment = Treatment::MaintenanceCut;
    let stored = service.book(request).expect("maintenance booking succeeds");
    assert_eq!(stored.treatment, Treatment::MaintenanceCut);
}

#[test]
fn lapsed_customer_books_full_tier_again() {
    let (service, reservations, _, _) = build_desk();
    seed_visit(
        &reservations,
        "hist-001",
        day(2026, 5, 1),
        ReservationStatus::Completed,
    );

    let mut request = booking_request(day(2026, 7, 1));
    request.treatment = Treatment::FullColor;
    let stored = service.book(request).expect("full tier booking succeeds");
    assert_eq!(stored.treatment, Treatment::FullColor);
}

#[test]
fn treatment_options_reflect_salon_prices() {
    let (service, reservations, _, _) = build_desk();

    let fresh = service
        .treatment_options(&customer(), &salon().id, day(2026, 7, 1))
        .expect("options resolve");
    assert_eq!(fresh.decision, TreatmentDecision::FullCut);
    assert_eq!(fresh.options.len(), 2);
    assert_eq!(fresh.options[0].price, 5500);
    assert_eq!(fresh.options[1].price, 8800);

    seed_visit(
        &reservations,
        "hist-001",
        day(2026, 6, 21),
        ReservationStatus::Completed,
    );
    let returning = service
        .treatment_options(&customer(), &salon().id, day(2026, 7, 1))
        .expect("options resolve");
    assert_eq!(returning.decision, TreatmentDecision::MaintenanceCut);
    assert_eq!(returning.options[0].price, 3300);
    assert_eq!(returning.options[1].price, 6600);
}

#[test]
fn treatment_options_require_known_salon() {
    let (service, _, _, _) = build_desk();

    match service.treatment_options(
        &customer(),
        &SalonId("sln-ghost".to_string()),
        day(2026, 7, 1),
    ) {
        Err(BookingServiceError::UnknownSalon) => {}
        other => panic!("expected unknown salon, got {other:?}"),
    }
}
