use crate::infra::{
    default_eligibility_config, demo_price_list, InMemoryNoticePublisher,
    InMemoryReservationRepository, InMemorySalonRepository,
};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use salon_unlimited::error::AppError;
use salon_unlimited::workflows::booking::{
    BookingRequest, CustomerId, EligibilityEngine, ReservationDeskService, ReservationLedger,
    Treatment,
};
use salon_unlimited::workflows::salon::{
    PriceList, SalonDirectoryService, SalonRegistration,
};

#[derive(Args, Debug)]
pub(crate) struct EligibilityReportArgs {
    /// Reservation ledger CSV (`Customer ID,Date,Status` rows)
    #[arg(long)]
    pub(crate) ledger: PathBuf,
    /// Restrict the report to a single customer id
    #[arg(long)]
    pub(crate) customer: Option<String>,
    /// Candidate booking date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// First booking date of the walkthrough (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) fn run_eligibility_report(args: EligibilityReportArgs) -> Result<(), AppError> {
    let EligibilityReportArgs {
        ledger,
        customer,
        date,
    } = args;

    let target = date.unwrap_or_else(|| Local::now().date_naive());
    let ledger = ReservationLedger::from_path(ledger)?;
    let engine = EligibilityEngine::new(default_eligibility_config());
    let prices = demo_price_list();

    let customers = match customer {
        Some(id) => vec![CustomerId(id)],
        None => ledger.customers(),
    };

    println!("Treatment eligibility report for {target}");
    for customer in customers {
        let history = ledger.history_for(&customer);
        let outcome = engine.outcome(customer.clone(), &history, target, &prices);
        println!(
            "- {} ({} ledger rows): {}",
            customer.0,
            history.len(),
            outcome.decision.label()
        );
        for option in &outcome.options {
            println!("    bookable: {} at {} yen", option.treatment.label(), option.price);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let first_visit = args.date.unwrap_or_else(|| Local::now().date_naive());
    let follow_up = first_visit + chrono::Duration::days(14);

    println!("Salon reservation demo");

    let reservations = Arc::new(InMemoryReservationRepository::default());
    let salons = Arc::new(InMemorySalonRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());

    let directory = SalonDirectoryService::new(salons.clone());
    let salon = match directory.register(demo_registration()) {
        Ok(salon) => salon,
        Err(err) => {
            println!("  Salon registration rejected: {err}");
            return Ok(());
        }
    };
    let stylist = match directory.add_stylist(&salon.id, "Aoi Tanaka".to_string()) {
        Ok(stylist) => stylist,
        Err(err) => {
            println!("  Stylist registration rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Registered {} ({}) with stylist {}",
        salon.name, salon.id.0, stylist.name
    );

    let desk = ReservationDeskService::new(
        reservations,
        salons,
        notices.clone(),
        default_eligibility_config(),
    );

    let customer = CustomerId("cus-demo".to_string());
    let options = match desk.treatment_options(&customer, &salon.id, first_visit) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Options unavailable: {err}");
            return Ok(());
        }
    };
    println!(
        "- New customer decision for {first_visit}: {}",
        options.decision.label()
    );
    for option in &options.options {
        println!("    {} at {} yen", option.treatment.label(), option.price);
    }

    let start = NaiveTime::from_hms_opt(10, 0, 0).expect("valid time");
    let end = NaiveTime::from_hms_opt(11, 0, 0).expect("valid time");
    let booking = match desk.book(BookingRequest {
        customer_id: customer.clone(),
        salon_id: salon.id.clone(),
        stylist_id: stylist.id.clone(),
        date: first_visit,
        start,
        end,
        treatment: Treatment::FullCut,
    }) {
        Ok(reservation) => reservation,
        Err(err) => {
            println!("  Booking rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Booked {} for {} on {}",
        booking.id.0,
        booking.treatment.label(),
        booking.date
    );

    match desk.complete(&booking.id) {
        Ok(completed) => println!("- Visit settled as {}", completed.status.label()),
        Err(err) => {
            println!("  Completion failed: {err}");
            return Ok(());
        }
    }

    match desk.treatment_options(&customer, &salon.id, follow_up) {
        Ok(outcome) => {
            println!(
                "- Follow-up decision for {follow_up}: {}",
                outcome.decision.label()
            );
            for option in &outcome.options {
                println!("    {} at {} yen", option.treatment.label(), option.price);
            }
        }
        Err(err) => {
            println!("  Options unavailable: {err}");
            return Ok(());
        }
    }

    let events = notices.events();
    if events.is_empty() {
        println!("- Confirmation notices: none dispatched");
    } else {
        println!("- Confirmation notices:");
        for notice in events {
            println!("    template={} -> {}", notice.template, notice.reservation_id.0);
        }
    }

    Ok(())
}

fn demo_registration() -> SalonRegistration {
    let prices: PriceList = demo_price_list();
    SalonRegistration {
        name: "Unlimited Kanda".to_string(),
        email: "kanda@unlimited.example".to_string(),
        phone: "0312345678".to_string(),
        address: "2-3-1 Kanda, Chiyoda-ku, Tokyo".to_string(),
        home_page: "https://unlimited.example/kanda".to_string(),
        business_hours: "10:00-19:00, closed Tuesdays".to_string(),
        prices,
    }
}
