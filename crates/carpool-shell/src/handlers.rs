//! One handler per verb.
//!
//! Handlers validate their arguments, run a small number of repository
//! operations, and render results. Argument parse failures are
//! recovered here (message plus usage text, no side effects); storage
//! and console failures propagate to the loop, which logs them.

use carpool_core::{InboxMessage, RideRequest};

use crate::args::{self, ParseError};
use crate::console::Console;
use crate::error::Result;
use crate::render;
use crate::shell::Shell;

fn report_parse_error<C: Console>(shell: &mut Shell<C>, err: &ParseError) {
    tracing::warn!(error = %err, "invalid command argument");
    shell.print(&err.message);
    shell.print(err.usage);
}

pub(crate) fn login<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    if let Some(session) = shell.session() {
        let line = format!("already logged in as user: {}", session.email());
        shell.print(&line);
        return Ok(());
    }
    shell.interactive_login()?;
    Ok(())
}

pub(crate) fn logout<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    shell.logout();
    Ok(())
}

pub(crate) fn exit<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    if shell.session().is_some() {
        shell.logout();
    }
    shell.stop();
    Ok(())
}

pub(crate) fn show_inbox<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    shell.show_inbox()
}

pub(crate) fn list_bookings<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    let Some(email) = shell.session_email() else {
        return Ok(());
    };
    let bookings = shell.store().list_bookings_for_driver(&email)?;
    for booking in &bookings {
        let line = render::booking_line(booking);
        shell.print(&line);
    }
    Ok(())
}

pub(crate) fn cancel_booking<C: Console>(shell: &mut Shell<C>, arg: &str) -> Result<()> {
    let Some(email) = shell.session_email() else {
        return Ok(());
    };
    let args = match args::parse_cancel_booking(arg) {
        Ok(args) => args,
        Err(e) => {
            report_parse_error(shell, &e);
            return Ok(());
        }
    };

    let Some(booking) = shell.store().find_booking_for_driver(args.bno, &email)? else {
        // Ownership miss: degrade to showing the caller their own rows.
        let line = format!(
            "no booking {} found on your rides; your current bookings:",
            args.bno
        );
        shell.print(&line);
        return list_bookings(shell, "");
    };

    // First checkpoint: the booking is gone once this returns.
    shell
        .store()
        .delete_booking_for_driver(args.bno, &email)?;

    // Second checkpoint: notify the formerly booked member.
    let content = format!(
        "your booking {} on ride {} was cancelled by the driver",
        booking.bno, booking.rno
    );
    shell.store().send_message(&InboxMessage::new(
        booking.email.clone(),
        email,
        content,
        booking.rno,
    ))?;

    let line = format!("cancelled booking {} and notified {}", booking.bno, booking.email);
    shell.print(&line);
    Ok(())
}

pub(crate) fn post_ride_request<C: Console>(shell: &mut Shell<C>, arg: &str) -> Result<()> {
    let Some(email) = shell.session_email() else {
        return Ok(());
    };
    let args = match args::parse_post_ride_request(arg) {
        Ok(args) => args,
        Err(e) => {
            report_parse_error(shell, &e);
            return Ok(());
        }
    };

    // Validate both codes before touching the requests table.
    for lcode in [&args.pickup, &args.dropoff] {
        if !shell.store().location_exists(lcode)? {
            tracing::warn!(lcode = %lcode, "unknown location code");
            let line = format!("unknown location code: {lcode}");
            shell.print(&line);
            return Ok(());
        }
    }

    let rid = shell.store().next_rid()?;
    shell.store().insert_request(&RideRequest {
        rid,
        email,
        date: args.date,
        pickup: args.pickup,
        dropoff: args.dropoff,
        price: args.price,
    })?;
    shell.print(&format!("posted ride request {rid}"));
    Ok(())
}

pub(crate) fn list_ride_requests<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    let Some(email) = shell.session_email() else {
        return Ok(());
    };
    let requests = shell.store().list_requests_for_member(&email)?;
    for request in &requests {
        let line = render::request_line(request);
        shell.print(&line);
    }
    Ok(())
}

pub(crate) fn search_ride_requests_by_location_code<C: Console>(
    shell: &mut Shell<C>,
    arg: &str,
) -> Result<()> {
    let lcode = match args::parse_location_code(arg) {
        Ok(lcode) => lcode,
        Err(e) => {
            report_parse_error(shell, &e);
            return Ok(());
        }
    };
    let requests = shell.store().search_requests_by_pickup(&lcode)?;
    let lines: Vec<String> = requests.iter().map(render::request_line).collect();
    shell.render_paged(&lines)
}

pub(crate) fn search_ride_requests_by_city_name<C: Console>(
    shell: &mut Shell<C>,
    arg: &str,
) -> Result<()> {
    let city = match args::parse_city_name(arg) {
        Ok(city) => city,
        Err(e) => {
            report_parse_error(shell, &e);
            return Ok(());
        }
    };
    let requests = shell.store().search_requests_by_city(&city)?;
    let lines: Vec<String> = requests.iter().map(render::request_line).collect();
    shell.render_paged(&lines)
}

pub(crate) fn delete_ride_request<C: Console>(shell: &mut Shell<C>, arg: &str) -> Result<()> {
    let Some(email) = shell.session_email() else {
        return Ok(());
    };
    let rid = match args::parse_delete_ride_request(arg) {
        Ok(rid) => rid,
        Err(e) => {
            report_parse_error(shell, &e);
            return Ok(());
        }
    };

    let deleted = shell.store().delete_request_for_member(rid, &email)?;
    if deleted == 0 {
        let line = format!("no ride request {rid} posted by you; your current ride requests:");
        shell.print(&line);
        return list_ride_requests(shell, "");
    }
    shell.print(&format!("deleted ride request {rid}"));
    Ok(())
}

/// Any caller may view a request. Sending the follow-up message still
/// requires a session, since the message needs a sender identity.
pub(crate) fn select_ride_request<C: Console>(shell: &mut Shell<C>, arg: &str) -> Result<()> {
    let rid = match args::parse_select_ride_request(arg) {
        Ok(rid) => rid,
        Err(e) => {
            report_parse_error(shell, &e);
            return Ok(());
        }
    };

    let Some(request) = shell.store().find_request(rid)? else {
        shell.print(&format!("no ride request {rid}"));
        return Ok(());
    };
    let line = render::request_line(&request);
    shell.print(&line);

    // y/n confirmation; anything else re-prompts, end-of-input stops.
    loop {
        match shell.read_line("message the poster? (y/n): ")?.as_deref() {
            Some("y") => break,
            Some("n") | None => return Ok(()),
            Some(_) => {}
        }
    }

    let Some(sender) = shell.session_email() else {
        shell.print("you must be logged in to send a message");
        return Ok(());
    };
    let Some(content) = shell.read_line("message: ")? else {
        return Ok(());
    };
    shell.store().send_message(&InboxMessage::new(
        request.email.clone(),
        sender,
        content,
        request.rid,
    ))?;
    shell.print(&format!("message sent to {}", request.email));
    Ok(())
}

pub(crate) fn offer_ride<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    shell.print("offer_ride is not implemented yet");
    Ok(())
}

pub(crate) fn search_rides<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    shell.print("search_rides is not implemented yet");
    Ok(())
}

pub(crate) fn book_member<C: Console>(shell: &mut Shell<C>, _arg: &str) -> Result<()> {
    shell.print("book_member is not implemented yet");
    Ok(())
}
