//! Command registry and dispatch.
//!
//! Verbs map to handlers through a [`Registry`]. Session gating is a
//! property of how a handler is registered: [`gated`] wraps a handler
//! function in a closure that checks for an active session before the
//! handler body runs, so no handler duplicates the check inline.

use crate::console::Console;
use crate::error::Result;
use crate::handlers;
use crate::shell::Shell;

/// A plain handler function for one verb.
pub type HandlerFn<C> = fn(&mut Shell<C>, &str) -> Result<()>;

/// A registered handler, possibly wrapped with the login gate.
pub type Handler<C> = Box<dyn Fn(&mut Shell<C>, &str) -> Result<()>>;

/// Message printed when a gated command is refused.
pub const LOGIN_REQUIRED: &str = "you must be logged in to use this function";

/// Wrap a handler so it refuses to run without an active session.
///
/// The refusal happens before any handler code executes, so a gated
/// command invoked while anonymous has no side effects at all.
pub fn gated<C: Console + 'static>(f: HandlerFn<C>) -> Handler<C> {
    Box::new(move |shell, arg| {
        if shell.session().is_none() {
            shell.print(LOGIN_REQUIRED);
            return Ok(());
        }
        f(shell, arg)
    })
}

/// Register a handler as-is, with no gate.
pub fn ungated<C: Console + 'static>(f: HandlerFn<C>) -> Handler<C> {
    Box::new(f)
}

/// One dispatchable command.
pub struct Command<C: Console> {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    handler: Handler<C>,
}

/// Registry of available commands with dispatch.
pub struct Registry<C: Console> {
    commands: Vec<Command<C>>,
}

impl<C: Console + 'static> Registry<C> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command. The gate decision is made here, once, by the
    /// choice of [`gated`] or [`ungated`] wrapper.
    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: Handler<C>,
    ) {
        self.commands.push(Command {
            name,
            description,
            usage,
            handler,
        });
    }

    /// Dispatch one input line: split off the verb, route the rest of
    /// the line to the matching handler.
    ///
    /// Unknown verbs and empty lines are reported or ignored here;
    /// neither reaches a handler.
    ///
    /// # Errors
    ///
    /// Propagates storage and I/O errors from the handler. Argument
    /// parse failures never surface here; handlers recover from those
    /// locally.
    pub fn dispatch(&self, shell: &mut Shell<C>, line: &str) -> Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        if verb == "help" || verb == "?" {
            self.help(shell, rest);
            return Ok(());
        }

        match self.commands.iter().find(|c| c.name == verb) {
            Some(command) => (command.handler)(shell, rest),
            None => {
                shell.print(&format!("unknown command: {verb}"));
                Ok(())
            }
        }
    }

    /// `help` with no argument lists every verb; `help <verb>` prints
    /// that command's usage text.
    fn help(&self, shell: &mut Shell<C>, verb: &str) {
        if verb.is_empty() {
            shell.print("commands:");
            for command in &self.commands {
                shell.print(&format!("  {:40} {}", command.name, command.description));
            }
            shell.print(
                "  help [command]                           show this list or one command's usage",
            );
            return;
        }
        match self.commands.iter().find(|c| c.name == verb) {
            Some(command) => {
                shell.print(command.description);
                shell.print(command.usage);
            }
            None => shell.print(&format!("unknown command: {verb}")),
        }
    }
}

impl<C: Console + 'static> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full carpool verb set.
///
/// `select_ride_request` is registered ungated, preserving the observed
/// behavior of the system this shell replaces.
#[must_use]
pub fn standard<C: Console + 'static>() -> Registry<C> {
    use crate::args;

    let mut registry = Registry::new();
    registry.register(
        "login",
        "log in to the carpool database",
        "usage: login",
        ungated(handlers::login),
    );
    registry.register(
        "logout",
        "log out of the carpool database",
        "usage: logout",
        gated(handlers::logout),
    );
    registry.register(
        "exit",
        "log out (if needed) and exit the shell",
        "usage: exit",
        ungated(handlers::exit),
    );
    registry.register(
        "show_inbox",
        "show your inbox and mark it seen",
        "usage: show_inbox",
        gated(handlers::show_inbox),
    );
    registry.register(
        "list_bookings",
        "list all bookings on rides you drive",
        "usage: list_bookings",
        gated(handlers::list_bookings),
    );
    registry.register(
        "cancel_booking",
        "cancel a booking on one of your rides",
        args::USAGE_CANCEL_BOOKING,
        gated(handlers::cancel_booking),
    );
    registry.register(
        "post_ride_request",
        "post a ride request",
        args::USAGE_POST_RIDE_REQUEST,
        gated(handlers::post_ride_request),
    );
    registry.register(
        "list_ride_requests",
        "list your ride requests",
        "usage: list_ride_requests",
        gated(handlers::list_ride_requests),
    );
    registry.register(
        "search_ride_requests_by_location_code",
        "search ride requests by pickup location code",
        args::USAGE_SEARCH_BY_LOCATION_CODE,
        gated(handlers::search_ride_requests_by_location_code),
    );
    registry.register(
        "search_ride_requests_by_city_name",
        "search ride requests by pickup city name",
        args::USAGE_SEARCH_BY_CITY_NAME,
        gated(handlers::search_ride_requests_by_city_name),
    );
    registry.register(
        "delete_ride_request",
        "delete one of your ride requests",
        args::USAGE_DELETE_RIDE_REQUEST,
        gated(handlers::delete_ride_request),
    );
    registry.register(
        "select_ride_request",
        "select a ride request and optionally message its poster",
        args::USAGE_SELECT_RIDE_REQUEST,
        ungated(handlers::select_ride_request),
    );
    registry.register(
        "offer_ride",
        "offer a ride (not implemented)",
        "usage: offer_ride",
        gated(handlers::offer_ride),
    );
    registry.register(
        "search_rides",
        "search for rides (not implemented)",
        "usage: search_rides",
        gated(handlers::search_rides),
    );
    registry.register(
        "book_member",
        "book another member on a ride (not implemented)",
        "usage: book_member",
        gated(handlers::book_member),
    );
    registry
}
