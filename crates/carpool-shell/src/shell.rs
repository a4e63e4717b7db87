//! Shell state and the interactive loop.
//!
//! A [`Shell`] owns the store connection, the console, and the login
//! state for one interactive session. It is plain state plus flow
//! methods; the verb table lives in [`registry`](crate::registry).

use carpool_core::{Email, Session};
use carpool_store::Store;

use crate::console::Console;
use crate::error::Result;
use crate::registry::Registry;
use crate::render;

/// Banner printed when the shell starts.
pub const INTRO: &str = "Welcome to the carpool shell. Type help or ? to list commands";

/// Searches print this many rows before offering the remainder.
pub const PAGE_SIZE: usize = 5;

/// One interactive shell session: store, console, and login state.
///
/// The session field is the whole login state machine: `None` is
/// Anonymous, `Some` is Authenticated. It is owned here rather than in
/// any global so independent shells can coexist (and be tested)
/// side by side.
pub struct Shell<C: Console> {
    store: Store,
    console: C,
    prompt: String,
    session: Option<Session>,
    running: bool,
}

impl<C: Console> Shell<C> {
    /// Build a shell over an opened store.
    pub fn new(store: Store, console: C, prompt: impl Into<String>) -> Self {
        Self {
            store,
            console,
            prompt: prompt.into(),
            session: None,
            running: false,
        }
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The active session's email, cloned out of the borrow.
    #[must_use]
    pub fn session_email(&self) -> Option<Email> {
        self.session.as_ref().map(|s| s.email().clone())
    }

    /// The store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Read access to the console, used by tests to inspect output.
    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Render one line.
    pub fn print(&mut self, line: &str) {
        self.console.print(line);
    }

    /// Read one line from the console.
    ///
    /// # Errors
    ///
    /// Returns an error if the console read fails.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.console.read_line(prompt)?)
    }

    /// Ask the loop to stop after the current command.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Release the store connection.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite refuses to close.
    pub fn close(self) -> Result<()> {
        Ok(self.store.close()?)
    }

    // -- Login state machine --

    /// Attempt one credential match.
    ///
    /// Idempotent while authenticated: reports the current identity and
    /// leaves the session untouched. On a match, transitions to
    /// Authenticated. On a miss, stays Anonymous with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the member lookup fails.
    pub fn login(&mut self, raw_email: &str, pwd: &str) -> Result<bool> {
        if let Some(session) = &self.session {
            let line = format!("already logged in as user: {}", session.email());
            self.print(&line);
            return Ok(true);
        }
        let Ok(email) = Email::new(raw_email) else {
            tracing::warn!("invalid login: bad username/password");
            self.print("invalid login: bad username/password");
            return Ok(false);
        };
        match self.store.authenticate(&email, pwd)? {
            Some(member) => {
                tracing::info!(email = %member.email, "logged in user");
                self.print(&format!("logged in user: {}", member.email));
                self.session = Some(Session::new(member));
                Ok(true)
            }
            None => {
                tracing::warn!("invalid login: bad username/password");
                self.print("invalid login: bad username/password");
                Ok(false)
            }
        }
    }

    /// Drop the session. Reports an error when already Anonymous.
    pub fn logout(&mut self) {
        match self.session.take() {
            Some(session) => {
                tracing::info!(email = %session.email(), "logged out user");
                let line = format!("logged out user: {}", session.email());
                self.print(&line);
            }
            None => self.print("not logged in"),
        }
    }

    /// Prompt for credentials once. `Ok(None)` means end-of-input.
    ///
    /// # Errors
    ///
    /// Returns an error if the console or the member lookup fails.
    pub fn login_prompt(&mut self) -> Result<Option<bool>> {
        let Some(email) = self.console.read_line("email: ")? else {
            return Ok(None);
        };
        let Some(pwd) = self.console.read_password("password: ")? else {
            return Ok(None);
        };
        Ok(Some(self.login(&email, &pwd)?))
    }

    /// Prompt for credentials until authentication succeeds.
    ///
    /// Retries are unbounded, but end-of-input terminates the loop
    /// cleanly (returning `false`) instead of spinning forever.
    ///
    /// # Errors
    ///
    /// Returns an error if the console or the member lookup fails.
    pub fn login_loop(&mut self) -> Result<bool> {
        loop {
            match self.login_prompt()? {
                None => return Ok(false),
                Some(true) => return Ok(true),
                Some(false) => {}
            }
        }
    }

    /// [`login_loop`](Shell::login_loop) followed by the automatic
    /// inbox rendering that greets a fresh login.
    ///
    /// # Errors
    ///
    /// Returns an error if the console or a store operation fails.
    pub fn interactive_login(&mut self) -> Result<bool> {
        let authenticated = self.login_loop()?;
        if authenticated {
            self.show_inbox()?;
        }
        Ok(authenticated)
    }

    // -- Flows shared between handlers and the startup path --

    /// Render every message addressed to the session holder, then mark
    /// them all seen in one bulk update.
    ///
    /// # Errors
    ///
    /// Returns an error if a store operation fails.
    pub fn show_inbox(&mut self) -> Result<()> {
        let Some(email) = self.session_email() else {
            return Ok(());
        };
        let messages = self.store.list_messages_for(&email)?;
        for message in &messages {
            let line = render::message_line(message);
            self.print(&line);
        }
        self.store.mark_all_seen(&email)?;
        Ok(())
    }

    /// Print rows with the 5-row pagination contract: five or fewer
    /// print outright; more than five print the first five, then the
    /// remainder only on an explicit `all`.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn render_paged(&mut self, lines: &[String]) -> Result<()> {
        for line in lines.iter().take(PAGE_SIZE) {
            self.console.print(line);
        }
        if lines.len() > PAGE_SIZE {
            let remaining = lines.len() - PAGE_SIZE;
            let prompt = format!("{remaining} more row(s); type 'all' to see them: ");
            if self.console.read_line(&prompt)?.as_deref() == Some("all") {
                for line in &lines[PAGE_SIZE..] {
                    self.console.print(line);
                }
            }
        }
        Ok(())
    }

    // -- The loop --

    /// Run the shell to completion: forced login, then one command per
    /// line until `exit` or end-of-input.
    ///
    /// Handler failures are logged and the loop continues; only console
    /// failures abort the run. The store stays open so the caller can
    /// [`close`](Shell::close) it unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn run(&mut self, registry: &Registry<C>) -> Result<()>
    where
        C: 'static,
    {
        self.console.print(INTRO);
        if !self.interactive_login()? {
            tracing::info!("end of input during login, exiting carpool shell");
            return Ok(());
        }

        self.running = true;
        while self.running {
            let prompt = self.prompt.clone();
            let Some(line) = self.console.read_line(&prompt)? else {
                break;
            };
            if let Err(e) = registry.dispatch(self, &line) {
                tracing::error!(error = %e, "command failed");
            }
        }

        if self.session.is_some() {
            self.logout();
        }
        tracing::info!("exiting carpool shell");
        Ok(())
    }
}
