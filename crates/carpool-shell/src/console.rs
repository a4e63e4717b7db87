//! Console abstraction.
//!
//! Every interactive read and every rendered line goes through the
//! [`Console`] trait, so the shell can be driven by real stdin/stdout
//! in production and by a scripted console in tests. End-of-input is a
//! first-class outcome (`Ok(None)`): prompts that would otherwise loop
//! forever terminate cleanly when input runs out.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Synchronous interactive console.
pub trait Console {
    /// Print the prompt and read one line. Returns `None` on
    /// end-of-input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read or write fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Like [`read_line`](Console::read_line) but without echoing the
    /// input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_password(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Render one line of output.
    fn print(&mut self, line: &str);
}

/// Console over real stdin/stdout, with `rpassword` for credential
/// entry.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(pwd) => Ok(Some(pwd)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Deterministic console fed from a fixed script, for tests.
///
/// Reads pop from the front of the script; every printed line is
/// retained for assertions.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Build a console that will answer prompts with `inputs` in order,
    /// then report end-of-input.
    #[must_use]
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything printed so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether any printed line contains `needle`.
    #[must_use]
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn read_password(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
