//! Menu controller for the calculator session
//!
//! Drives the interactive loop: shows the menu, reads a selection, runs an
//! operation or shows the stored results, and repeats until the user exits.

use crate::error::{CalcError, Result};
use crate::format::format_value;
use crate::input::TokenReader;
use crate::operations::Operation;
use crate::results::{Listing, ResultStore};
use std::io::{BufRead, Write};

/// Menu code for viewing stored results
pub const VIEW_RESULTS_CODE: i32 = 6;
/// Menu code for leaving the calculator
pub const EXIT_CODE: i32 = 7;

/// A choice read from the menu prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuSelection {
    Operation(Operation),
    ViewResults,
    Exit,
    Invalid(i32),
}

impl MenuSelection {
    /// Map a menu code to a selection
    pub fn from_code(code: i32) -> Self {
        match code {
            VIEW_RESULTS_CODE => MenuSelection::ViewResults,
            EXIT_CODE => MenuSelection::Exit,
            _ => Operation::from_code(code)
                .map(MenuSelection::Operation)
                .unwrap_or(MenuSelection::Invalid(code)),
        }
    }
}

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    AwaitingSelection,
    AwaitingOperands(Operation),
    Done,
}

/// Interactive menu over an input source and an output sink
pub struct Menu<R, W> {
    input: TokenReader<R>,
    output: W,
    store: ResultStore,
    state: SessionState,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu owning `store` for the whole session
    pub fn new(input: R, output: W, store: ResultStore) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            store,
            state: SessionState::AwaitingSelection,
        }
    }

    /// Run the session until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        log::info!("Session started (capacity {})", self.store.capacity());
        while self.state != SessionState::Done {
            self.step()?;
        }
        log::info!("Session finished with {} stored results", self.store.len());
        Ok(())
    }

    /// Perform one state transition
    pub fn step(&mut self) -> Result<SessionState> {
        let next = match self.state {
            SessionState::AwaitingSelection => self.handle_selection(),
            SessionState::AwaitingOperands(operation) => self.handle_operation(operation),
            SessionState::Done => Ok(SessionState::Done),
        };

        self.state = match next {
            Ok(state) => state,
            Err(CalcError::InputClosed) => {
                log::info!("Input closed, ending session");
                SessionState::Done
            }
            Err(e) => return Err(e),
        };
        Ok(self.state)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Consume the menu, handing back its store
    pub fn into_store(self) -> ResultStore {
        self.store
    }

    fn handle_selection(&mut self) -> Result<SessionState> {
        self.print_menu()?;
        let code = self.read_selection()?;
        let selection = MenuSelection::from_code(code);
        log::debug!("Selection {} -> {:?}", code, selection);

        match selection {
            MenuSelection::Operation(operation) => Ok(SessionState::AwaitingOperands(operation)),
            MenuSelection::ViewResults => {
                self.print_results()?;
                Ok(SessionState::AwaitingSelection)
            }
            MenuSelection::Exit => {
                writeln!(self.output, "Thank you for using the scientific calculator!")?;
                Ok(SessionState::Done)
            }
            MenuSelection::Invalid(code) => {
                writeln!(self.output, "{}", CalcError::InvalidSelection(code))?;
                Ok(SessionState::AwaitingSelection)
            }
        }
    }

    fn handle_operation(&mut self, operation: Operation) -> Result<SessionState> {
        writeln!(self.output)?;
        writeln!(self.output, "=== {} ===", operation.name())?;
        let a = self.read_operand("Enter the first number: ")?;
        let b = self.read_operand("Enter the second number: ")?;

        match operation.apply(a, b) {
            Ok(value) => {
                log::debug!("{} {} {} = {}", operation.name(), a, b, value);
                writeln!(self.output, "Result: {}", format_value(value))?;
                if let Err(e) = self.store.append(value) {
                    log::warn!("Result {} not stored: {}", value, e);
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
            Err(e) => {
                log::debug!("{} {} {} failed: {}", operation.name(), a, b, e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(SessionState::AwaitingSelection)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Scientific Calculator ===")?;
        for operation in Operation::ALL {
            writeln!(self.output, "{}. {}", operation.code(), operation.name())?;
        }
        writeln!(self.output, "{}. View stored results", VIEW_RESULTS_CODE)?;
        writeln!(self.output, "{}. Exit", EXIT_CODE)?;
        Ok(())
    }

    fn print_results(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Stored Results ===")?;
        match self.store.list() {
            Listing::Empty => writeln!(self.output, "No results stored.")?,
            Listing::Entries(entries) => {
                for (index, value) in entries {
                    writeln!(self.output, "{}: {}", index, format_value(value))?;
                }
            }
        }
        Ok(())
    }

    /// Prompt until a token parses as an integer
    fn read_selection(&mut self) -> Result<i32> {
        self.prompt("Select an option: ")?;
        loop {
            match self.input.next_int() {
                Ok(code) => return Ok(code),
                Err(e @ CalcError::InvalidSelectionFormat(_)) => {
                    log::debug!("Rejected selection: {:?}", e);
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompt until a token parses as a real, repeating the prompt on bad input
    fn read_operand(&mut self, prompt: &str) -> Result<f64> {
        loop {
            self.prompt(prompt)?;
            match self.input.next_real() {
                Ok(value) => return Ok(value),
                Err(e @ CalcError::InvalidOperand(_)) => {
                    log::debug!("Rejected operand: {:?}", e);
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}
