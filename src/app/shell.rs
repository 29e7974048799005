use crate::core::codec;
use crate::core::fees;
use crate::core::registry::Registry;
use crate::domain::ports::BoatStore;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\nMenu:\n\
I - Inventory\n\
A - Add Boat\n\
R - Remove Boat\n\
P - Payment\n\
M - Apply Monthly Charges\n\
X - Exit\n\
Enter choice: ";

/// How an interactive session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Saved,
    SaveFailed,
    /// Input closed before `X`; nothing was written.
    EndOfInput,
}

/// Menu-driven command loop over a registry and the store it came from.
pub struct Shell<S: BoatStore> {
    registry: Registry,
    store: S,
}

impl<S: BoatStore> Shell<S> {
    pub fn new(registry: Registry, store: S) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Runs commands until `X` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<SessionEnd> {
        loop {
            write!(output, "{}", MENU)?;
            output.flush()?;

            let Some(choice) = read_line(&mut input)? else {
                tracing::warn!("Input closed without exit command; changes not saved");
                return Ok(SessionEnd::EndOfInput);
            };
            let op = choice.chars().next().map(|c| c.to_ascii_lowercase());
            tracing::debug!("Command {:?}", op);

            match op {
                Some('i') => self.print_inventory(&mut output)?,
                Some('a') => {
                    write!(output, "Enter boat data (CSV format): ")?;
                    output.flush()?;
                    let Some(line) = read_line(&mut input)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    self.add_boat(&line, &mut output)?;
                }
                Some('r') => {
                    write!(output, "Enter boat name to remove: ")?;
                    output.flush()?;
                    let Some(name) = read_line(&mut input)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    self.remove_boat(&name, &mut output)?;
                }
                Some('p') => {
                    if !self.take_payment(&mut input, &mut output)? {
                        return Ok(SessionEnd::EndOfInput);
                    }
                }
                Some('m') => {
                    fees::apply_monthly_fees(&mut self.registry);
                    writeln!(output, "Monthly fees applied.")?;
                }
                Some('x') => return self.save_and_exit(&mut output),
                _ => writeln!(output, "Invalid option.")?,
            }
        }
    }

    fn print_inventory<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "\n--- Boat Inventory ---")?;
        for boat in &self.registry {
            writeln!(output, "{}", boat)?;
        }
        Ok(())
    }

    fn add_boat<W: Write>(&mut self, line: &str, output: &mut W) -> Result<()> {
        let boat = codec::decode_line(line);
        match self.registry.insert(boat) {
            Ok(()) => writeln!(output, "Boat added.")?,
            Err(e) => {
                tracing::warn!("Add rejected: {}", e);
                writeln!(output, "{}", e.user_friendly_message())?;
            }
        }
        Ok(())
    }

    fn remove_boat<W: Write>(&mut self, name: &str, output: &mut W) -> Result<()> {
        match self.registry.remove(name) {
            Ok(_) => writeln!(output, "Boat removed.")?,
            Err(e) => writeln!(output, "{}", e.user_friendly_message())?,
        }
        Ok(())
    }

    /// Returns false when input closed mid-command.
    fn take_payment<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<bool> {
        write!(output, "Enter boat name: ")?;
        output.flush()?;
        let Some(name) = read_line(input)? else {
            return Ok(false);
        };
        if self.registry.find(&name).is_none() {
            writeln!(output, "No boat with that name.")?;
            return Ok(true);
        }

        write!(output, "Enter payment amount: ")?;
        output.flush()?;
        let Some(raw_amount) = read_line(input)? else {
            return Ok(false);
        };
        let Some(amount) = codec::parse_amount(&raw_amount) else {
            writeln!(output, "Invalid amount.")?;
            return Ok(true);
        };

        match fees::accept_payment(&mut self.registry, &name, amount) {
            Ok(remaining) => writeln!(
                output,
                "Payment accepted. Remaining balance: ${:.2}",
                remaining
            )?,
            Err(e) => writeln!(output, "{}", e.user_friendly_message())?,
        }
        Ok(true)
    }

    fn save_and_exit<W: Write>(&self, output: &mut W) -> Result<SessionEnd> {
        match self.store.save(&self.registry) {
            Ok(()) => {
                writeln!(output, "Data saved.")?;
                Ok(SessionEnd::Saved)
            }
            Err(e) => {
                tracing::error!("{}", e);
                tracing::error!("Suggestion: {}", e.recovery_suggestion());
                writeln!(output, "{}", e.user_friendly_message())?;
                Ok(SessionEnd::SaveFailed)
            }
        }
    }
}

/// One line without its terminator, or None at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
