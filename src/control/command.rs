use std::str::FromStr;

use crate::control::parameters::Field;
use crate::control::session::CalculatorSession;
use crate::errors::CalculatorError;

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(Field, f64),
    Increment(Field),
    Decrement(Field),
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <field> <value>   set a field (speed, angle, height, gravity)
  <field> +         step a field up
  <field> -         step a field down
  reset             restore default inputs
  show              print the current results
  json              print the current results as JSON
  help              show this message
  quit              exit";

impl FromStr for Command {
    type Err = CalculatorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["reset"] => Ok(Command::Reset),
            ["show"] => Ok(Command::Show),
            ["json"] => Ok(Command::Json),
            ["help"] | ["?"] => Ok(Command::Help),
            ["quit"] | ["exit"] | ["q"] => Ok(Command::Quit),
            [field, "+"] => Ok(Command::Increment(field.parse()?)),
            [field, "-"] => Ok(Command::Decrement(field.parse()?)),
            [field, value] => {
                let field: Field = field.parse()?;
                let value = value.parse::<f64>().map_err(|_| {
                    CalculatorError::InvalidInput(format!(
                        "'{}' is not a number for {}",
                        value, field
                    ))
                })?;
                if !value.is_finite() {
                    return Err(CalculatorError::InvalidInput(format!(
                        "{} must be a finite number",
                        field
                    )));
                }
                Ok(Command::Set(field, value))
            }
            [] => Err(CalculatorError::InvalidInput("empty command".to_string())),
            _ => Err(CalculatorError::InvalidInput(format!(
                "unrecognised command '{}' (type 'help')",
                line.trim()
            ))),
        }
    }
}

impl Command {
    /// Applies the command to the session. Returns `true` when the inputs
    /// changed and the results should be shown again.
    pub fn apply(self, session: &mut CalculatorSession) -> bool {
        match self {
            Command::Set(field, value) => {
                session.set(field, value);
                true
            }
            Command::Increment(field) => {
                session.increment(field);
                true
            }
            Command::Decrement(field) => {
                session.decrement(field);
                true
            }
            Command::Reset => {
                session.reset();
                true
            }
            Command::Show | Command::Json | Command::Help | Command::Quit => false,
        }
    }
}
