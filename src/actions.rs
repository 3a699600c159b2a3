use serde::Deserialize;

use crate::console::Console;
use crate::error::MenuError;
use crate::menu::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Operation::Add => "Add two numbers",
            Operation::Multiply => "Multiply two numbers",
            Operation::Divide => "Divide two numbers",
        }
    }

    /// Operands are `i32`; widening to `i64` keeps every result in range.
    pub fn apply(self, a: i32, b: i32) -> Result<i64, MenuError> {
        let (a, b) = (i64::from(a), i64::from(b));
        match self {
            Operation::Add => Ok(a + b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide if b == 0 => Err(MenuError::DivisionByZero),
            Operation::Divide => Ok(a / b),
        }
    }

    pub fn run(self, console: &mut Console<'_>) -> Result<(), MenuError> {
        let a: i32 = console.ask_number("Enter a: ")?;
        let b: i32 = console.ask_number("Enter b: ")?;
        let result = self.apply(a, b)?;
        console.line(format_args!("{a} {} {b} = {result}", self.symbol()))
    }

    pub fn action(self, label: Option<&str>) -> Action {
        let label = label.unwrap_or_else(|| self.default_label());
        Action::new(label, move |console| self.run(console))
    }
}
