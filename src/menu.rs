use std::fmt;

use crate::console::Console;
use crate::error::MenuError;

pub const ABORT_CHOICE: i64 = 0;

type ActionFn = Box<dyn Fn(&mut Console<'_>) -> Result<(), MenuError>>;

pub struct Action {
    label: String,
    run: ActionFn,
}

impl Action {
    pub fn new<F>(label: impl Into<String>, run: F) -> Self
    where
        F: Fn(&mut Console<'_>) -> Result<(), MenuError> + 'static,
    {
        Self {
            label: label.into(),
            run: Box::new(run),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn invoke(&self, console: &mut Console<'_>) -> Result<(), MenuError> {
        (self.run)(console)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("label", &self.label).finish()
    }
}

#[derive(Debug)]
pub enum Entry {
    Leaf(Action),
    Branch(Menu),
}

impl Entry {
    pub fn describe(&self) -> &str {
        match self {
            Entry::Leaf(action) => action.label(),
            Entry::Branch(menu) => menu.title(),
        }
    }

    pub fn activate(&self, console: &mut Console<'_>) -> Result<(), MenuError> {
        match self {
            Entry::Leaf(action) => action.invoke(console),
            Entry::Branch(menu) => menu.run(console),
        }
    }
}

#[derive(Debug)]
pub struct Menu {
    title: String,
    entries: Vec<Entry>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn leaf(mut self, action: Action) -> Self {
        self.entries.push(Entry::Leaf(action));
        self
    }

    pub fn branch(mut self, menu: Menu) -> Self {
        self.entries.push(Entry::Branch(menu));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Title line, then `<n>) <label>` per entry starting at 1.
    pub fn render(&self, console: &mut Console<'_>) -> Result<(), MenuError> {
        console.line(&self.title)?;
        for (i, entry) in self.entries.iter().enumerate() {
            console.line(format_args!("{}) {}", i + 1, entry.describe()))?;
        }
        Ok(())
    }

    /// Maps a 1-based choice to its entry. `ABORT_CHOICE` is not a valid entry.
    pub fn select(&self, choice: i64) -> Result<&Entry, MenuError> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.entries.get(idx))
            .ok_or(MenuError::InvalidSelection {
                choice,
                max: self.entries.len(),
            })
    }

    /// Runs until the user enters `ABORT_CHOICE`. Only `InputClosed` and I/O
    /// failures escape; everything else is reported and the menu re-rendered.
    pub fn run(&self, console: &mut Console<'_>) -> Result<(), MenuError> {
        loop {
            self.render(console)?;
            console.prompt("Enter choice (0 to abort): ")?;

            let outcome = console.read_number::<i64>().and_then(|choice| {
                if choice == ABORT_CHOICE {
                    return Ok(None);
                }
                self.select(choice).map(|entry| Some((choice, entry)))
            });

            let (choice, entry) = match outcome {
                Ok(Some(selected)) => selected,
                Ok(None) => {
                    log::debug!("leaving menu '{}'", self.title);
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    console.discard_line();
                    console.report(&e)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            console.line(format_args!("You chose '{}' ({choice})", entry.describe()))?;
            log::debug!("menu '{}' dispatching entry {choice}", self.title);

            match entry.activate(console) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => console.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }
}
