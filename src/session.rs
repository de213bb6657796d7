use crate::{
    data_structure::undo::Undo,
    draw::Draw,
    entry::Entry,
    history::{Checkpoint, History},
    object::Object,
    script::{parse_script, Command, Line, Literal, ScriptError},
    Error, Result,
};
use std::{collections::HashMap, io::Write};

#[derive(Clone, Debug)]
pub struct Options {
    /// Position the current document is drawn at.
    pub indent: usize,
    /// Number of dashes written after each drawn document, 0 for none.
    pub rule_width: usize,
    /// Log failing commands instead of stopping at the first one.
    pub keep_going: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: 0,
            rule_width: 50,
            keep_going: false,
        }
    }
}

/// Runs script commands against a [`History`], drawing into `out`.
pub struct Session<W> {
    history: History,
    checkpoints: HashMap<String, Checkpoint>,
    out: W,
    options: Options,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, options: Options) -> Self {
        Self {
            history: History::new(),
            checkpoints: HashMap::new(),
            out,
            options,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Parses `script` and executes it line by line.
    pub fn run(&mut self, script: &str) -> Result<(), ScriptError> {
        let lines = parse_script(script)?;
        log::info!("Running {} command(s)", lines.len());
        for Line { number, command } in &lines {
            log::debug!("Line {}: {:?}", number, command);
            if let Err(error) = self.execute(command) {
                if !self.options.keep_going {
                    return Err(ScriptError::Execute {
                        line: *number,
                        error,
                    });
                }
                log::warn!("Line {}: {}", number, error);
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Push(literal) => {
                let value = self.object(literal);
                self.history.current_mut().push(value);
            }
            Command::Set(index, literal) => {
                let value = self.object(literal);
                self.history.current_mut().set(*index, value)?;
            }
            Command::Commit => self.history.commit(),
            Command::Undo => self.history.undo()?,
            Command::Save(name) => {
                let token = self.history.save();
                self.checkpoints.insert(name.clone(), token);
            }
            Command::Rewind(name) => {
                let token = *self
                    .checkpoints
                    .get(name)
                    .ok_or_else(|| Error::UnknownCheckpoint(name.clone()))?;
                self.history.rewind(token)?;
            }
            Command::Draw => self.draw()?,
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        self.history
            .current()
            .draw(&mut self.out, self.options.indent)?;
        if self.options.rule_width > 0 {
            writeln!(self.out, "{}", "-".repeat(self.options.rule_width))?;
        }
        Ok(())
    }

    fn object(&self, literal: &Literal) -> Object {
        match literal {
            Literal::Integer(n) => Object::new(*n),
            Literal::Real(x) => Object::new(*x),
            Literal::Bool(b) => Object::new(*b),
            Literal::Text(s) => Object::new(s.clone()),
            Literal::Current => Object::new(self.history.current().clone()),
            Literal::Entry => Object::new(Entry),
        }
    }
}
