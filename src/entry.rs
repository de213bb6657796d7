use crate::draw::{write_line, Draw};
use std::io::{self, Write};

/// A type with no content of its own.
///
/// It can live in a document only because of the `Draw` impl below; nothing
/// else in the crate knows about it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Entry;

impl Draw for Entry {
    fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
        write_line(out, position, "entry_t")
    }
}
