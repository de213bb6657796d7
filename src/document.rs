use crate::{
    data_structure::PVector,
    draw::{write_line, Draw},
    object::Object,
    Error, Result,
};
use std::io::{self, Write};

/// Extra indentation given to the elements of a nested document.
pub const INDENT_STEP: usize = 2;

/// An ordered sequence of objects of arbitrary drawable types.
///
/// Cloning is cheap: the underlying vector is persistent and the elements are
/// shared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    items: PVector<Object>,
}

impl Document {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Object> {
        self.items.get(index)
    }

    pub fn push(&mut self, value: impl Into<Object>) {
        let value = value.into();
        log::trace!("Push {} at index {}", value.type_name(), self.items.len());
        self.items.push_back(value);
    }

    /// Replaces the element at `index`, returning the one it replaced.
    pub fn set(&mut self, index: usize, value: impl Into<Object>) -> Result<Object> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(self.items.set(index, value.into()))
    }

    pub fn iter(&self) -> imbl::vector::Iter<'_, Object> {
        self.items.iter()
    }

    pub fn render(&self, position: usize) -> io::Result<String> {
        let mut out = vec![];
        self.draw(&mut out, position)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl Draw for Document {
    fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
        write_line(out, position, "<document>")?;
        for item in &self.items {
            item.draw(out, position + INDENT_STEP)?;
        }
        write_line(out, position, "</document>")
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Object;
    type IntoIter = imbl::vector::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Into<Object>> FromIterator<T> for Document {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Object>> Extend<T> for Document {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
