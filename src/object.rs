use crate::draw::Draw;
use std::{
    any::type_name,
    fmt::{self, Debug, Formatter},
    io::{self, Write},
    rc::Rc,
};

/// A single value of some drawable type, with the type erased.
///
/// The value is immutable once wrapped, so cloning an `Object` shares it
/// instead of copying it. Two objects compare equal when they share the same
/// value.
#[derive(Clone)]
pub struct Object {
    value: Rc<dyn Draw>,
    type_name: &'static str,
}

impl Object {
    pub fn new<T: Draw + 'static>(value: T) -> Self {
        Self {
            value: Rc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the type this object was built from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
        self.value.draw(out, position)
    }
}

impl<T: Draw + 'static> From<T> for Object {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl Eq for Object {}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.type_name).finish()
    }
}
