use std::{
    fmt::Display,
    io::{self, Write},
};

/// Something that knows how to write itself as indented lines of text.
///
/// Implement this for a type and its values can be stored in a
/// [`Document`](crate::Document) next to values of any other drawable type.
/// The document never needs to know about the new type.
pub trait Draw {
    /// Writes `self` to `out`, with every line indented by `position` spaces.
    fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()>;
}

pub fn draw<T: Draw + ?Sized>(value: &T, out: &mut dyn Write, position: usize) -> io::Result<()> {
    value.draw(out, position)
}

/// Writes `text` on a line of its own, indented by `position` spaces.
pub fn write_line(out: &mut dyn Write, position: usize, text: impl Display) -> io::Result<()> {
    writeln!(out, "{:position$}{}", "", text)
}

macro_rules! draw_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Draw for $ty {
                fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
                    write_line(out, position, self)
                }
            }
        )*
    };
}

draw_with_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Draw + ?Sized> Draw for &T {
    fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
        (**self).draw(out, position)
    }
}

impl<T: Draw + ?Sized> Draw for Box<T> {
    fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
        (**self).draw(out, position)
    }
}
