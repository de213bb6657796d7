use std::io::{self, Write};

use drawable::{write_line, Document, Draw, History, Object};

/// Defined here, outside the crate, to show that a document accepts new types
/// without any change to it.
struct Point {
    x: i32,
    y: i32,
}

impl Draw for Point {
    fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
        write_line(out, position, format_args!("({}, {})", self.x, self.y))
    }
}

/// Draws over several lines.
struct Boxed(&'static str);

impl Draw for Boxed {
    fn draw(&self, out: &mut dyn Write, position: usize) -> io::Result<()> {
        let border = "-".repeat(self.0.len() + 2);
        write_line(out, position, format_args!("+{border}+"))?;
        write_line(out, position, format_args!("| {} |", self.0))?;
        write_line(out, position, format_args!("+{border}+"))
    }
}

#[test]
fn foreign_types() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::new();
    doc.push(Point { x: 1, y: -2 });
    doc.push(Boxed("hi"));
    doc.push(7);
    assert_eq!(doc.get(0).map(Object::type_name), Some(std::any::type_name::<Point>()));
    assert_eq!(
        doc.render(0)?,
        "<document>\n  (1, -2)\n  +----+\n  | hi |\n  +----+\n  7\n</document>\n"
    );
    Ok(())
}

#[test]
fn foreign_types_survive_undo() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = History::new();
    h.current_mut().push(Point { x: 0, y: 0 });
    h.commit();
    h.current_mut().set(0, Point { x: 5, y: 5 })?;
    assert_eq!(h.current().render(2)?, "  <document>\n    (5, 5)\n  </document>\n");
    h.undo()?;
    assert_eq!(h.current().render(2)?, "  <document>\n    (0, 0)\n  </document>\n");
    Ok(())
}
