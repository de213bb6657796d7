pub use data_structure::undo::Undo;
pub use document::Document;
pub use draw::{draw, write_line, Draw};
pub use entry::Entry;
pub use error::{Error, Result};
pub use history::{Checkpoint, History};
pub use object::Object;

mod data_structure;
pub mod document;
pub mod draw;
mod entry;
mod error;
pub mod history;
mod object;
pub mod script;
pub mod session;
