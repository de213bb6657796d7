pub mod undo;

pub type PVector<T> = imbl::Vector<T>;
