/// Structures that can mark their current state and later return to it.
pub trait Undo {
    type UndoToken;
    type Error;
    fn save(&mut self) -> Self::UndoToken;
    fn rewind(&mut self, token: Self::UndoToken) -> Result<(), Self::Error>;
}
