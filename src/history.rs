use crate::{data_structure::undo::Undo, document::Document, Error, Result};
use derive_more::Display;
use itertools::Itertools;

/// A snapshot saved by [`Undo::save`] on a [`History`], identified by its
/// depth and by the id the snapshot had when it was saved.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
#[display(fmt = "Checkpoint #{}", depth)]
pub struct Checkpoint {
    depth: usize,
    id: u64,
}

/// A stack of document snapshots. The last one is the current document.
///
/// There is always at least one snapshot: undo refuses to remove the initial
/// one. Every snapshot carries an id; a document gets a fresh one whenever it
/// becomes editable again, so a checkpoint never matches a snapshot that was
/// undone and rebuilt.
#[derive(Clone, Debug, Default)]
pub struct History {
    past: Vec<(u64, Document)>,
    current: Document,
    current_id: u64,
    last_id: u64,
}

#[allow(clippy::len_without_is_empty)]
impl History {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_initial(document: Document) -> Self {
        Self {
            current: document,
            ..Default::default()
        }
    }

    pub fn current(&self) -> &Document {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Document {
        &mut self.current
    }

    /// Number of snapshots, including the current one.
    pub fn len(&self) -> usize {
        self.past.len() + 1
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Snapshots from the oldest to the current one.
    pub fn snapshots(&self) -> impl Iterator<Item = &Document> {
        self.past
            .iter()
            .map(|(_, document)| document)
            .chain(std::iter::once(&self.current))
    }

    /// Freezes the current document and continues editing a copy of it.
    pub fn commit(&mut self) {
        let id = self.fresh_id();
        let frozen = std::mem::replace(&mut self.current_id, id);
        self.past.push((frozen, self.current.clone()));
        log::debug!(
            "Committed snapshot {} = [{}]",
            self.len() - 1,
            self.current.iter().map(|item| item.type_name()).join(", ")
        );
    }

    /// Discards the current document and goes back to the previous snapshot.
    ///
    /// Fails with [`Error::NothingToUndo`] when only the initial snapshot is
    /// left, in which case nothing changes.
    pub fn undo(&mut self) -> Result<()> {
        let (_, previous) = self.past.pop().ok_or(Error::NothingToUndo)?;
        self.current = previous;
        self.current_id = self.fresh_id();
        log::debug!("Undid to snapshot {}", self.len() - 1);
        Ok(())
    }

    fn fresh_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

impl Undo for History {
    type UndoToken = Checkpoint;
    type Error = Error;

    fn save(&mut self) -> Self::UndoToken {
        let token = Checkpoint {
            depth: self.len(),
            id: self.current_id,
        };
        self.commit();
        token
    }

    fn rewind(&mut self, token: Self::UndoToken) -> Result<()> {
        let Checkpoint { depth, id } = token;
        let saved = depth
            .checked_sub(1)
            .and_then(|index| self.past.get(index))
            .map(|(saved_id, _)| *saved_id);
        if saved != Some(id) {
            return Err(Error::StaleCheckpoint(token));
        }
        self.past.truncate(depth);
        let (_, saved) = self.past.pop().ok_or(Error::StaleCheckpoint(token))?;
        self.current = saved;
        self.current_id = self.fresh_id();
        log::debug!("Rewound to {} ({} snapshot(s) left)", token, self.len());
        Ok(())
    }
}
