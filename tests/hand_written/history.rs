use crate::test;
use drawable::{Document, Error, History, Undo};

test!(
    commit_then_undo_restores,
    r#"
    push 1
    commit
    push 2
    set 0 "one"
    undo
    draw
    "#,
    r#"
    <document>
      1
    </document>
    "#
);

test!(
    rewind_across_commits,
    r#"
    push "base"
    save start
    push 1
    commit
    push 2
    commit
    push 3
    draw
    rewind start
    draw
    "#,
    r#"
    <document>
      base
      1
      2
      3
    </document>
    <document>
      base
    </document>
    "#
);

test!(
    undo_after_rewind,
    r#"
    push 1
    commit
    push 2
    save second
    push 3
    rewind second
    undo
    draw
    "#,
    r#"
    <document>
      1
    </document>
    "#
);

#[test]
fn commit_undo_is_identity() {
    let mut h = History::with_initial(["x", "y"].into_iter().collect());
    h.current_mut().push(3);
    let before = h.current().clone();
    h.commit();
    h.current_mut().push(Document::new());
    h.current_mut().set(0, 'x').unwrap();
    h.undo().unwrap();
    assert_eq!(h.current(), &before);
}

#[test]
fn undo_never_empties() {
    let mut h = History::new();
    for _ in 0..3 {
        h.commit();
    }
    for _ in 0..3 {
        h.undo().unwrap();
    }
    assert!(matches!(h.undo(), Err(Error::NothingToUndo)));
    assert_eq!(h.len(), 1);
}

#[test]
fn stale_checkpoint_leaves_history_alone() {
    let mut h = History::new();
    let token = h.save();
    h.undo().unwrap();
    h.current_mut().push(1);
    assert!(matches!(h.rewind(token), Err(Error::StaleCheckpoint(_))));
    assert_eq!(h.current().len(), 1);
}

#[test]
fn checkpoint_does_not_match_rebuilt_history() {
    let mut h = History::new();
    h.current_mut().push(1);
    h.commit();
    let token = h.save();
    h.undo().unwrap();
    h.undo().unwrap();
    h.current_mut().push(9);
    h.commit();
    h.commit();
    let before = h.current().clone();
    assert!(matches!(h.rewind(token), Err(Error::StaleCheckpoint(_))));
    assert_eq!(h.len(), 3);
    assert_eq!(h.current(), &before);
}
