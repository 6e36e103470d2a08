//! Tests for the play session controller.

use tally_games::{
    Cell, DEFAULT_TALLY_KEY, GameStatus, KeyValueStore, Mark, MemoryStore, MoveError, Phase,
    Selection, Session, StoreError, Tally, TallyBook,
};

/// Store that can be read but never written.
struct ReadOnlyStore {
    stored: Option<String>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.stored.clone())
    }

    fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::new("disk full"))
    }
}

fn session_with(stored: Option<&str>) -> Session<MemoryStore> {
    let mut store = MemoryStore::new();
    if let Some(value) = stored {
        store.set(DEFAULT_TALLY_KEY, value.to_string()).unwrap();
    }
    Session::new(TallyBook::open(store, DEFAULT_TALLY_KEY).unwrap())
}

fn play_all(session: &mut Session<MemoryStore>, indices: &[usize]) -> Selection {
    let mut last = Selection::Ignored;
    for &index in indices {
        last = session.select(index);
    }
    last
}

#[test]
fn test_cover_ignores_selections() {
    let mut session = session_with(None);
    assert_eq!(session.phase(), Phase::Cover);
    assert_eq!(session.select(4), Selection::Ignored);
    assert_eq!(session.game().cell(4), Ok(Cell::Empty));
}

#[test]
fn test_x_win_increments_only_x() {
    let mut session = session_with(Some("4,2"));
    session.start_game();

    let result = play_all(&mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(result, Selection::Finished(GameStatus::Won(Mark::X)));
    assert_eq!(session.phase(), Phase::Cover);
    assert_eq!(session.status(), "X has won!");
    assert_eq!(session.tally(), Tally::new(5, 2));
    assert_eq!(
        session.book().store().get(DEFAULT_TALLY_KEY).unwrap(),
        Some("5,2".to_string())
    );
}

#[test]
fn test_o_win_increments_only_o() {
    let mut session = session_with(None);
    session.start_game();

    play_all(&mut session, &[0, 4, 1, 2, 8, 6]);

    assert_eq!(session.status(), "O has won!");
    assert_eq!(session.tally(), Tally::new(0, 1));
}

#[test]
fn test_draw_leaves_tally_untouched() {
    let mut session = session_with(Some("1,1"));
    session.start_game();

    let result = play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(result, Selection::Finished(GameStatus::Draw));
    assert_eq!(session.status(), "Draw!");
    assert_eq!(session.tally(), Tally::new(1, 1));
    assert_eq!(
        session.book().store().get(DEFAULT_TALLY_KEY).unwrap(),
        Some("1,1".to_string())
    );
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut session = session_with(None);
    session.start_game();
    assert_eq!(session.select(0), Selection::Continued);
    let status = session.status().to_string();

    assert_eq!(
        session.select(0),
        Selection::Rejected(MoveError::CellOccupied(0))
    );
    assert_eq!(
        session.select(9),
        Selection::Rejected(MoveError::OutOfRange(9))
    );

    assert_eq!(session.status(), status);
    assert_eq!(session.game().current_turn(), Mark::O);
    assert_eq!(session.game().cell(0), Ok(Cell::Occupied(Mark::X)));
}

#[test]
fn test_finished_game_stops_accepting_input() {
    let mut session = session_with(None);
    session.start_game();
    play_all(&mut session, &[0, 3, 1, 4, 2]);
    let board = session.game().board().clone();

    assert_eq!(session.select(8), Selection::Ignored);
    assert_eq!(session.game().board(), &board);
    assert_eq!(session.tally(), Tally::new(1, 0));
}

#[test]
fn test_new_game_starts_fresh_and_keeps_tally() {
    let mut session = session_with(None);
    session.start_game();
    play_all(&mut session, &[0, 3, 1, 4, 2]);

    session.start_game();

    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.game().move_count(), 0);
    assert_eq!(session.game().current_turn(), Mark::X);
    assert_eq!(session.status(), "Current turn: X");
    assert_eq!(session.tally(), Tally::new(1, 0));
}

#[test]
fn test_failed_tally_write_is_reported_and_play_continues() {
    let store = ReadOnlyStore {
        stored: Some("1,0".to_string()),
    };
    let mut session = Session::new(TallyBook::open(store, DEFAULT_TALLY_KEY).unwrap());
    session.start_game();

    for index in [0, 3, 1, 4, 2] {
        session.select(index);
    }

    assert_eq!(session.phase(), Phase::Cover);
    assert_eq!(session.status(), "X has won! (tally not saved)");
    assert_eq!(session.tally(), Tally::new(2, 0));

    session.start_game();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.status(), "Current turn: X");
    assert_eq!(session.tally(), Tally::new(2, 0));
}

#[test]
fn test_accepted_moves_are_never_reported_as_rejected() {
    let mut session = session_with(None);
    session.start_game();

    let moves = [0, 1, 2, 4, 3, 5, 7, 6];
    for index in moves {
        assert_eq!(session.select(index), Selection::Continued);
        assert!(session.game().cell(index).unwrap().mark().is_some());
    }
    assert_eq!(session.select(8), Selection::Finished(GameStatus::Draw));
    assert_eq!(usize::from(session.game().move_count()), moves.len() + 1);
}
