//! Tests for the game session controller.

use strictly_rounds::{
    DRAW_SIGNAL, GameSession, INVALID_MOVE_SIGNAL, Marker, MoveError, MoveOutcome, Outcome,
    Position, SessionError, SessionPhase,
};

fn play(session: &mut GameSession, moves: &[usize]) -> MoveOutcome {
    let (last, rest) = moves.split_last().expect("at least one move");
    for &index in rest {
        assert_eq!(session.make_move(index), Ok(MoveOutcome::Continue));
    }
    session.make_move(*last).expect("valid final move")
}

#[test]
fn test_new_session_is_idle() {
    let session = GameSession::new();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(!session.is_active());
    assert!(session.current_player().is_none());
    assert_eq!(session.scores().score_a(), 0);
    assert_eq!(session.scores().score_b(), 0);
}

#[test]
fn test_start_registers_players() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();

    let [a, b] = session.players().unwrap();
    assert_eq!((a.name(), a.marker()), ("Ann", Marker::X));
    assert_eq!((b.name(), b.marker()), ("Bob", Marker::O));
    assert_eq!(session.current_player(), Some(a));
    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert!(!session.board().is_full());
}

#[test]
fn test_empty_name_rejected() {
    let mut session = GameSession::new();
    assert_eq!(session.start_game("Ann", "  "), Err(SessionError::EmptyName));
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.players().is_none());
}

#[test]
fn test_turns_alternate() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();

    session.make_move(4).unwrap();
    assert_eq!(session.current_player().unwrap().name(), "Bob");

    session.make_move(0).unwrap();
    assert_eq!(session.current_player().unwrap().name(), "Ann");
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].position, Position::TopLeft);
    assert_eq!(session.history()[1].marker, Marker::O);
}

#[test]
fn test_top_row_win() {
    let mut session = GameSession::new();
    session.start_game("PlayerX", "PlayerO").unwrap();

    let outcome = play(&mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(outcome.signal().as_deref(), Some("PlayerX wins!"));
    assert!(matches!(&outcome, MoveOutcome::Win(p) if p.marker() == Marker::X));
    assert_eq!(session.phase(), SessionPhase::Ended(Outcome::Winner(Marker::X)));
    assert!(!session.is_active());
    assert!(session.current_player().is_none());
    assert_eq!(session.scores().score(Marker::X), 1);
    assert_eq!(session.scores().score(Marker::O), 0);
}

#[test]
fn test_draw_leaves_scores_alone() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();

    // X O X / X O O / O X X
    let outcome = play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(outcome.signal().as_deref(), Some(DRAW_SIGNAL));
    assert_eq!(session.phase(), SessionPhase::Ended(Outcome::Draw));
    assert_eq!(session.scores().score_a(), 0);
    assert_eq!(session.scores().score_b(), 0);
}

#[test]
fn test_rejected_moves_are_distinct_but_share_legacy_signal() {
    let mut session = GameSession::new();

    // Before any game.
    assert_eq!(session.make_move(0), Err(MoveError::Inactive));

    session.start_game("Ann", "Bob").unwrap();
    assert_eq!(session.make_move(9), Err(MoveError::OutOfRange(9)));
    session.make_move(0).unwrap();
    assert_eq!(session.make_move(0), Err(MoveError::Occupied(Position::TopLeft)));

    for error in [
        MoveError::Inactive,
        MoveError::OutOfRange(9),
        MoveError::Occupied(Position::TopLeft),
    ] {
        assert_eq!(error.signal(), INVALID_MOVE_SIGNAL);
    }

    // Rejections leave the turn with O.
    assert_eq!(session.current_player().unwrap().marker(), Marker::O);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_moves_rejected_after_game_ends() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();
    play(&mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(session.make_move(8), Err(MoveError::Inactive));
    assert_eq!(session.scores().score_a(), 1);
}

#[test]
fn test_reset_keeps_scores() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();
    play(&mut session, &[0, 3, 1, 4, 2]);

    session.reset_game();

    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.current_player().is_none());
    assert!(session.history().is_empty());
    assert!(session.board().cells().iter().all(|c| c.marker().is_none()));
    assert_eq!(session.scores().score_a(), 1);
    assert_eq!(session.make_move(0), Err(MoveError::Inactive));
}

#[test]
fn test_scores_carry_over_for_same_pair() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();
    play(&mut session, &[0, 3, 1, 4, 2]);
    session.reset_game();

    session.start_game("Ann", "Bob").unwrap();
    assert_eq!(session.scores().score_a(), 1);
    assert_eq!(session.scores().name_a(), "Ann");

    // Bob wins the middle column this time.
    play(&mut session, &[0, 1, 2, 4, 3, 7]);
    assert_eq!(session.scores().score_a(), 1);
    assert_eq!(session.scores().score_b(), 1);
}

#[test]
fn test_swapped_sides_keep_scores() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();
    play(&mut session, &[0, 3, 1, 4, 2]);
    session.reset_game();

    session.start_game("Bob", "Ann").unwrap();
    assert_eq!(session.scores().name_a(), "Bob");
    assert_eq!(session.scores().score_a(), 0);
    assert_eq!(session.scores().name_b(), "Ann");
    assert_eq!(session.scores().score_b(), 1);

    // Bob now holds X and wins the top row.
    play(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(session.scores().score_of("Bob"), Some(1));
    assert_eq!(session.scores().score_of("Ann"), Some(1));
}

#[test]
fn test_shared_name_keeps_scores_by_side() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Ann").unwrap();
    play(&mut session, &[0, 3, 1, 4, 2]);
    session.reset_game();

    session.start_game("Ann", "Ann").unwrap();
    assert_eq!(session.scores().score_a(), 1);
    assert_eq!(session.scores().score_b(), 0);
}

#[test]
fn test_new_pair_resets_scores() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();
    play(&mut session, &[0, 3, 1, 4, 2]);
    session.reset_game();

    session.start_game("Ann", "Carl").unwrap();
    assert_eq!(session.scores().score_a(), 0);
    assert_eq!(session.scores().score_b(), 0);
    assert_eq!(session.scores().name_b(), "Carl");
}

#[test]
fn test_restart_from_ended_without_reset() {
    let mut session = GameSession::new();
    session.start_game("Ann", "Bob").unwrap();
    play(&mut session, &[0, 3, 1, 4, 2]);

    session.start_game("Ann", "Bob").unwrap();
    assert!(session.is_active());
    assert!(session.history().is_empty());
    assert_eq!(session.current_player().unwrap().name(), "Ann");
    assert_eq!(session.scores().score_a(), 1);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = GameSession::new();
    let mut second = GameSession::new();
    first.start_game("Ann", "Bob").unwrap();
    second.start_game("Cy", "Di").unwrap();

    first.make_move(4).unwrap();

    assert!(second.board().cells().iter().all(|c| c.marker().is_none()));
    assert_eq!(second.current_player().unwrap().name(), "Cy");
}
