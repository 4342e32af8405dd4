//! Full-game scenarios driven through the public engine API.

use kuba::{Board, Direction, KubaGame, Marble, MoveError, PlayerColor, RulesConfig, WinReason};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn new_game() -> KubaGame {
    init_tracing();
    KubaGame::new(("A", PlayerColor::White), ("B", PlayerColor::Black)).unwrap()
}

fn game_from(board: &str, turn: Option<&str>) -> KubaGame {
    init_tracing();
    let board: Board = board.parse().unwrap();
    let mut builder = KubaGame::builder()
        .player("A", PlayerColor::White)
        .player("B", PlayerColor::Black)
        .board(board);
    if let Some(name) = turn {
        builder = builder.turn(name);
    }
    builder.build().unwrap()
}

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

/// Fresh game has the standard marble counts.
#[test]
fn test_starting_counts() {
    let game = new_game();
    assert_eq!(game.marble_counts(), (8, 8, 13));
    assert_eq!(game.captured_count("A").unwrap(), 0);
    assert_eq!(game.winner(), None);
}

/// Opening push from the corner slides the pair right.
#[test]
fn test_opening_push_right() {
    let mut game = new_game();
    assert!(game.make_move("A", (0, 0), Direction::Right));

    let expected = board(
        "X W W X X B B
         W W X R X B B
         X X R R R X X
         X R R R R R X
         X X R R R X X
         B B X R X W W
         B B X X X W W",
    );
    assert_eq!(game.board(), &expected);
    assert_eq!(game.marble_at((0, 0)).unwrap(), Marble::Empty);
    assert_eq!(game.current_turn(), Some("B"));
}

/// A sequence of pushes along rows and columns.
#[test]
fn test_push_sequence() {
    let mut game = new_game();

    assert!(game.make_move("A", (0, 0), Direction::Right));
    assert!(game.make_move("B", (1, 6), Direction::Left));
    assert_eq!(
        game.board(),
        &board(
            "XWWXXBB
             WWXRBBX
             XXRRRXX
             XRRRRRX
             XXRRRXX
             BBXRXWW
             BBXXXWW"
        )
    );

    assert!(game.make_move("A", (1, 0), Direction::Back));
    assert_eq!(
        game.board(),
        &board(
            "XWWXXBB
             XWXRBBX
             WXRRRXX
             XRRRRRX
             XXRRRXX
             BBXRXWW
             BBXXXWW"
        )
    );

    assert!(game.make_move("B", (1, 4), Direction::Back));
    assert_eq!(
        game.board(),
        &board(
            "XWWXXBB
             XWXRXBX
             WXRRBXX
             XRRRRRX
             XXRRRXX
             BBXRRWW
             BBXXXWW"
        )
    );
    assert_eq!(game.marble_counts(), (8, 8, 13));
}

/// Accepted moves alternate; everything malformed is rejected.
#[test]
fn test_make_move_and_rejections() {
    let mut game = new_game();

    assert!(game.make_move("A", (0, 0), Direction::Right));
    assert!(game.make_move("B", (0, 6), Direction::Back));
    assert!(game.make_move("A", (6, 6), Direction::Left));
    assert!(game.make_move("B", (6, 0), Direction::Forward));

    // Same player twice.
    assert!(!game.make_move("B", (5, 0), Direction::Right));
    // Off the board.
    assert!(!game.make_move("A", (-1, 0), Direction::Right));
    assert!(!game.make_move("A", (7, 0), Direction::Right));
    assert!(!game.make_move("A", (0, -1), Direction::Right));
    assert!(!game.make_move("A", (0, 7), Direction::Right));
    // Unknown player.
    assert!(!game.make_move("C", (1, 0), Direction::Right));
    // Unknown direction token never becomes a Direction.
    assert!("N".parse::<Direction>().is_err());

    assert_eq!(game.current_turn(), Some("A"));
}

/// Demonstration flow: push forward, then try to move out of turn.
#[test]
fn test_forward_then_out_of_turn() {
    let mut game = new_game();

    assert!(game.make_move("A", (6, 5), Direction::Forward));
    assert!(!game.make_move("A", (6, 5), Direction::Left));
    assert_eq!(game.current_turn(), Some("B"));
    assert_eq!(game.marble_at((5, 5)).unwrap(), Marble::White);
    assert_eq!(game.marble_at((4, 5)).unwrap(), Marble::White);
    assert_eq!(game.marble_at((6, 5)).unwrap(), Marble::Empty);
}

/// Either player may open; the opener then alternates with the other.
#[test]
fn test_turn_alternation() {
    let mut game = new_game();
    assert_eq!(game.current_turn(), None);

    assert!(game.make_move("B", (0, 6), Direction::Back));
    assert_eq!(game.current_turn(), Some("A"));
    assert_eq!(
        game.try_move("B", (6, 0), Direction::Forward),
        Err(MoveError::NotYourTurn("B".to_string()))
    );

    assert!(game.make_move("A", (6, 6), Direction::Left));
    assert_eq!(game.current_turn(), Some("B"));
}

/// The push that undoes the last one is refused for exactly one move.
#[test]
fn test_ko_round_trip() {
    let mut game = game_from(
        "XXXXXXX
         XWBXXXX
         XXXXXXX
         XXXRXXX
         XXXXXXX
         XXXXXXX
         BXXXXXW",
        None,
    );

    assert!(game.make_move("A", (1, 1), Direction::Right));
    assert_eq!(game.marble_at((1, 3)).unwrap(), Marble::Black);

    assert!(matches!(
        game.validate_move("B", (1, 3), Direction::Left),
        Err(MoveError::Forbidden { .. })
    ));
    assert!(!game.is_valid_move("B", (1, 3), Direction::Left));

    assert!(game.make_move("B", (6, 0), Direction::Right));
    let at = kuba::Coordinates::new(1, 3).unwrap();
    assert!(game.can_be_pushed(at, Direction::Left));

    assert!(game.make_move("A", (6, 6), Direction::Left));
    assert!(game.is_valid_move("B", (1, 3), Direction::Left));

    assert!(game.make_move("B", (1, 3), Direction::Left));
    assert_eq!(
        game.board(),
        &board(
            "XXXXXXX
             XWBXXXX
             XXXXXXX
             XXXRXXX
             XXXXXXX
             XXXXXXX
             XBXXXWX"
        )
    );
}

/// A capture clears the forbidden move.
#[test]
fn test_capture_clears_ko() {
    let mut game = game_from(
        "WRRRRRR
         XXXXXXX
         XXXXXXX
         XXXXXXX
         XXXXXXX
         XXXXXXX
         BXXXXXX",
        None,
    );

    assert!(game.make_move("B", (6, 0), Direction::Right));
    assert!(game.forbidden_move().is_some());

    let report = game.try_move("A", (0, 0), Direction::Right).unwrap();
    assert!(report.scored());
    assert_eq!(game.forbidden_move(), None);
    assert_eq!(game.captured_count("A").unwrap(), 1);
    assert_eq!(game.captured_count("B").unwrap(), 0);
}

/// Seven neutral captures win and freeze the game.
#[test]
fn test_seven_captures_wins() {
    let mut game = game_from(
        "WRRRRRR
         WRRRRRR
         XXXXXXX
         XXXXXXX
         XXXXXXX
         XXXXXXX
         BXXXXXX",
        None,
    );

    for col in 0..6 {
        assert!(game.make_move("A", (0, col), Direction::Right), "A push at column {col}");
        assert_eq!(game.captured_count("A").unwrap(), col as u8 + 1);
        assert!(!game.is_game_over());

        let (from, direction) = if col % 2 == 0 {
            ((6, 0), Direction::Right)
        } else {
            ((6, 1), Direction::Left)
        };
        assert!(game.make_move("B", from, direction), "B shuffle after column {col}");
    }

    let report = game.try_move("A", (1, 0), Direction::Right).unwrap();
    assert_eq!(game.captured_count("A").unwrap(), 7);
    assert_eq!(game.winner(), Some("A"));
    assert!(game.is_game_over());
    assert_eq!(report.victory.map(|v| v.reason), Some(WinReason::Captures));

    assert!(!game.make_move("B", (6, 1), Direction::Left));
    assert_eq!(
        game.validate_move("B", (6, 1), Direction::Left),
        Err(MoveError::GameOver)
    );
    assert_eq!(game.winner(), Some("A"));
}

/// Pushing off the opponent's last marble wins without scoring.
#[test]
fn test_elimination_wins() {
    let mut game = game_from(
        "XXXXXWB
         XXXXXXX
         XXXXXXX
         XXXRXXX
         XXXXXXX
         XXXXXXX
         XXXXXXX",
        None,
    );

    let report = game.try_move("A", (0, 5), Direction::Right).unwrap();
    assert_eq!(report.captured, Some(Marble::Black));
    assert!(!report.scored());
    assert_eq!(game.captured_count("A").unwrap(), 0);
    assert_eq!(game.winner(), Some("A"));
    assert_eq!(game.victory().unwrap().reason, WinReason::Elimination);
}

/// A player with every marble boxed in loses when due to move.
#[test]
fn test_boxed_in_player_loses() {
    let boxed = "BRRRRRB
                 RXXXXXR
                 RXXXXXR
                 RXXWXXR
                 RXXXXXR
                 RXXXXXR
                 BRRRRRB";

    let mut game = game_from(boxed, Some("B"));
    assert_eq!(game.winner(), None);
    game.check_for_winner();
    assert_eq!(game.winner(), Some("A"));
    assert_eq!(game.victory().unwrap().reason, WinReason::NoMoves);

    // Same position reached by a move.
    let mut game = game_from(boxed, Some("A"));
    assert!(game.make_move("A", (3, 3), Direction::Left));
    assert_eq!(game.winner(), Some("A"));

    // Nobody is due to move yet, so nobody is stuck.
    let mut game = game_from(boxed, None);
    assert_eq!(game.check_for_winner(), None);
}

/// Own marble on the far edge of a full line blocks the push.
#[test]
fn test_no_self_elimination() {
    let mut game = game_from(
        "WRRRRRW
         XXXXXXX
         XXXXXXX
         XXXXXXX
         XXXXXXX
         XXXXXXX
         XXXXXXB",
        None,
    );
    assert!(matches!(
        game.try_move("A", (0, 0), Direction::Right),
        Err(MoveError::SelfElimination { .. })
    ));
    assert!(matches!(
        game.try_move("A", (0, 6), Direction::Left),
        Err(MoveError::SelfElimination { .. })
    ));
    assert_eq!(game.marble_counts(), (2, 1, 5));
}

/// Every listed push replays through the name-and-tuple API.
#[test]
fn test_legal_moves_replay() {
    let mut game = new_game();
    assert!(game.make_move("A", (0, 0), Direction::Right));

    let moves = game.legal_moves("B").unwrap();
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(game.is_valid_move("B", mv.at.into(), mv.direction), "{mv}");
    }

    let mv = moves[0];
    let report = game.try_move("B", mv.at.into(), mv.direction).unwrap();
    assert_eq!(report.mv, mv);
    assert_eq!(game.marble_at(mv.at.into()).unwrap(), Marble::Empty);
}

/// Lower capture target from config.
#[test]
fn test_custom_capture_target() {
    init_tracing();
    let mut game = KubaGame::builder()
        .player("A", PlayerColor::White)
        .player("B", PlayerColor::Black)
        .board(board(
            "WRRRRRR
             XXXXXXX
             XXXXXXX
             XXXXXXX
             XXXXXXX
             XXXXXXX
             BXXXXXX",
        ))
        .config(RulesConfig::default().with_capture_target(1))
        .build()
        .unwrap();

    assert!(game.make_move("A", (0, 0), Direction::Right));
    assert_eq!(game.winner(), Some("A"));
}
