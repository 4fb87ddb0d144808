//! Game integration tests.

use cardtac::{
    CardId, CardView, Cell, Color, ConfigError, DEFAULT_DECK_SIZE, Deck, DeckComposition,
    DeckUnderflowError, DrawCondition, Game, GameOptions, InvalidMoveError, Move, MoveKind,
    MoveOutcome, Outcome, RankCount, SessionError, SetupError, Symbol, Transition, TurnPhase,
    is_victory,
};

const X: Cell = Cell::Occupied(Symbol('X'));

fn click(game: &mut Game, player: u8, cell: usize) -> MoveOutcome {
    game.submit(&Move::click_cell(player, cell)).unwrap()
}

fn play(game: &mut Game, cells: &[usize]) {
    for &cell in cells {
        let player = game.current_player();
        assert!(click(game, player, cell).is_accepted(), "cell {cell} rejected");
    }
}

fn small_options(cards: u8, hand_size: usize) -> GameOptions {
    GameOptions::default()
        .with_composition(DeckComposition::new(
            vec![Color::Red],
            vec![RankCount::new(1, cards)],
        ))
        .with_hand_size(hand_size)
}

fn all_card_ids(game: &Game) -> Vec<CardId> {
    let state = game.state();
    let mut ids: Vec<CardId> = state.deck().cards().iter().map(|c| c.id).collect();
    for hand in state.hands() {
        ids.extend(hand.cards().iter().map(|c| c.id));
    }
    ids.sort();
    ids
}

#[test]
fn setup_deals_hands_from_shuffled_deck() {
    let game = Game::new(GameOptions::default(), 3).unwrap();
    let state = game.state();

    assert_eq!(state.deck().len(), DEFAULT_DECK_SIZE - 10);
    assert_eq!(state.hands().len(), 2);
    assert!(state.hands().iter().all(|h| h.len() == 5));
    assert_eq!(state.card_count(), DEFAULT_DECK_SIZE);
    assert_eq!(state.turn().current_player, 0);
    assert_eq!(state.phase(), TurnPhase::AwaitingMove);

    let ids = all_card_ids(&game);
    let mut unique = ids.clone();
    unique.dedup();
    assert_eq!(ids, unique);
}

#[test]
fn same_seed_same_game() {
    let a = Game::new(GameOptions::default(), 11).unwrap();
    let b = Game::new(GameOptions::default(), 11).unwrap();
    let c = Game::new(GameOptions::default(), 12).unwrap();

    assert_eq!(a.state(), b.state());
    assert_ne!(a.state().deck(), c.state().deck());
}

#[test]
fn with_deck_deals_in_order() {
    let deck = Deck::from_composition(&DeckComposition::default()).unwrap();
    let game = Game::with_deck(GameOptions::default(), deck.clone()).unwrap();

    assert_eq!(game.state().hand(0).unwrap().cards(), &deck.cards()[..5]);
    assert_eq!(game.state().hand(1).unwrap().cards(), &deck.cards()[5..10]);
    assert_eq!(game.state().deck().cards(), &deck.cards()[10..]);
}

#[test]
fn setup_errors() {
    assert_eq!(
        Game::new(GameOptions::default().with_turn_bounds(2, 1), 1).unwrap_err(),
        SetupError::Config(ConfigError::InvalidTurnBounds { min: 2, max: 1 })
    );
    assert_eq!(
        Game::new(
            GameOptions::default().with_composition(DeckComposition::new(Vec::new(), Vec::new())),
            1
        )
        .unwrap_err(),
        SetupError::Config(ConfigError::EmptyPalette)
    );
    assert_eq!(
        Game::new(small_options(3, 2), 1).unwrap_err(),
        SetupError::Deal(DeckUnderflowError {
            requested: 2,
            available: 1
        })
    );
}

#[test]
fn single_move_turns_alternate() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();

    assert_eq!(
        click(&mut game, 0, 4),
        MoveOutcome::Accepted(Transition::TurnComplete { next_player: 1 })
    );
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.state().turn().moves_taken, 0);
    assert_eq!(game.state().turn().number, 1);
    assert_eq!(game.state().board().get(4), Some(X));

    assert_eq!(
        click(&mut game, 1, 0),
        MoveOutcome::Accepted(Transition::TurnComplete { next_player: 0 })
    );
    assert_eq!(
        game.state().board().get(0),
        Some(Cell::Occupied(Symbol('O')))
    );
}

#[test]
fn multi_move_turns_wait_for_minimum() {
    let options = GameOptions::default().with_turn_bounds(2, 3);
    let mut game = Game::new(options, 1).unwrap();

    assert_eq!(
        click(&mut game, 0, 0),
        MoveOutcome::Accepted(Transition::Continue)
    );
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.state().turn().moves_taken, 1);

    assert_eq!(
        click(&mut game, 0, 1),
        MoveOutcome::Accepted(Transition::TurnComplete { next_player: 1 })
    );
}

#[test]
fn move_costs_respect_turn_maximum() {
    let options = GameOptions::default()
        .with_turn_bounds(2, 2)
        .with_draw_cost(2);
    let mut game = Game::new(options, 1).unwrap();

    click(&mut game, 0, 0);
    let before = game.snapshot();
    assert_eq!(
        game.submit(&Move::draw(0)).unwrap(),
        MoveOutcome::Rejected(InvalidMoveError::TurnBudgetExceeded)
    );
    assert_eq!(game.snapshot(), before);

    click(&mut game, 0, 1);
    assert_eq!(
        game.submit(&Move::draw(1)).unwrap(),
        MoveOutcome::Accepted(Transition::TurnComplete { next_player: 0 })
    );
}

#[test]
fn rotation_covers_every_seat() {
    let options = GameOptions::default()
        .with_symbols(['A', 'B', 'C'])
        .with_hand_size(2);
    let mut game = Game::new(options, 5).unwrap();

    assert_eq!(game.state().hands().len(), 3);
    for (expected, cell) in [(1, 0), (2, 1), (0, 2)] {
        let player = game.current_player();
        assert_eq!(
            click(&mut game, player, cell).transition(),
            Some(Transition::TurnComplete {
                next_player: expected
            })
        );
    }
    assert_eq!(
        game.state().board().get(2),
        Some(Cell::Occupied(Symbol('C')))
    );
}

#[test]
fn rejections_leave_state_untouched() {
    let mut game = Game::new(GameOptions::default(), 2).unwrap();
    click(&mut game, 0, 4);
    let before = game.snapshot();
    let history = game.state().history().len();

    let cases = [
        (Move::click_cell(1, 4), InvalidMoveError::CellOccupied),
        (
            Move::new(MoveKind::ClickCell, vec![9], 1),
            InvalidMoveError::CellOutOfBounds,
        ),
        (
            Move::new(MoveKind::ClickCell, vec![-3], 1),
            InvalidMoveError::CellOutOfBounds,
        ),
        (
            Move::new(MoveKind::ClickCell, vec![], 1),
            InvalidMoveError::BadArguments,
        ),
        (Move::click_cell(0, 0), InvalidMoveError::NotActivePlayer),
        (Move::click_cell(7, 0), InvalidMoveError::UnknownPlayer),
        (Move::draw(0), InvalidMoveError::NotActivePlayer),
        (
            Move::new(MoveKind::Draw, vec![2], 1),
            InvalidMoveError::BadArguments,
        ),
    ];

    for (mv, expected) in cases {
        assert_eq!(game.submit(&mv).unwrap(), MoveOutcome::Rejected(expected));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.state().history().len(), history);
    }
}

#[test]
fn occupied_check_precedes_authorization() {
    let mut game = Game::new(GameOptions::default(), 2).unwrap();
    click(&mut game, 0, 4);

    // Player 0 is not active, but the occupied cell is reported first.
    assert_eq!(
        click(&mut game, 0, 4),
        MoveOutcome::Rejected(InvalidMoveError::CellOccupied)
    );
}

#[test]
fn disconnected_player_cannot_move() {
    let mut game = Game::new(GameOptions::default(), 2).unwrap();
    assert!(game.set_connected(0, false));
    assert!(!game.set_connected(9, false));
    assert!(!game.is_active(0));

    assert_eq!(
        click(&mut game, 0, 4),
        MoveOutcome::Rejected(InvalidMoveError::NotActivePlayer)
    );

    game.set_connected(0, true);
    assert!(click(&mut game, 0, 4).is_accepted());
}

#[test]
fn unknown_kind_is_rejected() {
    let mut game = Game::new(GameOptions::default(), 2).unwrap();
    assert_eq!(
        game.submit_parts("discard", vec![0], 0).unwrap(),
        MoveOutcome::Rejected(InvalidMoveError::UnknownKind)
    );
    assert!(
        game.submit_parts("clickCell", vec![2], 0)
            .unwrap()
            .is_accepted()
    );
}

#[test]
fn diagonal_wins_and_ends_game() {
    let mut game = Game::new(GameOptions::default(), 8).unwrap();
    play(&mut game, &[0, 1, 4, 2]);

    assert_eq!(
        click(&mut game, 0, 8),
        MoveOutcome::Accepted(Transition::GameOver(Outcome::Winner(0)))
    );
    assert!(is_victory(game.state().board().cells()));
    assert_eq!(game.state().phase(), TurnPhase::GameOver);
    assert_eq!(game.state().outcome(), Some(Outcome::Winner(0)));

    let snapshot = game.snapshot();
    assert!(snapshot.terminal.is_over);
    assert_eq!(snapshot.terminal.outcome.and_then(Outcome::winner), Some(0));
}

#[test]
fn moves_after_game_over_are_rejected() {
    let mut game = Game::new(GameOptions::default(), 8).unwrap();
    play(&mut game, &[0, 1, 4, 2, 8]);
    let before = game.snapshot();

    // Would otherwise be a legal move for the player to move.
    let player = game.current_player();
    assert_eq!(
        click(&mut game, player, 5),
        MoveOutcome::Rejected(InvalidMoveError::GameOver)
    );
    assert_eq!(
        click(&mut game, player, 0),
        MoveOutcome::Rejected(InvalidMoveError::GameOver)
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut game = Game::new(GameOptions::default(), 4).unwrap();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6]);
    assert!(!game.state().is_over());

    assert_eq!(
        click(&mut game, 0, 8),
        MoveOutcome::Accepted(Transition::GameOver(Outcome::Draw))
    );
    assert!(game.enumerate().is_empty());
}

#[test]
fn draw_moves_top_card_into_hand() {
    let mut game = Game::new(GameOptions::default(), 6).unwrap();
    let top = game.state().deck().cards()[0];

    assert_eq!(
        game.submit(&Move::draw(0)).unwrap(),
        MoveOutcome::Accepted(Transition::TurnComplete { next_player: 1 })
    );
    let hand = game.state().hand(0).unwrap();
    assert_eq!(hand.len(), 6);
    assert_eq!(hand.cards().last(), Some(&top));
    assert!(!game.state().deck().cards().contains(&top));
    assert_eq!(game.state().card_count(), DEFAULT_DECK_SIZE);
}

#[test]
fn draw_can_be_disabled() {
    let mut game = Game::new(GameOptions::default().with_allow_draw(false), 6).unwrap();
    assert_eq!(
        game.submit(&Move::draw(0)).unwrap(),
        MoveOutcome::Rejected(InvalidMoveError::MoveNotAllowed)
    );
}

#[test]
fn empty_deck_draw_condition() {
    let options = small_options(5, 2).with_draw_condition(DrawCondition::BoardFullOrDeckEmpty);
    let mut game = Game::new(options, 1).unwrap();
    assert_eq!(game.state().deck().len(), 1);

    assert_eq!(
        game.submit(&Move::draw(0)).unwrap(),
        MoveOutcome::Accepted(Transition::GameOver(Outcome::Draw))
    );
}

#[test]
fn deck_underflow_halts_session() {
    let mut game = Game::new(small_options(4, 2), 1).unwrap();
    assert!(game.state().deck().is_empty());

    assert_eq!(
        game.submit(&Move::draw(0)).unwrap_err(),
        SessionError::DeckUnderflow(DeckUnderflowError {
            requested: 1,
            available: 0
        })
    );
    assert_eq!(
        game.halted(),
        Some(DeckUnderflowError {
            requested: 1,
            available: 0
        })
    );
    assert_eq!(game.state().hand(0).unwrap().len(), 2);

    assert_eq!(
        game.submit(&Move::click_cell(0, 0)).unwrap_err(),
        SessionError::Halted
    );
    assert_eq!(
        game.submit_parts("clickCell", vec![0], 0).unwrap_err(),
        SessionError::Halted
    );
    assert_eq!(game.state().board().empty_count(), 9);
}

#[test]
fn cards_are_conserved_through_play() {
    let mut game = Game::new(GameOptions::default(), 21).unwrap();
    let ids = all_card_ids(&game);

    for cell in [0, 8, 1] {
        let player = game.current_player();
        assert!(game.submit(&Move::draw(player)).unwrap().is_accepted());
        let player = game.current_player();
        assert!(click(&mut game, player, cell).is_accepted());
        assert_eq!(all_card_ids(&game), ids);
    }
    assert_eq!(game.state().deck().len(), DEFAULT_DECK_SIZE - 13);
}

#[test]
fn snapshot_redacts_other_hands() {
    let game = Game::new(GameOptions::default(), 9).unwrap();
    let snapshot = game.snapshot();
    let own = game.state().hand(0).unwrap().cards().to_vec();

    let seen_by_owner = snapshot.hand_view(Some(0), 0).unwrap();
    assert_eq!(
        seen_by_owner,
        own.iter().copied().map(CardView::Visible).collect::<Vec<_>>()
    );

    let seen_by_opponent = snapshot.hand_view(Some(1), 0).unwrap();
    assert_eq!(
        seen_by_opponent,
        own.iter()
            .map(|c| CardView::Hidden(c.id))
            .collect::<Vec<_>>()
    );
    assert!(
        seen_by_opponent
            .iter()
            .zip(&own)
            .all(|(view, card)| view.id() == card.id)
    );

    assert_eq!(snapshot.hand_view(None, 1).unwrap().len(), 5);
    assert!(snapshot.hand_view(Some(0), 2).is_none());
}

#[test]
fn enumerate_tracks_empty_cells() {
    let mut game = Game::new(GameOptions::default(), 13).unwrap();
    play(&mut game, &[4, 0]);

    let moves = game.enumerate();
    assert_eq!(moves.len(), game.state().board().empty_count());
    assert!(moves.iter().all(|m| m.player == game.current_player()));

    // Every enumerated move is accepted on a fresh copy of the session.
    for mv in &moves {
        let mut branch = game.clone();
        assert!(branch.submit(mv).unwrap().is_accepted());
    }
    assert_eq!(game.state().history().len(), 2);
}

#[test]
fn turns_that_cannot_finish_are_rejected_at_setup() {
    let stranded = GameOptions::default()
        .with_turn_bounds(3, 3)
        .with_click_cost(2)
        .with_draw_cost(2);
    assert_eq!(
        Game::new(stranded, 1).unwrap_err(),
        SetupError::Config(ConfigError::UnfinishableTurn)
    );

    assert_eq!(
        Game::new(GameOptions::default().with_click_cost(0), 1).unwrap_err(),
        SetupError::Config(ConfigError::ZeroMoveCost)
    );
}

#[test]
fn mixed_costs_always_finish_the_turn() {
    let options = GameOptions::default()
        .with_turn_bounds(3, 3)
        .with_draw_cost(2);
    let mut game = Game::new(options, 1).unwrap();

    assert_eq!(
        game.submit(&Move::draw(0)).unwrap(),
        MoveOutcome::Accepted(Transition::Continue)
    );
    assert_eq!(
        click(&mut game, 0, 4),
        MoveOutcome::Accepted(Transition::TurnComplete { next_player: 1 })
    );
}

#[test]
fn deal_that_empties_deck_starts_drawn() {
    let options = small_options(4, 2).with_draw_condition(DrawCondition::BoardFullOrDeckEmpty);
    let mut game = Game::new(options, 1).unwrap();

    assert!(game.state().deck().is_empty());
    assert_eq!(game.state().outcome(), Some(Outcome::Draw));
    assert!(game.snapshot().terminal.is_over);

    assert_eq!(
        game.submit(&Move::draw(0)).unwrap(),
        MoveOutcome::Rejected(InvalidMoveError::GameOver)
    );
    assert_eq!(game.halted(), None);
}
