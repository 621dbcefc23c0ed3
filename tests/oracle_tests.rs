use connect4::{
    Game, GameMode, GameResult, MoveOracle, OraclePlayer, Player, RandomOracle, ScriptedOracle,
    Token, ROWS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_scripted_oracles_play_a_deterministic_game() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = Game::new(GameMode::Ava);
    // a1 builds the bottom row while a2 stacks on top of it
    let mut players: Vec<Box<dyn Player>> = vec![
        Box::new(OraclePlayer::new(Box::new(ScriptedOracle::new([0, 1, 2, 3])))),
        Box::new(OraclePlayer::new(Box::new(ScriptedOracle::new([0, 1, 2])))),
    ];

    while !game.is_over() {
        let idx = game.current_index();
        let col = players[idx].choose_column(&mut rng, &game).unwrap();
        game.play(col).unwrap();
    }
    assert_eq!(game.result(), GameResult::Win(Token::Ai1));
}

#[test]
fn test_out_of_range_suggestion_falls_back_to_first_legal_column() {
    let mut rng = SmallRng::seed_from_u64(0);
    let game = Game::new(GameMode::Ava);
    let mut player = OraclePlayer::new(Box::new(ScriptedOracle::new([42])));
    let col = player.choose_column(&mut rng, &game).unwrap();
    assert_eq!(col, 0);
}

#[test]
fn test_full_column_suggestion_falls_back() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = Game::new(GameMode::Ava);
    for _ in 0..ROWS / 2 {
        game.board_mut().drop_token(0, Token::Ai1).unwrap();
        game.board_mut().drop_token(0, Token::Ai2).unwrap();
    }
    let mut player = OraclePlayer::new(Box::new(ScriptedOracle::new([0])));
    let col = player.choose_column(&mut rng, &game).unwrap();
    assert_eq!(col, 1);
}

#[test]
fn test_failing_oracle_falls_back() {
    let mut rng = SmallRng::seed_from_u64(0);
    let game = Game::new(GameMode::Ava);
    // an exhausted script behaves like an unreachable external oracle
    let mut player = OraclePlayer::new(Box::new(ScriptedOracle::new([])));
    let col = player.choose_column(&mut rng, &game).unwrap();
    assert_eq!(col, 0);
}

#[test]
fn test_random_oracle_only_suggests_legal_columns() {
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut game = Game::new(GameMode::Ava);
    // leave only columns 3 and 5 open
    for col in [0, 1, 2, 4, 6] {
        for _ in 0..ROWS / 2 {
            game.board_mut().drop_token(col, Token::Ai1).unwrap();
            game.board_mut().drop_token(col, Token::Ai2).unwrap();
        }
    }
    let mut oracle = RandomOracle::new();
    for _ in 0..32 {
        let col = oracle.choose_column(&mut rng, &game).unwrap();
        assert!(col == 3 || col == 5);
    }
}

#[test]
fn test_random_oracle_is_reproducible_with_a_fixed_seed() {
    let game = Game::new(GameMode::Ava);
    let mut oracle = RandomOracle::new();

    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    for _ in 0..16 {
        let a = oracle.choose_column(&mut rng1, &game).unwrap();
        let b = oracle.choose_column(&mut rng2, &game).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_seeded_ava_game_runs_to_completion() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut game = Game::new(GameMode::Ava);
    let mut players: Vec<Box<dyn Player>> = vec![
        Box::new(OraclePlayer::random()),
        Box::new(OraclePlayer::random()),
    ];

    let mut moves = 0;
    while !game.is_over() {
        let idx = game.current_index();
        let col = players[idx].choose_column(&mut rng, &game).unwrap();
        game.play(col).unwrap();
        moves += 1;
        assert!(moves <= 42, "game exceeded the board capacity");
    }
    assert!(matches!(
        game.result(),
        GameResult::Win(_) | GameResult::Draw
    ));
}
