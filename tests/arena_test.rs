//! Tests for playing configured matches with the built-in bots.

use botany::{
    BotKind, GameAdapter, MatchConfig, NoughtsAndCrosses, OutputFormat, Position, ResultType,
    Side, final_board, play, render,
};
use strum::IntoEnumIterator;

#[test]
fn test_first_against_first_matches_runner_scenario() {
    let result = play(&MatchConfig::new(BotKind::First, BotKind::First)).unwrap();
    assert!(result.is_complete());
    assert_eq!(*result.score(), 1);
    assert_eq!(result.plies(), 7);
}

#[test]
fn test_every_pairing_completes() {
    for a in BotKind::iter() {
        for b in BotKind::iter() {
            let result = play(&MatchConfig::new(a, b)).unwrap();
            assert_eq!(
                *result.result_type(),
                ResultType::Complete,
                "{} vs {} ended with {:?}",
                a,
                b,
                result.traceback()
            );
        }
    }
}

#[test]
fn test_tactical_never_loses_to_first() {
    let as_x = play(&MatchConfig::new(BotKind::Tactical, BotKind::First)).unwrap();
    assert_ne!(as_x.winner(), Some(Side::B));

    let as_o = play(&MatchConfig::new(BotKind::First, BotKind::Tactical)).unwrap();
    assert_ne!(as_o.winner(), Some(Side::A));
}

#[test]
fn test_final_board_matches_outcome() {
    let result = play(&MatchConfig::new(BotKind::Cycler, BotKind::Last)).unwrap();
    let board = final_board(&result).unwrap();
    let outcome = NoughtsAndCrosses.outcome(&board);
    assert!(*outcome.is_over());
    assert_eq!(outcome.score(), result.score());
}

#[test]
fn test_render_json() {
    let result = play(&MatchConfig::new(BotKind::First, BotKind::First)).unwrap();
    let json = render(&result, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["result_type"], "COMPLETE");
    assert_eq!(value["score"], 1);
    assert_eq!(value["move_list"].as_array().unwrap().len(), 7);
    assert!(value["traceback"].is_null());
}

#[test]
fn test_render_text_shows_board() {
    let result = play(&MatchConfig::new(BotKind::First, BotKind::First)).unwrap();
    let text = render(&result, OutputFormat::Text).unwrap();

    assert!(text.starts_with("X | O | X"));
    assert!(text.contains("result: COMPLETE"));
    assert!(text.contains(&format!("{:?}", Position::BottomLeft)));
}
