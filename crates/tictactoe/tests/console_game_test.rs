//! Scripted games through the console loop.

use std::io::Cursor;
use tictactoe::{Console, FirstPlayer, GameConfig, PROMPT};
use tictactoe_engine::{Mark, Outcome};

/// A human who always tries squares in row-major order, wrapping around.
fn row_major_script(rounds: usize) -> String {
    let mut script = String::new();
    for _ in 0..rounds {
        for row in 0..3 {
            for col in 0..3 {
                script.push_str(&format!("{row} {col}\n"));
            }
        }
    }
    script
}

fn play(script: &str, config: &GameConfig) -> (Outcome, String) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let outcome = console.play(config).expect("Game should finish");
    let output = String::from_utf8(console.into_output()).expect("Output is UTF-8");
    (outcome, output)
}

#[test]
fn test_engine_punishes_row_major_human() {
    // X(0,0) O(1,1) X(0,1) O(0,2) X(1,0) O(2,0) completes the anti-diagonal.
    let (outcome, output) = play(&row_major_script(5), &GameConfig::default());
    assert_eq!(outcome, Outcome::Win(Mark::Opponent));
    assert!(output.ends_with("X|X|O\n-----\nX|O| \n-----\nO| | \n-----\nO wins!\n"));
    assert!(output.contains("That square is not available."));
    assert_eq!(output.matches("AI is making a move...").count(), 3);
}

#[test]
fn test_engine_never_loses_when_moving_first() {
    let config = GameConfig::new(FirstPlayer::Computer, false);
    let (outcome, output) = play(&row_major_script(5), &config);
    assert_ne!(outcome, Outcome::Win(Mark::Player));
    assert!(output.ends_with(&format!("{outcome}\n")));
}

#[test]
fn test_invalid_lines_are_skipped() {
    let script = format!("hello\n\n5 5\n1 1 1\n{}", row_major_script(5));
    let (outcome, output) = play(&script, &GameConfig::default());
    assert_eq!(outcome, Outcome::Win(Mark::Opponent));
    assert!(output.contains("Invalid input. Enter row and column as numbers."));
    assert!(output.contains("Enter exactly two numbers: row and column."));
    assert!(output.matches(PROMPT).count() >= 7);
}

#[test]
fn test_stats_are_printed_when_enabled() {
    let config = GameConfig::new(FirstPlayer::Human, true);
    let (_, output) = play(&row_major_script(5), &config);
    assert_eq!(output.matches("Searched ").count(), 3);
}
