//! Interactive session driven through in-memory input and output

use std::io::Cursor;

use noughts::{
    Difficulty, GameOutcome, Player,
    cli::{
        config::{GameConfig, GameMode},
        session::{GameSummary, play_game},
    },
};

fn config(mode: GameMode, difficulty: Difficulty) -> GameConfig {
    GameConfig {
        mode,
        difficulty,
        ..GameConfig::default()
    }
}

fn play(config: &GameConfig, input: &str) -> (anyhow::Result<GameSummary>, String) {
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let summary = play_game(config, &mut input, &mut out);
    (summary, String::from_utf8(out).expect("output should be UTF-8"))
}

mod human_input {
    use super::*;

    #[test]
    fn bad_input_is_reported_and_asked_again() {
        let config = config(GameMode::HumanVsHuman, Difficulty::Hard);
        let (summary, out) = play(&config, "hello\n0\n0\n3\n1\n12\n4\n2\n");
        let summary = summary.unwrap();

        assert_eq!(summary.moves, vec![0, 3, 1, 4, 2]);
        assert_eq!(summary.outcome, GameOutcome::Won(Player::human('O')));
        assert!(out.contains("'hello' is not a cell"));
        assert!(out.contains("position 0 is already occupied"));
        assert!(out.contains("position 12 is out of bounds"));
        assert!(out.contains("# Human Player: 'O' won the game"));
        assert!(out.ends_with("Thanks for playing.\n"));
    }

    #[test]
    fn prompts_name_the_player() {
        let config = config(GameMode::HumanVsHuman, Difficulty::Hard);
        let (_, out) = play(&config, "0\n3\n1\n4\n2\n");

        assert!(out.contains("Human Player: 'O', pick your cell: "));
        assert!(out.contains("Human Player: 'X', pick your cell: "));
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let config = config(GameMode::HumanVsHuman, Difficulty::Hard);
        let (summary, _) = play(&config, "0\n");

        let err = summary.unwrap_err();
        assert!(err.to_string().contains("input closed"), "{err:#}");
    }
}

mod against_the_computer {
    use super::*;

    #[test]
    fn hard_computer_does_not_lose() {
        let config = config(GameMode::HumanVsAi, Difficulty::Hard);
        // Try every cell in order; occupied ones are rejected and skipped.
        let script = "0\n1\n2\n3\n4\n5\n6\n7\n8\n".repeat(5);
        let (summary, out) = play(&config, &script);
        let summary = summary.unwrap();

        assert_ne!(summary.outcome, GameOutcome::Won(Player::human('O')));
        assert!(out.contains("AI Player: 'X''s turn"));
        assert!(out.contains("Game mode: Human vs AI"));
        assert!(out.contains("Level of complexity: Hard"));
    }

    #[test]
    fn computers_play_without_input() {
        let config = config(GameMode::AiVsAi, Difficulty::Hard);
        let (summary, out) = play(&config, "");
        let summary = summary.unwrap();

        assert_eq!(summary.outcome, GameOutcome::Tied);
        assert_eq!(summary.moves, vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);
        assert!(out.contains("# Game Tied!!"));
        assert!(out.contains("|O,O,X|\n|X,X,O|\n|O,X,O|"));
    }
}

mod summary {
    use super::*;

    #[test]
    fn json_lists_moves_and_outcome() {
        let config = config(GameMode::AiVsAi, Difficulty::Easy);
        let (summary, _) = play(&config, "");
        let json = serde_json::to_value(summary.unwrap()).unwrap();

        assert_eq!(json["mode"], "AiVsAi");
        assert_eq!(json["difficulty"], "Easy");
        assert_eq!(json["moves"], serde_json::json!([0, 1, 2, 3, 4, 5, 6]));
        assert_eq!(
            json["outcome"],
            serde_json::json!({ "Won": { "symbol": "O", "automated": true } })
        );
    }

    #[test]
    fn tie_serializes_as_a_plain_string() {
        let config = config(GameMode::AiVsAi, Difficulty::Hard);
        let (summary, _) = play(&config, "");
        let json = serde_json::to_value(summary.unwrap()).unwrap();

        assert_eq!(json["outcome"], "Tied");
    }
}
