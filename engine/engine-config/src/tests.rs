use super::*;
use std::path::PathBuf;

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "kinrow-config-{}-{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_central_config_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.common.env_id, "tictactoe");
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.tictactoe.size, 3);
    assert_eq!(config.tictactoe.win_length, 3);
    assert_eq!(config.connect4.columns, 7);
    assert_eq!(config.connect4.rows, 6);
    assert_eq!(config.connect4.win_length, 4);
    assert_eq!(config.mcts.iterations, 1000);
    assert!((config.mcts.exploration - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.play.mode, "human");
    assert!(!config.play.engine_first);
    assert_eq!(config.play.tree_depth, 1);
    assert_eq!(config.play.seed, None);
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
env_id = "connect4"

[connect4]
columns = 9
rows = 7
win_length = 5

[mcts]
exploration = 1.4
iterations = 250

[play]
mode = "self-play"
seed = 42
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.env_id, "connect4");
    assert_eq!(config.connect4.columns, 9);
    assert_eq!(config.connect4.rows, 7);
    assert_eq!(config.connect4.win_length, 5);
    assert!((config.mcts.exploration - 1.4).abs() < f64::EPSILON);
    assert_eq!(config.mcts.iterations, 250);
    assert_eq!(config.play.mode, "self-play");
    assert_eq!(config.play.seed, Some(42));
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[tictactoe]
size = 5
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.tictactoe.size, 5);
    assert_eq!(config.tictactoe.win_length, 3); // Default
    assert_eq!(config.common.env_id, "tictactoe"); // Default
    assert_eq!(config.mcts.iterations, 1000); // Default
}

#[test]
fn test_empty_config_is_default() {
    let config: CentralConfig = toml::from_str("").unwrap();
    assert_eq!(config, CentralConfig::default());
}

#[test]
fn test_kinrow_env_overrides() {
    std::env::set_var("KINROW_COMMON_ENV_ID", "connect4");
    std::env::set_var("KINROW_CONNECT4_COLUMNS", "8");
    std::env::set_var("KINROW_MCTS_EXPLORATION", "0.75");
    std::env::set_var("KINROW_PLAY_SEED", "1234");
    std::env::set_var("KINROW_TICTACTOE_SIZE", "not-a-number");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.common.env_id, "connect4");
    assert_eq!(config.connect4.columns, 8);
    assert!((config.mcts.exploration - 0.75).abs() < f64::EPSILON);
    assert_eq!(config.play.seed, Some(1234));
    // Unparseable values are ignored
    assert_eq!(config.tictactoe.size, 3);

    std::env::remove_var("KINROW_COMMON_ENV_ID");
    std::env::remove_var("KINROW_CONNECT4_COLUMNS");
    std::env::remove_var("KINROW_MCTS_EXPLORATION");
    std::env::remove_var("KINROW_PLAY_SEED");
    std::env::remove_var("KINROW_TICTACTOE_SIZE");
}

#[test]
fn test_load_from_path() {
    let path = temp_config(
        "valid",
        r#"
[play]
tree_depth = 3
engine_first = true
"#,
    );

    let config = load_from_path(&path);
    assert_eq!(config.play.tree_depth, 3);
    assert!(config.play.engine_first);
    assert_eq!(config.tictactoe.win_length, 3);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let path = temp_config("broken", "[play\ntree_depth = ");

    let config = load_from_path(&path);
    assert_eq!(config.play.tree_depth, 1);
    assert_eq!(config.connect4.rows, 6);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = load_from_path(std::path::Path::new("/nonexistent/kinrow/config.toml"));
    assert_eq!(config.play.tree_depth, 1);
    assert_eq!(config.connect4.win_length, 4);
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config, cloned);
}
