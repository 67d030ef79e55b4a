//! Configuration layering as seen through `cfg` and the seeded commands:
//! defaults < file < environment < flags.

use serde_json::Value;
use serial_test::serial;
use std::io::{Cursor, Write};

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(Vec::new());
    let code = callbreak_cli::run_with_input(args.iter().copied(), &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn clear_env() {
    for var in [
        "CALLBREAK_CONFIG",
        "CALLBREAK_SEED",
        "CALLBREAK_DIFFICULTY",
        "CALLBREAK_BOT_DELAY_MS",
    ] {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, out, _) = run(&["callbreak", "cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], Value::Null);
    assert_eq!(json["seed"]["source"], "default");
    assert_eq!(json["difficulty"]["value"], "medium");
    assert_eq!(json["bot_delay_ms"]["value"], 0);
}

#[test]
#[serial]
fn file_then_env_precedence() {
    clear_env();
    let file = config_file("seed = 456\ndifficulty = \"hard\"\nbot_delay_ms = 250\n");
    unsafe {
        std::env::set_var("CALLBREAK_CONFIG", file.path());
    }

    let (_, out, _) = run(&["callbreak", "cfg"]);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], 456);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["difficulty"]["value"], "hard");
    assert_eq!(json["bot_delay_ms"]["source"], "file");

    unsafe {
        std::env::set_var("CALLBREAK_SEED", "789");
        std::env::set_var("CALLBREAK_DIFFICULTY", "EASY");
    }
    let (_, out, _) = run(&["callbreak", "cfg"]);
    clear_env();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], 789);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["difficulty"]["value"], "easy");
    assert_eq!(json["difficulty"]["source"], "env");
    assert_eq!(json["bot_delay_ms"]["value"], 250);
}

#[test]
#[serial]
fn flags_override_config_seed() {
    clear_env();
    unsafe {
        std::env::set_var("CALLBREAK_SEED", "111");
    }
    let (_, from_env, _) = run(&["callbreak", "deal"]);
    let (_, from_flag, _) = run(&["callbreak", "deal", "--seed", "222"]);
    clear_env();
    assert!(from_env.starts_with("deal: seed=111 "));
    assert!(from_flag.starts_with("deal: seed=222 "));
}

#[test]
#[serial]
fn config_seed_reproduces_flag_seed() {
    clear_env();
    let (_, by_flag, _) = run(&["callbreak", "deal", "--seed", "5"]);
    unsafe {
        std::env::set_var("CALLBREAK_SEED", "5");
    }
    let (_, by_env, _) = run(&["callbreak", "deal"]);
    clear_env();
    assert_eq!(by_flag, by_env);
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    clear_env();
    let file = config_file("difficulty = 3\n");
    unsafe {
        std::env::set_var("CALLBREAK_CONFIG", file.path());
    }
    let (code, _, err) = run(&["callbreak", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    clear_env();
    unsafe {
        std::env::set_var("CALLBREAK_CONFIG", "/nonexistent/callbreak.toml");
    }
    let (code, _, err) = run(&["callbreak", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
}
