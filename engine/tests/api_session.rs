use engine::api::{SessionConfig, SessionRoll, builtin_preset_list, run_session};
use engine::{AdMode, DieKind, RollRequest};

fn request_roll(request: RollRequest, repeat: u32) -> SessionRoll {
    SessionRoll {
        preset: None,
        request: Some(request),
        repeat,
    }
}

#[test]
fn builtin_presets_parse() {
    let presets = builtin_preset_list("basic").unwrap();
    assert_eq!(presets.len(), 4);
    assert!(presets.iter().any(|p| p.id == "attack"));
    assert!(presets.iter().any(|p| p.id == "saving-throw"));
}

#[test]
fn session_with_preset_and_inline_rolls() {
    let cfg: SessionConfig = serde_json::from_str(
        r#"{
            "seed": 2025,
            "rolls": [
                { "preset": "damage", "repeat": 3 },
                { "request": { "die": "d20", "quantity": 1, "advantage": "advantage" } }
            ]
        }"#,
    )
    .unwrap();
    let res = run_session(cfg).unwrap();
    assert_eq!(res.results.len(), 4);
    assert_eq!(res.log.len(), 4);
    assert_eq!(res.statistics.total_rolls, 4);
    assert!(res.log[0].starts_with("2D6+3: "));
    assert!(res.log[3].contains("with advantage"));
}

#[test]
fn yaml_session_config_parses() {
    let cfg: SessionConfig =
        serde_yaml::from_str("seed: 1\nrolls:\n  - preset: initiative\n").unwrap();
    let res = run_session(cfg).unwrap();
    assert_eq!(res.results.len(), 1);
    assert!(res.log[0].starts_with("1D20+2: "));
}

#[test]
fn history_cap_drops_oldest() {
    let cfg = SessionConfig {
        seed: 7,
        presets_id: None,
        presets_path: None,
        history_cap: Some(2),
        rolls: vec![request_roll(
            RollRequest {
                die: DieKind::D6,
                quantity: 1,
                modifier: 0,
                advantage: AdMode::Normal,
            },
            5,
        )],
    };
    let res = run_session(cfg).unwrap();
    // The log keeps everything; the history (and its statistics) are capped.
    assert_eq!(res.log.len(), 5);
    assert_eq!(res.results.len(), 2);
    assert_eq!(res.statistics.total_rolls, 2);
}

#[test]
fn session_rejects_unknown_preset() {
    let cfg = SessionConfig {
        seed: 0,
        presets_id: None,
        presets_path: None,
        history_cap: None,
        rolls: vec![SessionRoll {
            preset: Some("fireball".into()),
            request: None,
            repeat: 1,
        }],
    };
    assert!(run_session(cfg).is_err());
}

#[test]
fn session_rejects_ambiguous_roll_entry() {
    let cfg = SessionConfig {
        seed: 0,
        presets_id: None,
        presets_path: None,
        history_cap: None,
        rolls: vec![SessionRoll {
            preset: Some("attack".into()),
            request: Some(RollRequest {
                die: DieKind::D6,
                quantity: 1,
                modifier: 0,
                advantage: AdMode::Normal,
            }),
            repeat: 1,
        }],
    };
    assert!(run_session(cfg).is_err());
}
