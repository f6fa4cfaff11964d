use boardforge::config::{Config, ScoringWeights, SearchParams};
use boardforge::error::BoardForgeError;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::Write;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

#[test]
fn test_defaults_match_clap_defaults() {
    let matches = TestCli::command().get_matches_from(["boardforge"]);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    let defaults = Config::default();

    assert_eq!(cli.config.search.trials, 100_000);
    assert_eq!(cli.config.search.retain, 10);
    assert_eq!(cli.config.search.trials, defaults.search.trials);
    assert_eq!(cli.config.search.report_interval, defaults.search.report_interval);
    assert_eq!(cli.config.weights, defaults.weights);
}

#[test]
fn test_validate_rejects_zero_parameters() {
    assert!(Config::default().validate().is_ok());

    let zeroed = [
        SearchParams {
            trials: 0,
            ..Default::default()
        },
        SearchParams {
            retain: 0,
            ..Default::default()
        },
        SearchParams {
            report_interval: 0,
            ..Default::default()
        },
    ];

    for search in zeroed {
        let cfg = Config {
            search,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(BoardForgeError::Config(_))));
    }
}

#[test]
fn test_weights_file_fills_missing_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "adjacency_penalty": 2.5 }}"#).unwrap();

    let w = ScoringWeights::load_from_file(file.path()).unwrap();
    assert_eq!(w.adjacency_penalty, 2.5);
    assert_eq!(w.target_variance, 1.25);
}

#[test]
fn test_weights_file_errors_are_reported() {
    let missing = ScoringWeights::load_from_file("/definitely/not/here.json");
    assert!(matches!(missing, Err(BoardForgeError::Config(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not json").unwrap();
    let broken = ScoringWeights::load_from_file(file.path());
    assert!(matches!(broken, Err(BoardForgeError::Json(_))));
}

#[test]
fn test_explicit_cli_flags_override_file_weights() {
    let matches =
        TestCli::command().get_matches_from(["boardforge", "--target-variance", "2.0"]);
    let cli = TestCli::from_arg_matches(&matches).unwrap();

    let mut from_file = ScoringWeights {
        adjacency_penalty: 0.1,
        target_variance: 0.2,
    };
    from_file.merge_from_cli(&cli.config.weights, &matches);

    assert_eq!(from_file.adjacency_penalty, 0.1, "default flag must not clobber file");
    assert_eq!(from_file.target_variance, 2.0, "explicit flag must win");
}

#[test]
fn test_config_serializes_roundtrip_shape() {
    let json = serde_json::to_value(Config::default()).unwrap();
    assert_eq!(json["search"]["trials"], 100_000);
    assert_eq!(json["weights"]["target_variance"], 1.25);
}

#[test]
fn test_validate_rejects_bad_weights() {
    let bad = [
        ScoringWeights {
            adjacency_penalty: -5.0,
            ..Default::default()
        },
        ScoringWeights {
            target_variance: f32::NAN,
            ..Default::default()
        },
        ScoringWeights {
            adjacency_penalty: f32::INFINITY,
            ..Default::default()
        },
        ScoringWeights {
            target_variance: -0.5,
            ..Default::default()
        },
    ];

    for weights in bad {
        assert!(
            matches!(weights.validate(), Err(BoardForgeError::Config(_))),
            "{:?} should be rejected",
            weights
        );
        let cfg = Config {
            weights,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(BoardForgeError::Config(_))));
    }

    let zeroed = ScoringWeights {
        adjacency_penalty: 0.0,
        target_variance: 0.0,
    };
    assert!(zeroed.validate().is_ok());
}

#[test]
fn test_negative_weights_from_file_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "adjacency_penalty": -5.0 }}"#).unwrap();

    let w = ScoringWeights::load_from_file(file.path()).unwrap();
    let cfg = Config {
        weights: w,
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(BoardForgeError::Config(_))));
}
