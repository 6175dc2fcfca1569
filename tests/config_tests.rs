use slide_deck::config::Configuration;
use slide_deck::error::Error;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
transition-duration: 450ms
completion-margin: 50ms
slides:
  - title: "Welcome"
    text-blocks: 2
    images: 1
  - title: "Agenda"
    info-cards: 3
    note-boxes: 1
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.transition_duration, Duration::from_millis(450));
    assert_eq!(cfg.completion_margin, Duration::from_millis(50));
    assert_eq!(cfg.slides.len(), 2);
    assert_eq!(cfg.slides[0].text_blocks, 2);
    assert_eq!(cfg.slides[1].info_cards, 3);
    assert_eq!(cfg.slides[1].images, 0);
}

#[test]
fn defaults_match_the_classic_timing() {
    let cfg: Configuration = serde_yaml::from_str("slides: [{title: only}]").unwrap();
    assert_eq!(cfg.transition_duration, Duration::from_millis(600));
    assert_eq!(cfg.completion_margin, Duration::from_millis(90));
    assert_eq!(cfg.initial_reveal_delay, Duration::from_millis(300));
    assert!((cfg.swipe.threshold_px - 40.0).abs() < f32::EPSILON);
    assert!((cfg.swipe.slop_px - 5.0).abs() < f32::EPSILON);
    assert!(cfg.autoplay.is_none());
}

#[test]
fn autoplay_section_enables_autoplay_with_default_interval() {
    let yaml = r#"
autoplay: {}
slides: [{title: a}, {title: b}]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let autoplay = cfg.autoplay.expect("autoplay should be enabled");
    assert_eq!(autoplay.interval, Duration::from_secs(8));
}

#[test]
fn autoplay_interval_parses_humantime() {
    let yaml = r#"
autoplay:
  interval: 2m 30s
slides: [{title: a}]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.autoplay.unwrap().interval, Duration::from_secs(150));
}

#[test]
fn validation_rejects_swipe_threshold_below_slop() {
    let yaml = r#"
swipe:
  threshold-px: 4
  slop-px: 5
slides: [{title: a}]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("threshold-px"));
}

#[test]
fn validation_rejects_zero_durations() {
    let cfg: Configuration = serde_yaml::from_str("transition-duration: 0s").unwrap();
    assert!(cfg.validated().is_err());

    let cfg: Configuration = serde_yaml::from_str("autoplay: {interval: 0s}").unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn validation_rejects_absurd_durations() {
    let cfg: Configuration = serde_yaml::from_str("transition-duration: 1000000years").unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("transition-duration"));

    let cfg: Configuration = serde_yaml::from_str("initial-reveal-delay: 2h").unwrap();
    assert!(cfg.validated().is_err());

    let cfg: Configuration = serde_yaml::from_str("autoplay: {interval: 25h}").unwrap();
    assert!(cfg.validated().is_err());

    let cfg: Configuration =
        serde_yaml::from_str("transition-duration: 1h\ncompletion-margin: 1h").unwrap();
    assert!(cfg.validated().is_ok());
}

#[test]
fn empty_slide_list_fails_deck_construction() {
    let cfg: Configuration = serde_yaml::from_str("slides: []").unwrap();
    let cfg = cfg.validated().unwrap();
    assert!(cfg.deck().is_err());
}

#[test]
fn malformed_durations_are_rejected() {
    let res = serde_yaml::from_str::<Configuration>("transition-duration: soon");
    assert!(res.is_err());
}

#[test]
fn loads_from_yaml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("slides.yaml");
    fs::write(
        &path,
        "slides:\n  - title: Intro\n  - title: Outro\n    note-boxes: 2\n",
    )
    .unwrap();

    let cfg = Configuration::from_yaml_file(&path)
        .unwrap()
        .validated()
        .unwrap();
    let deck = cfg.deck().unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.get(1).unwrap().title(), "Outro");
    assert_eq!(deck.get(1).unwrap().layout().note_boxes, 2);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = Configuration::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_yaml_file_is_a_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "slides: [unclosed").unwrap();
    let err = Configuration::from_yaml_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
