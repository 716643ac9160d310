use super::*;

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::WARN);
    assert!(!config.json_format);
    assert!(config.log_dir.is_none());
}

#[test]
fn test_parse_rotation_hourly() {
    let rotation = parse_rotation("hourly");
    // Rotation doesn't impl PartialEq, so use debug
    let debug = format!("{rotation:?}");
    assert!(debug.contains("Hourly") || debug.contains("hourly") || debug.contains("3600"));
}

#[test]
fn test_parse_rotation_never_is_case_insensitive() {
    let debug = format!("{:?}", parse_rotation("NEVER"));
    assert!(debug.contains("Never") || debug.contains("never"));
}

#[test]
fn test_parse_rotation_unknown_defaults_to_daily() {
    let debug = format!("{:?}", parse_rotation("weekly"));
    assert!(debug.contains("Daily") || debug.contains("daily") || debug.contains("86400"));
}
