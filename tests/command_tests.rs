use medal_journey::commands::{
    build_report, execute_report, resolve_settings, validate_args, ReportArgs, ReportView,
};
use medal_journey::parser::{load_dataset, LoadOptions};
use medal_journey::utils::config::RowPolicy;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{tempdir, NamedTempFile};

fn reference_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/mp_olympics_medals_data.csv"))
}

#[test]
fn test_validate_args_valid() {
    let args = ReportArgs {
        data: Some(reference_path()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_data_path() {
    let args = ReportArgs {
        data: Some(PathBuf::new()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_is_directory() {
    let dir = tempdir().unwrap();
    let args = ReportArgs {
        output: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_blank_event() {
    let args = ReportArgs {
        events: vec!["  ".to_string()],
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_resolve_settings_config_and_overrides() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        r#"
[data]
path = "elsewhere.csv"
row_policy = "skip"

[games]
years = [2016, 2004, 2008]

[series]
events = ["Men 200 Individual Medley"]
"#
    )
    .unwrap();

    let args = ReportArgs {
        config: Some(config.path().to_path_buf()),
        ..Default::default()
    };
    let settings = resolve_settings(&args).unwrap();
    assert_eq!(settings.data, PathBuf::from("elsewhere.csv"));
    assert_eq!(settings.load.years, vec![2004, 2008, 2016]);
    assert_eq!(settings.load.row_policy, RowPolicy::Skip);
    assert_eq!(settings.events, vec!["Men 200 Individual Medley".to_string()]);

    let args = ReportArgs {
        config: Some(config.path().to_path_buf()),
        data: Some(reference_path()),
        events: vec!["Men 100 Butterfly".to_string()],
        strict: true,
        ..Default::default()
    };
    let settings = resolve_settings(&args).unwrap();
    assert_eq!(settings.data, reference_path());
    assert_eq!(settings.load.row_policy, RowPolicy::Fail);
    assert_eq!(settings.events, vec!["Men 100 Butterfly".to_string()]);
}

#[test]
fn test_resolve_settings_bad_config() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[games]\nyears = []").unwrap();

    let args = ReportArgs {
        config: Some(config.path().to_path_buf()),
        ..Default::default()
    };
    assert!(resolve_settings(&args).is_err());
}

#[test]
fn test_build_report_selected_views() {
    let dataset = load_dataset(reference_path(), &LoadOptions::default()).unwrap();
    let events = vec!["Men 200 Butterfly".to_string()];

    let report = build_report(&dataset, "medals.csv", &events, &[ReportView::Cumulative]);

    assert!(report.per_year.is_none());
    assert!(report.time_series.is_none());
    assert!(report.records.is_none());
    let cumulative = report.cumulative.unwrap();
    assert_eq!(cumulative.len(), 5);
    assert_eq!(cumulative[4].totals, report.totals);
}

#[test]
fn test_execute_report_writes_json() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out/report.json");

    let args = ReportArgs {
        data: Some(reference_path()),
        output: Some(output.clone()),
        ..Default::default()
    };
    let report = execute_report(args).unwrap();

    assert!(output.exists());
    assert_eq!(report.totals.total(), 28);
    assert_eq!(report.records.as_ref().unwrap().len(), 29);
    assert_eq!(report.progression.as_ref().unwrap().len(), 28);
    assert_eq!(report.time_series.as_ref().unwrap().len(), 2);
}

#[test]
fn test_execute_report_missing_data() {
    let args = ReportArgs {
        data: Some(PathBuf::from("/nonexistent/medals.csv")),
        output: None,
        ..Default::default()
    };

    let err = execute_report(args).unwrap_err();
    assert!(err
        .chain()
        .any(|cause| cause.to_string().contains("Data source not found")));
}
