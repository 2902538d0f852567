use anyhow::Result;
use prime_checker::app::export::{ExportFormat, FileExporter, CHART_FILE, PRIMES_FILE, REPORT_FILE};
use prime_checker::app::presenter::{OutputFormat, Presenter};
use prime_checker::app::quotes::{QuotePicker, NOT_PRIME_LINE, PRIME_QUOTES};
use prime_checker::app::session::{Command, InputSession};
use prime_checker::config::toml_config::TomlConfig;
use prime_checker::utils::validation::Validate;
use prime_checker::{CheckEngine, LocalStorage, PrimeError, Settings, SortOrder, TrialDivision};
use tempfile::TempDir;

#[tokio::test]
async fn test_end_to_end_check_with_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().to_string();

    let settings = Settings {
        include_chart: true,
        output_path: Some(output_path.clone()),
        export_formats: vec![ExportFormat::Json, ExportFormat::Csv],
        ..Settings::default()
    };
    let exporter = FileExporter::new(
        LocalStorage::new(output_path.clone()),
        settings.export_formats.clone(),
    );
    let engine = CheckEngine::new(TrialDivision, settings);

    let (report, written) = engine.run("97", &exporter).await?;

    assert!(report.result.is_prime);
    assert_eq!(report.result.lower_primes.len(), 24);
    assert_eq!(written, vec![REPORT_FILE, PRIMES_FILE, CHART_FILE]);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join(REPORT_FILE))?)?;
    assert_eq!(json["input"], 97);
    assert_eq!(json["isPrime"], true);
    assert_eq!(json["lowerPrimes"].as_array().map(Vec::len), Some(24));
    assert_eq!(json["chartData"].as_array().map(Vec::len), Some(96));

    let primes_csv = std::fs::read_to_string(temp_dir.path().join(PRIMES_FILE))?;
    assert!(primes_csv.starts_with("prime\n2\n3\n5\n"));
    assert!(primes_csv.ends_with("89\n"));

    let chart_csv = std::fs::read_to_string(temp_dir.path().join(CHART_FILE))?;
    assert_eq!(chart_csv.lines().next(), Some("x,count"));
    assert_eq!(chart_csv.lines().last(), Some("97,25"));

    Ok(())
}

#[tokio::test]
async fn test_rejected_input_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().to_string();

    let exporter = FileExporter::new(LocalStorage::new(output_path), vec![ExportFormat::Json]);
    let engine = CheckEngine::new(TrialDivision, Settings::default());

    let result = engine.run("12ab", &exporter).await;

    assert!(matches!(result, Err(PrimeError::InvalidInput { .. })));
    assert!(!temp_dir.path().join(REPORT_FILE).exists());
    Ok(())
}

#[test]
fn test_toml_settings_drive_the_engine() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[input]
max_digits = 2

[output]
order = "descending"
"#,
    )?;
    config.validate()?;

    let engine = CheckEngine::new(TrialDivision, Settings::from_toml(&config)?);

    let report = engine.evaluate("20")?;
    assert_eq!(report.order, SortOrder::Descending);
    assert_eq!(report.result.lower_primes, vec![19, 17, 13, 11, 7, 5, 3, 2]);
    assert!(matches!(
        engine.evaluate("100"),
        Err(PrimeError::InputTooLong { max_digits: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_interactive_session_flow() -> Result<()> {
    let engine = CheckEngine::new(TrialDivision, Settings::default());
    let presenter = Presenter::default();
    let mut picker = QuotePicker::with_seed(1);
    let mut session = InputSession::new(5);
    let mut screens = Vec::new();

    for line in ["8", "", "8x", "", "13", "", ":q", "17"] {
        match Command::parse(line) {
            Command::Quit => break,
            Command::Input(raw) => {
                let _ = session.set_input(&raw);
            }
            Command::Confirm => {
                let report = session.confirm(&engine)?.clone();
                let quote = picker.line_for(report.result.is_prime);
                screens.push(presenter.render(OutputFormat::Text, &report, &quote)?);
            }
        }
    }

    assert_eq!(screens.len(), 3);
    assert!(screens[0].starts_with("8 is not a prime number."));
    assert!(screens[0].contains(NOT_PRIME_LINE));
    // "8x" 被拒絕，仍然顯示 8 的結果
    assert_eq!(screens[0], screens[1]);
    assert!(screens[2].starts_with("13 is a prime number."));
    assert!(PRIME_QUOTES.iter().any(|q| screens[2].contains(q)));
    assert_eq!(session.value(), Some(13));
    Ok(())
}
