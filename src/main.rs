use clap::Parser;
use prime_checker::app::export::{FileExporter, NoopExporter};
use prime_checker::app::presenter::Presenter;
use prime_checker::app::quotes::QuotePicker;
use prime_checker::app::session::{Command, InputSession};
use prime_checker::config::toml_config::TomlConfig;
use prime_checker::core::Exporter;
use prime_checker::utils::error::{ErrorSeverity, PrimeError};
use prime_checker::utils::{logger, validation::Validate};
use prime_checker::{CheckEngine, CheckReport, CliConfig, LocalStorage, Settings, TrialDivision};
use tokio::io::{AsyncBufReadExt, BufReader};

fn exit_code(e: &PrimeError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &PrimeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e).max(1))
}

fn load_settings(cli: &CliConfig) -> Result<Settings, PrimeError> {
    cli.validate()?;

    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Settings::from_toml(&file)?
        }
        None => Settings::default(),
    }
    .apply_cli(cli);

    settings.validate()?;
    Ok(settings)
}

fn show(settings: &Settings, presenter: &Presenter, picker: &mut QuotePicker, report: &CheckReport) {
    let quote = picker.line_for(report.result.is_prime);
    match presenter.render(settings.format, report, &quote) {
        Ok(output) => print!("{}", output),
        Err(e) => fail(&e),
    }
}

fn print_written(settings: &Settings, written: &[String]) {
    if let Some(base) = &settings.output_path {
        for name in written {
            println!("📁 Output saved to: {}/{}", base, name);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    if settings.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let presenter = Presenter::new(settings.chart_rows);
    let mut picker = match settings.seed {
        Some(seed) => QuotePicker::new(settings.quotes.clone(), seed),
        None => QuotePicker::from_clock(settings.quotes.clone()),
    };
    let exporter: Box<dyn Exporter> = match &settings.output_path {
        Some(path) => Box::new(FileExporter::new(
            LocalStorage::new(path.clone()),
            settings.export_formats.clone(),
        )),
        None => Box::new(NoopExporter),
    };
    let engine = CheckEngine::new_with_monitoring(TrialDivision, settings.clone(), settings.monitor);

    // 單次模式
    if let Some(number) = &cli.number {
        let (report, written) = match engine.run(number, exporter.as_ref()).await {
            Ok(done) => done,
            Err(e) => fail(&e),
        };
        show(&settings, &presenter, &mut picker, &report);
        print_written(&settings, &written);
        return Ok(());
    }

    // 互動模式：輸入數字後按 Enter 確認，:q 離開
    println!(
        "Enter a number (up to {} digits), then an empty line to confirm. :q quits.",
        settings.max_digits
    );
    let mut session = InputSession::new(settings.max_digits);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Input(raw) => {
                if let Err(e) = session.set_input(&raw) {
                    eprintln!("❌ {}", e.user_friendly_message());
                }
            }
            Command::Confirm => match session.confirm(&engine) {
                Ok(report) => {
                    let report = report.clone();
                    show(&settings, &presenter, &mut picker, &report);
                    match exporter.export(&report).await {
                        Ok(written) => print_written(&settings, &written),
                        Err(e) => fail(&e),
                    }
                }
                Err(e) => eprintln!("💡 {}", e.user_friendly_message()),
            },
        }
    }

    Ok(())
}
