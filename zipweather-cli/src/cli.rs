use clap::{Parser, Subcommand};
use std::process::ExitCode;

use zipweather_core::{Config, WeatherError, WeatherService, service::validate_postal_code};

use crate::format;

// Exit codes of the `zipweather` binary. 0 is success; everything else
// tells scripts which stage failed.
const EXIT_NETWORK: u8 = 1;
const EXIT_API: u8 = 2;
const EXIT_POSTAL_CODE: u8 = 3;
const EXIT_CONFIG: u8 = 4;
const EXIT_MISSING_API_KEY: u8 = 5;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "zipweather", version, about = "郵便番号から天気情報を取得するCLI")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// 7桁の日本の郵便番号（例: 1000001）。省略した場合は設定ファイルのデフォルト値を使用します。
    pub postal_code: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// APIキーとデフォルトの郵便番号を対話的に設定します。
    Configure,
}

impl Cli {
    pub async fn run(self) -> ExitCode {
        match self.command {
            Some(Command::Configure) => configure(),
            None => lookup(self.postal_code).await,
        }
    }
}

/// Interactively collect the API key and default postal code, then persist
/// them to the config file.
fn configure() -> ExitCode {
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("エラー: {err:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let api_key = match inquire::Text::new("OpenWeatherMap APIキー:")
        .with_initial_value(config.api_key().unwrap_or_default())
        .prompt()
    {
        Ok(value) => value,
        Err(err) => {
            eprintln!("設定を中断しました: {err}");
            return ExitCode::FAILURE;
        }
    };

    let postal_code = match inquire::Text::new("デフォルトの郵便番号 (任意):")
        .with_initial_value(config.default_postal_code().unwrap_or_default())
        .prompt()
    {
        Ok(value) => value,
        Err(err) => {
            eprintln!("設定を中断しました: {err}");
            return ExitCode::FAILURE;
        }
    };

    let postal_code = postal_code.trim();
    if !postal_code.is_empty() && validate_postal_code(postal_code).is_err() {
        eprintln!("エラー: {}", WeatherError::InvalidPostalCode);
        return ExitCode::from(EXIT_POSTAL_CODE);
    }

    config.api_key = Some(api_key.trim().to_string()).filter(|key| !key.is_empty());
    config.default_postal_code =
        Some(postal_code.to_string()).filter(|code| !code.is_empty());

    if let Err(err) = config.save() {
        eprintln!("エラー: {err:#}");
        return ExitCode::from(EXIT_CONFIG);
    }

    if let Ok(path) = Config::config_file_path() {
        println!("設定を保存しました: {}", path.display());
    } else {
        println!("設定を保存しました。");
    }

    ExitCode::SUCCESS
}

/// Resolve a postal code (argument first, stored default second) and print
/// the colored report.
async fn lookup(postal_code: Option<String>) -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("エラー: {err:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let postal_code =
        postal_code.or_else(|| config.default_postal_code().map(str::to_string));
    let Some(postal_code) = postal_code else {
        eprintln!("エラー: 郵便番号が指定されていません。");
        eprintln!(
            "コマンドライン引数で郵便番号を指定するか、設定ファイルにデフォルトの郵便番号を設定してください。"
        );
        print_config_location();
        return ExitCode::from(EXIT_POSTAL_CODE);
    };

    let Some(api_key) = config.api_key() else {
        eprintln!("エラー: {}", WeatherError::MissingApiKey);
        eprintln!("`zipweather configure` を実行するか、設定ファイルに保存してください。");
        print_config_location();
        eprintln!();
        eprintln!("設定ファイルの例:");
        eprintln!("default_postal_code = \"1000001\"");
        eprintln!("api_key = \"your_api_key_here\"");
        return ExitCode::from(EXIT_MISSING_API_KEY);
    };

    let service = match WeatherService::new(api_key) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("エラー: {err}");
            return ExitCode::from(exit_code_for(&err));
        }
    };

    match service.weather_for_postal_code(&postal_code).await {
        Ok(report) => {
            println!("{}", format::format_report(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("エラー: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn print_config_location() {
    if let Ok(path) = Config::config_file_path() {
        eprintln!("設定ファイルの場所: {}", path.display());
    }
}

fn exit_code_for(err: &WeatherError) -> u8 {
    match err {
        WeatherError::Network(_) => EXIT_NETWORK,
        WeatherError::Api(_) => EXIT_API,
        WeatherError::InvalidPostalCode => EXIT_POSTAL_CODE,
        WeatherError::MissingApiKey => EXIT_MISSING_API_KEY,
    }
}
