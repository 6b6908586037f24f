mod http;
mod store;

use std::path::PathBuf;
use std::time::Duration;

use ckd_client::dom::MemoryPage;
use ckd_client::i18n::{TranslationTable, display_name};
use ckd_client::net::{ApiError, TranslationService};
use ckd_client::util::theme::Theme;
use ckd_client::{ClientConfig, LanguageOutcome, PreferenceManager};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::http::ReqwestTranslationService;
use crate::store::FileStorage;

type CliManager = PreferenceManager<FileStorage, ReqwestTranslationService, MemoryPage>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server request failed: {0}")]
    Api(#[from] ApiError),
    #[error("server has no translations for `{0}`")]
    Rejected(String),
    #[error("language change to `{0}` was superseded")]
    Superseded(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "ckd-prefs", about = "Theme and language preferences for the CKD health portal")]
struct Cli {
    #[arg(long, env = "CKD_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[arg(long, env = "CKD_STATE_FILE", default_value = ".ckd-prefs.json")]
    state_file: PathBuf,

    #[arg(long, env = "CKD_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stored preferences as JSON.
    Status,
    Theme(ThemeCommand),
    Lang(LangCommand),
    /// Resolve translation keys against a language table.
    Translate {
        #[arg(required = true)]
        keys: Vec<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// Translate free text with the server's translate endpoint.
    Text {
        text: String,
        #[arg(long)]
        language: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ThemeCommand {
    #[command(subcommand)]
    command: ThemeSubcommand,
}

#[derive(Subcommand, Debug)]
enum ThemeSubcommand {
    Show,
    Toggle,
    Set { theme: Theme },
}

#[derive(Args, Debug)]
struct LangCommand {
    #[command(subcommand)]
    command: LangSubcommand,
}

#[derive(Subcommand, Debug)]
enum LangSubcommand {
    Show,
    Set { language: String },
    List,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    theme: Theme,
    language: String,
    language_name: String,
    state_file: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();

    let service = ReqwestTranslationService::new(cli.base_url.clone(), Duration::from_secs(cli.timeout_secs))?;
    let manager: CliManager = PreferenceManager::new(
        ClientConfig::with_base_url(cli.base_url),
        FileStorage::new(cli.state_file),
        service,
        MemoryPage::new(),
    );

    match cli.command {
        Command::Status => run_status(&manager),
        Command::Theme(theme) => {
            run_theme(&manager, theme);
            Ok(())
        }
        Command::Lang(lang) => run_lang(&manager, lang).await,
        Command::Translate { keys, language } => run_translate(&manager, &keys, language).await,
        Command::Text { text, language } => {
            let language = language.unwrap_or_else(|| manager.stored_language());
            let translated = manager.service().translate_text(&text, &language).await?;
            println!("{translated}");
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_status(manager: &CliManager) -> Result<(), CliError> {
    let language = manager.stored_language();
    let report = StatusReport {
        theme: manager.stored_theme(),
        language_name: display_name(&language).to_owned(),
        language,
        state_file: manager.store().backend().path().display().to_string(),
    };
    print_json(&serde_json::to_value(&report)?)
}

fn run_theme(manager: &CliManager, theme: ThemeCommand) {
    let (current, changed) = match theme.command {
        ThemeSubcommand::Show => (manager.stored_theme(), false),
        ThemeSubcommand::Toggle => (manager.stored_theme().toggled(), true),
        ThemeSubcommand::Set { theme } => (theme, true),
    };
    if changed {
        manager.apply_theme(current);
    }
    println!("{current}");
}

async fn run_lang(manager: &CliManager, lang: LangCommand) -> Result<(), CliError> {
    match lang.command {
        LangSubcommand::Show => {
            let language = manager.stored_language();
            println!("{language}\t{}", display_name(&language));
            Ok(())
        }
        LangSubcommand::List => {
            let languages = manager.service().supported_languages().await?;
            for info in languages {
                println!("{}\t{}", info.code, info.name);
            }
            Ok(())
        }
        LangSubcommand::Set { language } => {
            match manager.change_language(&language).await {
                LanguageOutcome::Applied { language, entries } => {
                    println!("{language}\t{} ({entries} translations)", display_name(&language));
                    Ok(())
                }
                LanguageOutcome::Rejected => Err(CliError::Rejected(language)),
                LanguageOutcome::Superseded => Err(CliError::Superseded(language)),
                LanguageOutcome::Failed(err) => Err(err.into()),
            }
        }
    }
}

/// Resolve `keys` without touching the stored language preference.
async fn run_translate(manager: &CliManager, keys: &[String], language: Option<String>) -> Result<(), CliError> {
    let language = language.unwrap_or_else(|| manager.stored_language());
    let nodes: Vec<_> = keys.iter().map(|key| manager.page().push_text(key, key)).collect();

    let response = manager.service().fetch_translations(&language).await?;
    if !response.success {
        return Err(CliError::Rejected(language));
    }
    let resolved = response.language.unwrap_or(language);
    tracing::info!(language = %resolved, entries = response.translations.len(), "translations fetched");
    manager.install_translations(TranslationTable::new(resolved, response.translations));

    for (key, node) in keys.iter().zip(nodes) {
        let text = manager.page().text(node).unwrap_or_default();
        println!("{key}\t{text}");
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
