use anyhow::Context;
use clap::Parser;
use countrygen_lib::services::config::CodesPolicy;
use countrygen_lib::services::emitter::{ExportStyle, OutputLayout};
use countrygen_lib::services::loader::NameForm;
use countrygen_lib::{GenConfig, HttpDownloader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Generate localized country-name JavaScript modules from GeoLite2 data.
#[derive(Parser, Debug)]
#[command(name = "countrygen", version, about)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Locale to generate (repeatable); replaces the configured list
    #[arg(long = "locale", value_name = "TAG")]
    locales: Vec<String>,

    /// URL of the GeoLite2 City CSV archive
    #[arg(long, env = "COUNTRYGEN_SOURCE_URL")]
    source_url: Option<String>,

    /// Where the archive is downloaded and extracted
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Root directory of the generated modules
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Also write each locale's list as `<DIR>/<locale>.csv`
    #[arg(long, value_name = "DIR")]
    dump_dir: Option<PathBuf>,

    #[arg(long, value_enum)]
    name_form: Option<NameForm>,

    #[arg(long, value_enum)]
    layout: Option<OutputLayout>,

    #[arg(long = "export", value_enum)]
    export_style: Option<ExportStyle>,

    /// Which locales feed `codes.js`
    #[arg(long = "codes", value_enum)]
    codes_policy: Option<CodesPolicy>,

    /// Download timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl Cli {
    fn apply(self, config: &mut GenConfig) {
        if !self.locales.is_empty() {
            config.locales = self.locales;
        }
        if let Some(url) = self.source_url {
            config.source_url = url;
        }
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(dir) = self.out_dir {
            config.out_dir = dir;
        }
        if self.dump_dir.is_some() {
            config.dump_dir = self.dump_dir;
        }
        if let Some(form) = self.name_form {
            config.name_form = form;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(style) = self.export_style {
            config.export_style = style;
        }
        if let Some(policy) = self.codes_policy {
            config.codes_policy = policy;
        }
        if self.timeout.is_some() {
            config.download_timeout_secs = self.timeout;
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GenConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GenConfig::default(),
    };
    cli.apply(&mut config);

    let timeout = config.download_timeout_secs.map(Duration::from_secs);
    let downloader = HttpDownloader::new(timeout).context("Failed to build HTTP client")?;

    let summary = countrygen_lib::run(&config, &downloader).context("Generation failed")?;
    for locale in &summary.locales {
        log::info!(
            "{}: {} countries, {} files",
            locale.locale,
            locale.countries,
            locale.files.len()
        );
    }
    log::info!(
        "{} codes written to {}",
        summary.codes,
        summary.codes_file.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    // Try to load .env, ignore if missing
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
