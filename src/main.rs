mod logging;

use clap::{ArgAction, CommandFactory, Parser};
use mobile_assets::config::{self, DEFAULT_CONFIG_FILE, GeneratorConfig};
use mobile_assets::generate;
use mobile_assets::imaging::RustBackend;
use mobile_assets::output::TracingReporter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mobile-assets")]
#[command(version)]
#[command(about = "Generate Android and iOS image assets from source PNGs")]
#[command(long_about = "\
Generate Android and iOS image assets from source PNGs

Every PNG in the input directory is resized for each platform density and
written to the layout the platform's build tools expect:

  <output>/
  ├── Android/
  │   └── <name>/drawable-{mdpi,hdpi,xdpi,xxhdpi,xxxhdpi}/<name>.png
  └── iOS/
      └── <name>/{<name>.png, <name>@2x.png, <name>@3x.png, Contents.json}

Sizes are given in dp (points on iOS). Omit both width and height to treat
each source as drawn for the highest density and scale it down.

Settings can also live in mobile-assets.toml; run with --gen-config for a
documented template.")]
#[command(disable_help_flag = true)]
struct Cli {
    /// The input directory with the source PNG files
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// The output directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Target dp width excluding padding (omit to derive from height)
    #[arg(short, long, value_name = "DP")]
    width: Option<f64>,

    /// Target dp height excluding padding (omit to derive from width)
    #[arg(short = 'h', long, value_name = "DP")]
    height: Option<f64>,

    /// Target dp padding on every side
    #[arg(short, long, value_name = "DP")]
    padding: Option<f64>,

    /// Recurse into subdirectories of the input
    #[arg(short, long)]
    recursive: bool,

    /// Show debug messages
    #[arg(short, long)]
    verbose: bool,

    /// Config file [default: mobile-assets.toml if present]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a stock config file with all options documented and exit
    #[arg(long)]
    gen_config: bool,

    /// Do not generate Android assets
    #[arg(long)]
    skip_android: bool,

    /// Do not generate iOS assets
    #[arg(long)]
    skip_ios: bool,

    /// Show this message and exit
    #[arg(short = '?', long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Layer the command-line flags over the file configuration.
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(width) = self.width {
            config.target.width = width;
        }
        if let Some(height) = self.height {
            config.target.height = height;
        }
        if let Some(padding) = self.padding {
            config.target.padding = padding;
        }
        config.scan.recursive |= self.recursive;
        config.platforms.android &= !self.skip_android;
        config.platforms.ios &= !self.skip_ios;
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    logging::init(cli.verbose);

    let (config_path, required) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    let config = match config::load_config(&config_path, required) {
        Ok(file_config) => cli.apply(file_config),
        Err(e) => {
            tracing::error!("Cannot load {}: {}", config_path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    let Some(request) = config.to_request() else {
        if config.input.is_none() {
            eprintln!("No input directory specified.");
        } else {
            eprintln!("No output directory specified.");
        }
        eprintln!();
        let _ = Cli::command().print_help();
        return ExitCode::from(2);
    };

    if generate::generate(&RustBackend::new(), &TracingReporter, &request) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
