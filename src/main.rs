//! CLI entry point for tidyimports.
//!
//! Exposes the two halves of the pipeline as commands: `extract` prints the
//! structured imports of a file as JSON, `render` turns grouped elements back
//! into import text. Grouping and ordering happen outside this tool.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;
use tidyimports::error::ErrorContext;
use tidyimports::io::{ExitCode, read_groups, read_stdin};
use tidyimports::{
    ImportCreator, ImportError, ImportParser, ImportResult, Settings, TypeScriptImportParser,
};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Import extraction and generation for TypeScript and JavaScript
#[derive(Parser)]
#[command(
    name = "tidyimports",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract and regenerate TypeScript/JavaScript import statements",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Create .tidyimports/settings.toml with default style")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display the effective settings as TOML")]
    Config,

    /// Extract imports from a source file
    #[command(
        about = "Print the imports and identifier references of a file as JSON",
        after_help = "Examples:\n  tidyimports extract src/app.ts\n  cat src/app.tsx | tidyimports extract src/app.tsx --stdin"
    )]
    Extract {
        /// Source file; its extension selects the grammar
        path: PathBuf,

        /// Read the source text from stdin instead of the file
        #[arg(long)]
        stdin: bool,
    },

    /// Render grouped import elements
    #[command(
        about = "Render a JSON array of import groups as import text",
        after_help = "The output is the exact replacement block, without a trailing newline\nunless blank_lines_after_all_groups asks for one."
    )]
    Render {
        /// JSON file holding the import element groups
        groups: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let settings = if let Some(config_path) = &cli.config {
        Settings::load_from(config_path).unwrap_or_else(|e| {
            eprintln!(
                "Configuration error loading from {}: {}",
                config_path.display(),
                e
            );
            std::process::exit(ExitCode::ConfigError.into());
        })
    } else {
        Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            eprintln!("Using default configuration.");
            Settings::default()
        })
    };

    tidyimports::logging::init(&settings, cli.verbose);

    if let Err(error) = run(&cli, &settings) {
        let code = ExitCode::from_error(&error);
        eprintln!("Error: {error}");
        for suggestion in error.recovery_suggestions() {
            eprintln!("  - {suggestion}");
        }
        eprintln!("{} (exit code {})", code.description(), i32::from(code));
        std::process::exit(code.into());
    }
}

fn run(cli: &Cli, settings: &Settings) -> ImportResult<()> {
    match &cli.command {
        Commands::Init { force } => {
            let current_dir = std::env::current_dir().context("Failed to resolve current directory")?;
            let path = Settings::init_config_file(current_dir, *force)?;
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your import style.");
        }

        Commands::Config => {
            let toml_string = toml::to_string_pretty(settings).map_err(|e| {
                ImportError::ConfigError {
                    reason: e.to_string(),
                }
            })?;
            println!("{toml_string}");
        }

        Commands::Extract { path, stdin } => {
            let source = if *stdin { Some(read_stdin()?) } else { None };

            let mut parser = TypeScriptImportParser::new()?;
            let parsed = parser.parse_imports(path, source.as_deref())?;

            let json = serde_json::to_string_pretty(&parsed)
                .context("Failed to serialize extracted imports")?;
            println!("{json}");
        }

        Commands::Render { groups } => {
            settings.validate()?;
            let groups = read_groups(groups)?;

            let creator = ImportCreator::new(settings.style.clone());
            print!("{}", creator.create_import_text(&groups));
        }
    }

    Ok(())
}
