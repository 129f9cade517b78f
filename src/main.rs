//! # Ecosystem Docs CLI (`ecodocs`)
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ecodocs sections` | List sections |
//! | `ecodocs show [SECTION]` | Render a section |
//! | `ecodocs search "<query>"` | Search sections |
//! | `ecodocs export markdown` | Write all sections as Markdown |
//! | `ecodocs export print` | Print a section |
//! | `ecodocs browse` | Interactive browser |
//! | `ecodocs completions <shell>` | Shell completion script |
//!
//! ## Examples
//!
//! ```bash
//! ecodocs show architecture --theme light
//! ecodocs search "cortex ai"
//! ecodocs export markdown --output ./out
//! ecodocs export markdown --output -     # stdout
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ecosystem_docs::browse;
use ecosystem_docs::config::{self, Config};
use ecosystem_docs::export::{self, MarkdownTarget};
use ecosystem_docs::print::{self, PrintOutcome};
use ecosystem_docs::render::TerminalRenderer;
use ecosystem_docs::search;
use ecosystem_docs::sections;
use ecosystem_docs_core::{DocsApp, Theme};

/// Ecosystem Docs: browse the AI Development Ecosystem documentation.
#[derive(Parser)]
#[command(
    name = "ecodocs",
    about = "Ecosystem Docs: browse, search, and export the AI Development Ecosystem documentation",
    version
)]
struct Cli {
    /// Path to a configuration file (TOML).
    ///
    /// Defaults to `./config/ecodocs.toml` when that file exists; otherwise
    /// built-in defaults are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the documentation sections.
    Sections {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Render one section. Unknown sections show the overview.
    Show {
        /// Section identifier (see `ecodocs sections`).
        #[arg(default_value = "overview")]
        section: String,

        /// `dark` or `light`.
        #[arg(long, default_value = "dark")]
        theme: Theme,

        /// Also print the navigation sidebar.
        #[arg(long)]
        sidebar: bool,
    },

    /// Search section titles and keywords.
    ///
    /// Queries shorter than three characters are not searched.
    Search {
        /// The search query.
        query: String,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export documentation.
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },

    /// Interactive browser: type to search, `:help` for commands.
    Browse {
        /// Starting theme.
        #[arg(long, default_value = "dark")]
        theme: Theme,
    },

    /// Print a shell completion script.
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ExportFormat {
    /// Write every section to `ai-ecosystem-documentation.md`.
    Markdown {
        /// Output directory, or `-` for stdout. Defaults to `[export].output_dir`.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print one section using a print-safe stylesheet.
    ///
    /// Runs `[export].print_command` when configured; otherwise writes
    /// `ai-ecosystem-print.html` to the output directory.
    Print {
        /// Section to print.
        #[arg(long, default_value = "overview")]
        section: String,

        /// On-screen theme at the time of printing.
        #[arg(long, default_value = "dark")]
        theme: Theme,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn renderer_for(cfg: &Config, theme: Theme) -> TerminalRenderer {
    TerminalRenderer::new(theme.palette(), cfg.display.color.enabled(), cfg.display.width)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "ecodocs", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = config::resolve_config(cli.config.as_deref())?;
    debug!(?cfg, "configuration loaded");

    match cli.command {
        Commands::Sections { json } => {
            sections::list_sections(json)?;
        }
        Commands::Show {
            section,
            theme,
            sidebar,
        } => {
            let app = DocsApp::new(cfg.search_params()).with_theme(theme);
            app.navigate(&section);
            if !app.router().has_route(&section) {
                debug!(section = %section, "unknown section, showing default");
            }
            let renderer = renderer_for(&cfg, theme);
            if sidebar {
                println!("{}", renderer.render_sidebar(app.router().resolve(&section)));
            }
            print!("{}", renderer.render_page(&app.current_page(cfg.compact())));
        }
        Commands::Search { query, json } => {
            let renderer = renderer_for(&cfg, Theme::default());
            search::run_search(&cfg, &renderer, &query, json)?;
        }
        Commands::Export { format } => match format {
            ExportFormat::Markdown { output } => {
                let target = MarkdownTarget::from_arg(output.as_deref(), &cfg);
                export::run_markdown_export(&target)?;
            }
            ExportFormat::Print { section, theme } => {
                let app = DocsApp::new(cfg.search_params()).with_theme(theme);
                app.navigate(&section);
                let page = app.current_page(cfg.compact());
                if print::run_print(&cfg, &page, theme.palette())? == PrintOutcome::Skipped {
                    debug!("print skipped");
                }
            }
        },
        Commands::Browse { theme } => {
            let app = DocsApp::new(cfg.search_params()).with_theme(theme);
            browse::run_browse(&cfg, app)?;
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
