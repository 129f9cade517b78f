//! Interactive browse loop (`ecodocs browse`).
//!
//! A single-threaded event loop: each input line is one event, handled to
//! completion before the next is read. Plain text is a search query; lines
//! starting with `:` are commands.
//!
//! ```text
//! > cortex ai          search
//! > :1                 open result 1
//! > :go roadmap        open a section directly
//! > :theme             toggle dark/light
//! > :print / :export   export the current view / all sections
//! > :quit
//! ```

use anyhow::Result;
use ecosystem_docs_core::{DocsApp, Screen};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::config::Config;
use crate::export::{run_markdown_export, MarkdownTarget};
use crate::print::{run_print, PrintOutcome};
use crate::render::TerminalRenderer;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Query(String),
    Select(usize),
    Go(String),
    Clear,
    Theme,
    Sections,
    Print,
    Export,
    Help,
    Refresh,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.trim_start().strip_prefix(':') else {
        if line.trim().is_empty() {
            return BrowseCommand::Refresh;
        }
        return BrowseCommand::Query(line.to_string());
    };

    let mut parts = rest.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim).unwrap_or("");

    if let Ok(n) = name.parse::<usize>() {
        return BrowseCommand::Select(n);
    }
    match name {
        "go" | "g" if !arg.is_empty() => BrowseCommand::Go(arg.to_string()),
        "clear" | "c" => BrowseCommand::Clear,
        "theme" | "t" => BrowseCommand::Theme,
        "sections" | "s" => BrowseCommand::Sections,
        "print" | "p" => BrowseCommand::Print,
        "export" | "e" => BrowseCommand::Export,
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(rest.trim().to_string()),
    }
}

const HELP: &str = "\
Type text to search (3+ characters). Commands:
  :N            open search result N
  :go SECTION   open a section
  :clear        clear the search
  :sections     list sections
  :theme        toggle dark/light
  :print        print the current section
  :export       export all sections as Markdown
  :quit         leave
";

/// Browse session state: the app plus display settings.
pub struct Session<'a> {
    app: DocsApp,
    config: &'a Config,
    color: bool,
}

impl<'a> Session<'a> {
    pub fn new(app: DocsApp, config: &'a Config, color: bool) -> Self {
        Self { app, config, color }
    }

    pub fn app(&self) -> &DocsApp {
        &self.app
    }

    fn renderer(&self) -> TerminalRenderer {
        let theme = self.app.state().theme;
        TerminalRenderer::new(theme.palette(), self.color, self.config.display.width)
    }

    fn show_screen(&self, out: &mut dyn Write) -> Result<()> {
        let screen = self.app.screen(self.config.compact());
        if let Screen::Content(_) = screen {
            let active = self.app.state().active_section;
            writeln!(out, "{}", self.renderer().render_sidebar(&active))?;
        }
        write!(out, "{}", self.renderer().render_screen(&screen))?;
        Ok(())
    }

    /// Handle one command. Returns `false` when the loop should stop.
    pub fn handle(&mut self, command: BrowseCommand, out: &mut dyn Write) -> Result<bool> {
        debug!(?command, "browse event");
        match command {
            BrowseCommand::Quit => return Ok(false),
            BrowseCommand::Query(q) => {
                self.app.set_query(&q);
                if !self.app.state().showing_results {
                    writeln!(
                        out,
                        "(type at least {} characters to search)",
                        self.app.params().min_query_len
                    )?;
                }
                self.show_screen(out)?;
            }
            BrowseCommand::Select(n) => {
                let picked = n.checked_sub(1).and_then(|i| self.app.select_result(i));
                match picked {
                    Some(_) => self.show_screen(out)?,
                    None => writeln!(out, "No result {}.", n)?,
                }
            }
            BrowseCommand::Go(section) => {
                self.app.navigate(&section);
                self.show_screen(out)?;
            }
            BrowseCommand::Clear => {
                self.app.clear_query();
                self.show_screen(out)?;
            }
            BrowseCommand::Theme => {
                self.app.toggle_theme();
                writeln!(out, "Theme: {}", self.app.state().theme)?;
            }
            BrowseCommand::Sections => {
                let active = self.app.state().active_section;
                write!(out, "{}", self.renderer().render_sidebar(&active))?;
            }
            BrowseCommand::Print => {
                let page = self.app.current_page(self.config.compact());
                let palette = self.app.state().theme.palette();
                match run_print(self.config, &page, palette) {
                    Ok(PrintOutcome::Printed) => writeln!(out, "Printed {}.", page.title)?,
                    Ok(PrintOutcome::Skipped) => {}
                    Err(e) => {
                        warn!(error = %e, "print failed");
                        writeln!(out, "Print failed: {:#}", e)?;
                    }
                }
            }
            BrowseCommand::Export => {
                let target = MarkdownTarget::Dir(self.config.export.output_dir.clone());
                match run_markdown_export(&target) {
                    Ok(Some(path)) => writeln!(out, "Exported to {}.", path.display())?,
                    Ok(None) => {}
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        writeln!(out, "Export failed: {:#}", e)?;
                    }
                }
            }
            BrowseCommand::Help => write!(out, "{}", HELP)?,
            BrowseCommand::Refresh => self.show_screen(out)?,
            BrowseCommand::Unknown(cmd) => writeln!(out, "Unknown command ':{}'. Try :help.", cmd)?,
        }
        Ok(true)
    }

    /// Read lines from `input` until EOF or `:quit`.
    pub fn run(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        self.show_screen(out)?;
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if !self.handle(parse_command(&line), out)? {
                break;
            }
        }
        Ok(())
    }
}

/// Run the browse loop on stdin/stdout.
pub fn run_browse(config: &Config, app: DocsApp) -> Result<()> {
    let color = config.display.color.enabled();
    let mut session = Session::new(app, config, color);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, DocsApp) {
        run_script_with(&Config::minimal(), script)
    }

    fn run_script_with(config: &Config, script: &str) -> (String, DocsApp) {
        let mut session = Session::new(DocsApp::default(), config, false);
        let mut out = Vec::new();
        session
            .run(&mut Cursor::new(script.as_bytes()), &mut out)
            .unwrap();
        let Session { app, .. } = session;
        (String::from_utf8(out).unwrap(), app)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("cortex ai\n"), BrowseCommand::Query("cortex ai".into()));
        assert_eq!(parse_command(":2"), BrowseCommand::Select(2));
        assert_eq!(parse_command(" :go  roadmap "), BrowseCommand::Go("roadmap".into()));
        assert_eq!(parse_command(":go"), BrowseCommand::Unknown("go".into()));
        assert_eq!(parse_command(":q"), BrowseCommand::Quit);
        assert_eq!(parse_command("   \n"), BrowseCommand::Refresh);
        assert_eq!(parse_command(":bogus x"), BrowseCommand::Unknown("bogus x".into()));
    }

    #[test]
    fn test_search_then_select() {
        let (out, app) = run_script("cortex ai\n:1\n:quit\n");
        assert!(out.contains("1. [10] Ecosystem Overview"));
        let state = app.state();
        assert_eq!(state.active_section, "overview");
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_short_query_hint() {
        let (out, app) = run_script(":go workflows\nte\n");
        assert!(out.contains("(type at least 3 characters to search)"));
        assert!(!app.state().showing_results);
        assert!(out.contains("Development Workflows"));
    }

    #[test]
    fn test_no_results_state() {
        let (out, _) = run_script("xyz123\n");
        assert!(out.contains("No results for \"xyz123\"."));
    }

    #[test]
    fn test_bad_selection_and_theme() {
        let (out, app) = run_script("roadmap\n:9\n:0\n:theme\n:theme\n");
        assert!(out.contains("No result 9."));
        assert!(out.contains("No result 0."));
        assert!(out.contains("Theme: light"));
        assert!(out.contains("Theme: dark"));
        assert_eq!(app.state().query, "roadmap");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_print_keeps_session_alive() {
        let mut config = Config::minimal();
        config.export.print_command = Some("false".to_string());
        let (out, app) = run_script_with(&config, ":print\n:go roadmap\n");
        assert!(out.contains("Print failed:"));
        assert!(out.contains("Roadmap"));
        assert_eq!(app.state().active_section, "roadmap");
    }

    #[test]
    fn test_failed_export_keeps_session_alive() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let mut config = Config::minimal();
        config.export.output_dir = blocker.path().join("out");
        let (out, app) = run_script_with(&config, ":export\n:go workflows\n");
        assert!(out.contains("Export failed:"));
        assert_eq!(app.state().active_section, "workflows");
    }

    #[test]
    fn test_eof_ends_loop() {
        let (out, _) = run_script("");
        assert!(out.starts_with("➜ overview"));
        assert!(out.ends_with("> "));
    }
}
