//! Print adapter.
//!
//! Snapshots a page as HTML, opens a [`PrintSurface`], writes the markup
//! with a print stylesheet that overrides the dark palette, asks the surface
//! to print, and always closes the surface afterward.
//!
//! A page with no content is the "missing render target" case: the export is
//! skipped without an error.

use anyhow::{Context, Result};
use ecosystem_docs_core::{Block, Page, Palette};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use crate::config::{Config, ExportConfig};

/// Fixed name of the file handed to the print command.
pub const PRINT_FILENAME: &str = "ai-ecosystem-print.html";

/// Forces black-on-white regardless of the on-screen theme.
pub const PRINT_STYLESHEET: &str = "\
@media print, screen {
  html, body { background: #ffffff !important; color: #000000 !important; }
  * { background: transparent !important; color: #000000 !important; box-shadow: none !important; }
  a { text-decoration: underline; }
  pre { border: 1px solid #999999; white-space: pre-wrap; }
  .card { border: 1px solid #999999; page-break-inside: avoid; }
}
";

/// Result of a print export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The surface was opened and printed.
    Printed,
    /// Nothing to print; the surface was never opened.
    Skipped,
}

/// A transient output surface for printing.
///
/// The adapter calls `open`, then `print`, then `close`; `close` runs even
/// when `print` fails.
pub trait PrintSurface {
    fn open(&mut self, html: &str) -> Result<()>;
    fn print(&mut self) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

/// Render `page` as a standalone HTML document.
///
/// `palette` is the on-screen palette; its colors appear in the document but
/// are overridden by [`PRINT_STYLESHEET`].
pub fn page_to_html(page: &Page, palette: &Palette) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape(page.title)));
    body.push_str(&format!("<p class=\"subtitle\">{}</p>\n", escape(page.subtitle)));
    for block in &page.blocks {
        match block {
            Block::Heading(t) => body.push_str(&format!("<h2>{}</h2>\n", escape(t))),
            Block::Paragraph(t) => body.push_str(&format!("<p>{}</p>\n", escape(t))),
            Block::Bullets(items) => {
                body.push_str("<ul>\n");
                for item in items {
                    body.push_str(&format!("  <li>{}</li>\n", escape(item)));
                }
                body.push_str("</ul>\n");
            }
            Block::Card {
                title,
                tagline,
                points,
            } => {
                body.push_str("<div class=\"card\">\n");
                body.push_str(&format!(
                    "  <h3>{} <small>{}</small></h3>\n  <ul>\n",
                    escape(title),
                    escape(tagline)
                ));
                for point in points {
                    body.push_str(&format!("    <li>{}</li>\n", escape(point)));
                }
                body.push_str("  </ul>\n</div>\n");
            }
            Block::Preformatted(t) => body.push_str(&format!("<pre>{}</pre>\n", escape(t))),
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\nbody {{ background: {bg}; color: {fg}; font-family: sans-serif; }}\n\
         h1, h2, h3 {{ color: {accent}; }}\n</style>\n<style media=\"print\">\n{print}</style>\n\
         </head>\n<body>\n<main id=\"content\">\n{body}</main>\n</body>\n</html>\n",
        title = escape(page.title),
        bg = palette.css_background,
        fg = palette.css_text,
        accent = palette.css_accent,
        print = PRINT_STYLESHEET,
        body = body,
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Run the print flow for `page` on `surface`.
pub fn print_page(
    page: &Page,
    palette: &Palette,
    surface: &mut dyn PrintSurface,
) -> Result<PrintOutcome> {
    if page.is_empty() {
        debug!(section = page.section_id, "nothing to print, skipping");
        return Ok(PrintOutcome::Skipped);
    }

    let html = page_to_html(page, palette);
    surface.open(&html)?;
    let printed = surface.print();
    let closed = surface.close();

    if let Err(e) = &printed {
        warn!(section = page.section_id, error = %e, "print failed");
    }
    printed?;
    closed?;
    Ok(PrintOutcome::Printed)
}

/// A print surface backed by an HTML file.
///
/// With no `print_command`, the file is left in place as the printable
/// output. With a command, the command is run with the file path appended
/// and a temporary file is removed on close.
pub struct FileSurface {
    path: PathBuf,
    print_command: Option<String>,
    temporary: bool,
    _tempdir: Option<tempfile::TempDir>,
    opened: bool,
}

impl FileSurface {
    /// Write into `dir`, keeping the file after close.
    pub fn in_dir(dir: &Path, print_command: Option<String>) -> Self {
        Self {
            path: dir.join(PRINT_FILENAME),
            print_command,
            temporary: false,
            _tempdir: None,
            opened: false,
        }
    }

    /// Write into a fresh temporary directory, removed on close.
    pub fn temporary(print_command: String) -> Result<Self> {
        let dir = tempfile::tempdir().context("Failed to create temporary print directory")?;
        Ok(Self {
            path: dir.path().join(PRINT_FILENAME),
            print_command: Some(print_command),
            temporary: true,
            _tempdir: Some(dir),
            opened: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintSurface for FileSurface {
    fn open(&mut self, html: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, html)
            .with_context(|| format!("Failed to write print file: {}", self.path.display()))?;
        self.opened = true;
        Ok(())
    }

    fn print(&mut self) -> Result<()> {
        let Some(cmd) = &self.print_command else {
            info!(path = %self.path.display(), "print view written");
            return Ok(());
        };
        let mut parts = cmd.split_whitespace();
        let program = parts
            .next()
            .context("export.print_command is empty")?;
        let status = Command::new(program)
            .args(parts)
            .arg(&self.path)
            .status()
            .with_context(|| format!("Failed to run print command: {}", cmd))?;
        if !status.success() {
            anyhow::bail!("print command exited with {}", status);
        }
        info!(command = %cmd, "sent to printer");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.temporary && self.opened && self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        self.opened = false;
        Ok(())
    }
}

/// The surface configured by `[export]`.
pub fn surface_for(config: &ExportConfig) -> Result<FileSurface> {
    match &config.print_command {
        Some(cmd) => FileSurface::temporary(cmd.clone()),
        None => Ok(FileSurface::in_dir(&config.output_dir, None)),
    }
}

/// Print `page` using the configured surface.
pub fn run_print(config: &Config, page: &Page, palette: &Palette) -> Result<PrintOutcome> {
    let mut surface = surface_for(&config.export)?;
    let outcome = print_page(page, palette, &mut surface)?;
    if outcome == PrintOutcome::Printed && !surface.temporary {
        eprintln!("Print view written to {}", surface.path().display());
    }
    Ok(outcome)
}
