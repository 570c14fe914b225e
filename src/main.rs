//! tagmend - A TUI for AI-assisted HTML/CSS editing
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

const STARTER_HTML: &str = "<h1>Welcome</h1>\n<p>Edit this markup, then press Ctrl+R for a line-by-line review.</p>";
const STARTER_CSS: &str = "h1 {\n  color: #333333;\n}\n\np {\n  font-family: sans-serif;\n}";

/// tagmend - A TUI for AI-assisted HTML/CSS editing
#[derive(Parser, Debug)]
#[command(name = "tagmend")]
#[command(about = "A TUI for AI-assisted HTML/CSS editing", long_about = None)]
struct Args {
    /// HTML file to load into the left pane
    #[arg(value_name = "HTML_FILE")]
    html: Option<PathBuf>,

    /// CSS file to load into the right pane
    #[arg(value_name = "CSS_FILE")]
    css: Option<PathBuf>,

    /// Override the collaborator model from config
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // File logging only; stdout belongs to the TUI
    if let Err(e) = tagmend_core::logging::init() {
        warn!("failed to initialize logging: {e}");
    }

    let html = match load_or_default(args.html.as_deref(), STARTER_HTML) {
        Ok(text) => text,
        Err((path, e)) => {
            eprintln!("Cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };
    let css = match load_or_default(args.css.as_deref(), STARTER_CSS) {
        Ok(text) => text,
        Err((path, e)) => {
            eprintln!("Cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let mut settings = tagmend_app::config::load_settings();
    if let Some(model) = args.model {
        settings.collaborator.model = model;
    }

    tagmend_tui::run(html, css, settings).await?;
    Ok(())
}

fn load_or_default(
    path: Option<&std::path::Path>,
    default: &str,
) -> Result<String, (PathBuf, std::io::Error)> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| (p.to_path_buf(), e)),
        None => Ok(default.to_string()),
    }
}
