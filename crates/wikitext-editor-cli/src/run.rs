use std::io::Read;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use wikitext_editor_config::Config;
use wikitext_editor_engine::{Document, EditorSession, FormatAction};

/// One invocation's worth of work, decoupled from argument parsing.
#[derive(Debug, Default)]
pub struct Request {
    pub selection: Option<Range<usize>>,
    pub actions: Vec<String>,
    pub show_state: bool,
}

pub fn read_input(file: Option<&Path>, config: &Config) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            let path = config.resolve(path);
            log::debug!("Reading page {}", path.display());
            std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// `heading` with no level picks up the configured default.
pub fn parse_action(name: &str, config: &Config) -> Result<FormatAction> {
    if name.trim().eq_ignore_ascii_case("heading") {
        return Ok(FormatAction::Heading(config.default_heading_level));
    }
    name.parse::<FormatAction>()
        .with_context(|| format!("Invalid action {name:?}"))
}

/// Apply the requested actions and render what should be printed.
pub fn run(input: &[u8], request: &Request, config: &Config) -> Result<String> {
    // Resolve every action up front so a typo fails before any edit
    let actions = request
        .actions
        .iter()
        .map(|name| parse_action(name, config))
        .collect::<Result<Vec<_>>>()?;

    let mut session = EditorSession::new(Document::from_bytes(input)?);
    if let Some(selection) = request.selection.clone() {
        session.set_selection(selection);
    }

    for action in actions {
        let outcome = session.apply(action);
        if let Some(err) = outcome.skipped {
            log::warn!("{action} skipped: {err}");
        }
    }

    let snapshot = session.snapshot();
    let mut out = if config.mark_selection {
        snapshot.marked()
    } else {
        snapshot.text.clone()
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    if request.show_state {
        out.push('\n');
        out.push_str(&toml::to_string_pretty(&snapshot.state)?);
    }
    Ok(out)
}
