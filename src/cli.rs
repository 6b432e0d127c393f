#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{io::Read, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;
use tabled::Table;

use crate::{readability, types::Report};

/// Reads the text to grade from `file`, or from `stdin` when `file` is absent
/// or `-`.
pub fn read_input(file: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        _ => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Could not read text from stdin")?;
            Ok(text)
        }
    }
}

/// Grades `text` and renders its report, as pretty JSON or as a table
/// followed by the result line.
pub fn render_score(text: &str, json: bool) -> Result<String> {
    let assessment = readability::assess(text)?;
    let report = Report::from(&assessment);

    if json {
        return serde_json::to_string_pretty(&report).context("Could not serialize report");
    }

    let result = if assessment.is_too_short() {
        report.result.red().to_string()
    } else {
        format!("Grade level: {}", report.result.bold().green())
    };
    Ok(format!("{}\n{result}", Table::new([&report])))
}

/// Implements `fkgrade score`: reads the input and renders its report.
pub fn run_score(file: Option<&Path>, stdin: impl Read, json: bool) -> Result<String> {
    let text = read_input(file, stdin)?;
    render_score(&text, json)
}
