//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! serialized `LintResult`: tool name, problems, and a summary.

use crate::models::{LintResult, Problem};
use crate::utils::{colors_enabled, rel_to_wd};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && colors_enabled()
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: &str) -> Result<(), serde_json::Error> {
    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&compose_lint_json(res)?)?),
        _ => {
            let color = use_colors(output);
            for p in &res.problems {
                println!("{}", human_line(p, &res.tool, color));
            }
            let summary = format!(
                "— Summary — problems={} files={} files_with_problems={}",
                res.summary.problems, res.summary.files, res.summary.files_with_problems
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{summary}");
            }
        }
    }
    Ok(())
}

fn human_line(p: &Problem, tool: &str, color: bool) -> String {
    let location = format!("{}:{}", rel_to_wd(Path::new(&p.file)), p.line);
    if color {
        format!(
            "{} {} ❲{}❳ — {}",
            "▲".yellow(),
            location.bold(),
            tool,
            p.body
        )
    } else {
        format!("▲ {location} ❲{tool}❳ — {}", p.body)
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> Result<JsonVal, serde_json::Error> {
    serde_json::to_value(res)
}
