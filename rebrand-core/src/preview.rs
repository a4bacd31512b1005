use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::path::PathBuf;

use crate::operations::SetupPlan;
use crate::output::display_path;

fn heading(output: &mut String, text: &str, use_color: bool) {
    if use_color {
        writeln!(output, "{}", AnsiColor::Yellow.bold().paint(text)).unwrap();
    } else {
        writeln!(output, "{}", text).unwrap();
    }
}

/// Render a setup plan for `--dry-run`.
pub fn render_plan(plan: &SetupPlan, would_prune: &[PathBuf], use_color: bool) -> String {
    let root = plan.root.as_path();
    let mut output = String::new();

    let title = format!(
        "Setup plan: {} -> {}",
        plan.placeholder.title, plan.variants.title
    );
    if use_color {
        writeln!(output, "{}", AnsiColor::Cyan.bold().paint(title)).unwrap();
    } else {
        writeln!(output, "{}", title).unwrap();
    }

    if !plan.renames.is_empty() {
        writeln!(output).unwrap();
        heading(&mut output, "Renames:", use_color);
        for rename in &plan.renames {
            let from = display_path(root, &rename.path);
            let to = display_path(root, &rename.new_path);
            if use_color {
                writeln!(
                    output,
                    "  {} -> {}",
                    AnsiColor::Red.paint(from),
                    AnsiColor::Green.paint(to)
                )
                .unwrap();
            } else {
                writeln!(output, "  {} -> {}", from, to).unwrap();
            }
        }
    }

    if !plan.edits.is_empty() {
        writeln!(output).unwrap();
        heading(&mut output, "Content:", use_color);
        for edit in &plan.edits {
            let path = display_path(root, &edit.path);
            let noun = if edit.replacements == 1 {
                "replacement"
            } else {
                "replacements"
            };
            writeln!(output, "  {}: {} {}", path, edit.replacements, noun).unwrap();
        }
    }

    if !would_prune.is_empty() {
        writeln!(output).unwrap();
        heading(&mut output, "Remove:", use_color);
        for path in would_prune {
            writeln!(output, "  {}", display_path(root, path)).unwrap();
        }
    }

    output
}
