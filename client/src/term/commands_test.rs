use super::*;

fn text(output: CommandOutput) -> String {
    match output {
        CommandOutput::Text(t) => t,
        other => panic!("expected text output, got {other:?}"),
    }
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn help_lists_every_command() {
    let out = text(run("help"));
    for (name, _) in COMMANDS {
        assert!(out.contains(name), "help output missing {name}");
    }
}

#[test]
fn unknown_command_reports_not_found() {
    assert_eq!(text(run("frobnicate")), "command not found: frobnicate");
}

#[test]
fn leading_whitespace_is_ignored() {
    assert_eq!(text(run("   whoami  ")), "guest");
}

#[test]
fn clear_is_structural() {
    assert_eq!(run("clear"), CommandOutput::Clear);
}

#[test]
fn matrix_is_structural() {
    assert_eq!(run("matrix"), CommandOutput::ToggleMatrix);
}

// =============================================================================
// Content-backed commands
// =============================================================================

#[test]
fn projects_output_is_numbered_and_matches_content() {
    let out = text(run("projects"));
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), crate::content::PROJECTS.len());
    for (i, project) in crate::content::PROJECTS.iter().enumerate() {
        assert!(lines[i].starts_with(&format!("{}. ", i + 1)));
        assert!(lines[i].contains(project.name));
    }
}

#[test]
fn skills_output_names_each_category() {
    let out = text(run("skills"));
    for group in crate::content::SKILLS {
        assert!(out.contains(group.category));
    }
}

// =============================================================================
// calc passthrough
// =============================================================================

#[test]
fn calc_evaluates_arguments() {
    assert_eq!(text(run("calc 2*5")), "= 10");
}

#[test]
fn calc_with_no_argument_is_an_error_line() {
    assert!(text(run("calc")).starts_with("Error:"));
}

#[test]
fn calc_division_by_zero_is_an_error_line() {
    assert!(text(run("calc 1/0")).starts_with("Error:"));
}

// =============================================================================
// End-to-end transcript scenario
// =============================================================================

#[test]
fn help_projects_matrix_scenario() {
    use crate::state::terminal::TerminalState;

    let mut term = TerminalState::default();

    for line in ["help", "projects", "matrix"] {
        match run(line) {
            CommandOutput::Text(out) => term.push(line.into(), out),
            CommandOutput::Clear => term.clear(),
            CommandOutput::ToggleMatrix => {
                term.matrix_mode = !term.matrix_mode;
                term.push(line.into(), format!("matrix mode {}", if term.matrix_mode { "on" } else { "off" }));
            }
        }
    }

    assert_eq!(term.entries.len(), 3);
    assert!(term.entries[0].output.contains("calc"));
    assert!(term.entries[1].output.starts_with("1. "));
    assert!(term.matrix_mode, "matrix flag must invert");
}
