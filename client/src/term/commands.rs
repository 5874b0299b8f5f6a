//! The terminal's fixed command table and dispatcher.
//!
//! A closed, non-Turing-complete interpreter: each entered line is split
//! into a command token and an argument remainder, and the token is looked
//! up in a fixed table. No variables, no control flow, no user-defined
//! commands. `clear` and `matrix` return structural outputs because they
//! mutate the panel rather than print.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use crate::content;
use crate::term::calc;

/// What executing a line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text to append to the transcript.
    Text(String),
    /// Empty the transcript.
    Clear,
    /// Invert the matrix visual-mode flag.
    ToggleMatrix,
}

/// Names shown by `help`, in display order.
const COMMANDS: &[(&str, &str)] = &[
    ("help", "list available commands"),
    ("about", "who runs this site"),
    ("projects", "numbered list of projects"),
    ("skills", "skill categories"),
    ("contact", "how to reach me"),
    ("whoami", "you, probably"),
    ("calc", "evaluate an arithmetic expression, e.g. calc 2*(3+4)"),
    ("matrix", "toggle the green rain"),
    ("clear", "clear the terminal"),
];

/// Resolve one entered line.
#[must_use]
pub fn run(line: &str) -> CommandOutput {
    let trimmed = line.trim();
    let (command, args) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "help" => CommandOutput::Text(help_text()),
        "about" => CommandOutput::Text(format!("{} — {}\n{}", content::SITE_NAME, content::TAGLINE, content::BIO)),
        "projects" => CommandOutput::Text(projects_text()),
        "skills" => CommandOutput::Text(skills_text()),
        "contact" => CommandOutput::Text(format!("email: {}\ngithub: {}", content::CONTACT_EMAIL, content::GITHUB_USER)),
        "whoami" => CommandOutput::Text("guest".into()),
        "calc" => CommandOutput::Text(calc::evaluate_line(args)),
        "matrix" => CommandOutput::ToggleMatrix,
        "clear" => CommandOutput::Clear,
        other => CommandOutput::Text(format!("command not found: {other}")),
    }
}

fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|(name, blurb)| format!("{name:<10} {blurb}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn projects_text() -> String {
    content::PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {} — {}", i + 1, p.name, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn skills_text() -> String {
    content::SKILLS
        .iter()
        .map(|group| {
            let names = group
                .skills
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {names}", group.category)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
