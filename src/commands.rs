//! Command table and dispatch
//!
//! The vocabulary is a closed, static table built once at startup. Dispatch
//! is a pure function of its input for every command except the not-found
//! path, which draws a templated message uniformly at random from the pool
//! in [`content`]; `dispatch_with_rng` exposes that seam for tests.

use once_cell::sync::Lazy;
use rand::Rng;

use crate::content;
use crate::line::Line;

/// What a recognized command does. The set is closed: adding a command means
/// adding a variant here and a row to [`COMMANDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    ListFiles,
    About,
    Projects,
    Blog,
    Social,
    Connect,
    Resume,
    Clear,
    ToggleMode,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub action: Action,
}

/// The built-in command set, in help display order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        aliases: &[],
        description: "Show this help message",
        action: Action::Help,
    },
    CommandSpec {
        name: "ls",
        aliases: &[],
        description: "List available information",
        action: Action::ListFiles,
    },
    CommandSpec {
        name: "about",
        aliases: &["hello"],
        description: "Show information about me",
        action: Action::About,
    },
    CommandSpec {
        name: "blog",
        aliases: &[],
        description: "View the blog",
        action: Action::Blog,
    },
    CommandSpec {
        name: "projects",
        aliases: &[],
        description: "View my personal projects",
        action: Action::Projects,
    },
    CommandSpec {
        name: "social",
        aliases: &[],
        description: "Show social media links",
        action: Action::Social,
    },
    CommandSpec {
        name: "connect",
        aliases: &[],
        description: "Show how to connect for 1:1 sessions",
        action: Action::Connect,
    },
    CommandSpec {
        name: "resume",
        aliases: &[],
        description: "View my resume",
        action: Action::Resume,
    },
    CommandSpec {
        name: "clear",
        aliases: &[],
        description: "Clear the screen",
        action: Action::Clear,
    },
    CommandSpec {
        name: "mode",
        aliases: &[],
        description: "Toggle day/night mode",
        action: Action::ToggleMode,
    },
];

// help and ls never change after startup, so both lines are built once.
static HELP_LINE: Lazy<Line> = Lazy::new(|| {
    let listing = COMMANDS
        .iter()
        .map(|spec| format!("{} - {}", spec.name, spec.description))
        .collect::<Vec<_>>()
        .join("     ");
    Line::response_text(format!("Available commands:\n  {listing}"))
});

static LS_LINE: Lazy<Line> = Lazy::new(|| Line::response_text(content::FILE_LISTING));

/// Outcome of dispatching one submitted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Append these lines to the transcript.
    Lines(Vec<Line>),
    /// Reset the transcript to the session banner.
    Clear,
    /// Invoke the host-injected mode-toggle callback; no transcript output.
    ToggleMode,
}

/// Split raw input into a command token and argument tokens.
///
/// The whole string is trimmed and lower-cased before splitting on runs of
/// whitespace; blank input yields an empty command token. Arguments are
/// accepted syntactically but every built-in command ignores them.
pub fn parse(raw: &str) -> (String, Vec<String>) {
    let lowered = raw.trim().to_lowercase();
    let mut tokens = lowered.split_whitespace().map(str::to_owned);
    let command = tokens.next().unwrap_or_default();
    (command, tokens.collect())
}

/// Look up a command by name or alias.
pub fn find(command: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == command || spec.aliases.contains(&command))
}

/// Dispatch one submitted input line.
pub fn dispatch(raw: &str) -> Reply {
    dispatch_with_rng(raw, &mut rand::rng())
}

/// Dispatch with an explicit RNG for the not-found path.
///
/// Total over its input domain: every string maps to exactly one outcome.
pub fn dispatch_with_rng<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> Reply {
    let (command, _args) = parse(raw);
    match find(&command) {
        Some(spec) => match spec.action {
            Action::Help => Reply::Lines(vec![HELP_LINE.clone()]),
            Action::ListFiles => Reply::Lines(vec![LS_LINE.clone()]),
            Action::About => Reply::Lines(vec![content::about()]),
            Action::Projects => Reply::Lines(vec![content::projects()]),
            Action::Blog => Reply::Lines(vec![content::blog()]),
            Action::Social => Reply::Lines(vec![content::social()]),
            Action::Connect => Reply::Lines(vec![content::connect()]),
            Action::Resume => Reply::Lines(vec![content::resume()]),
            Action::Clear => Reply::Clear,
            Action::ToggleMode => Reply::ToggleMode,
        },
        None => Reply::Lines(vec![not_found_line(&command, rng)]),
    }
}

/// Build the not-found line for an unrecognized (lower-cased) command token.
///
/// The template is drawn uniformly over the full pool on every call; repeats
/// are allowed.
pub fn not_found_line<R: Rng + ?Sized>(command: &str, rng: &mut R) -> Line {
    let pool = content::NOT_FOUND_RESPONSES;
    let template = pool[rng.random_range(0..pool.len())];
    Line::error_text(template.replace("${command}", command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn response_lines(reply: Reply) -> Vec<Line> {
        match reply {
            Reply::Lines(lines) => lines,
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_splits_on_whitespace_runs() {
        let (command, args) = parse("  help   me \t now ");
        assert_eq!(command, "help");
        assert_eq!(args, vec!["me", "now"]);
    }

    #[test]
    fn test_parse_lowercases_everything() {
        let (command, args) = parse("About ME");
        assert_eq!(command, "about");
        assert_eq!(args, vec!["me"]);
    }

    #[test]
    fn test_parse_blank_input_yields_empty_command() {
        let (command, args) = parse("   ");
        assert_eq!(command, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_every_command_name_resolves() {
        for spec in COMMANDS {
            assert_eq!(find(spec.name).unwrap().action, spec.action);
        }
    }

    #[test]
    fn test_hello_is_an_alias_for_about() {
        assert_eq!(find("hello").unwrap().action, Action::About);
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        for raw in ["HELP", "Help", "hElP"] {
            assert_eq!(dispatch_with_rng(raw, &mut rng()), dispatch_with_rng("help", &mut rng()));
        }
    }

    #[test]
    fn test_known_commands_are_deterministic() {
        for spec in COMMANDS {
            let first = dispatch_with_rng(spec.name, &mut rng());
            let second = dispatch_with_rng(spec.name, &mut rand::rng());
            assert_eq!(first, second, "{} must ignore the rng", spec.name);
        }
    }

    #[test]
    fn test_arguments_are_ignored() {
        assert_eq!(
            dispatch_with_rng("resume --verbose now", &mut rng()),
            dispatch_with_rng("resume", &mut rng())
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let lines = response_lines(dispatch_with_rng("help", &mut rng()));
        assert_eq!(lines.len(), 1);
        let text = lines[0].plain_text();
        for spec in COMMANDS {
            assert!(text.contains(spec.name), "help misses {}", spec.name);
            assert!(text.contains(spec.description));
        }
    }

    #[test]
    fn test_ls_lists_file_names_only() {
        let lines = response_lines(dispatch_with_rng("ls", &mut rng()));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].plain_text(), content::FILE_LISTING);
    }

    #[test]
    fn test_clear_and_mode_produce_no_lines() {
        assert_eq!(dispatch_with_rng("clear", &mut rng()), Reply::Clear);
        assert_eq!(dispatch_with_rng("mode", &mut rng()), Reply::ToggleMode);
    }

    #[test]
    fn test_unknown_command_yields_one_error_line() {
        let lines = response_lines(dispatch_with_rng("xyzzy", &mut rng()));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind(), LineKind::Error);
        let text = lines[0].plain_text();
        assert!(text.contains("xyzzy"));
        assert!(!text.contains("${command}"));
    }

    #[test]
    fn test_unknown_command_matches_a_pool_template() {
        let lines = response_lines(dispatch_with_rng("frobnicate", &mut rng()));
        let text = lines[0].plain_text();
        let matched = content::NOT_FOUND_RESPONSES
            .iter()
            .any(|template| template.replace("${command}", "frobnicate") == text);
        assert!(matched, "not in pool: {text}");
    }

    #[test]
    fn test_blank_input_routes_through_not_found() {
        let lines = response_lines(dispatch_with_rng("   ", &mut rng()));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind(), LineKind::Error);
        let text = lines[0].plain_text();
        let matched = content::NOT_FOUND_RESPONSES
            .iter()
            .any(|template| template.replace("${command}", "") == text);
        assert!(matched, "not in pool: {text}");
    }

    #[test]
    fn test_not_found_token_is_lowercased_first_token() {
        let lines = response_lines(dispatch_with_rng("XyZZy again", &mut rng()));
        assert!(lines[0].plain_text().contains("xyzzy"));
    }

    #[test]
    fn test_pool_selection_covers_full_range() {
        // With enough draws every template must show up at least once.
        let mut rng = rng();
        let mut seen = vec![false; content::NOT_FOUND_RESPONSES.len()];
        for _ in 0..1000 {
            let lines = response_lines(dispatch_with_rng("nope", &mut rng));
            let text = lines[0].plain_text();
            for (i, template) in content::NOT_FOUND_RESPONSES.iter().enumerate() {
                if template.replace("${command}", "nope") == text {
                    seen[i] = true;
                }
            }
        }
        assert!(seen.iter().all(|s| *s), "unreached templates: {seen:?}");
    }
}
