use crate::command::Command;

/// Deepest command reached by the leading tokens of an argument vector.
pub(crate) struct Resolution<'c, 'a, S> {
    pub command: &'c Command,
    pub invocation: Vec<String>,
    pub rest: &'a [S],
}

/// Base name of the invoked program: `~/bin/git` and `./git` both yield `git`.
pub(crate) fn program_name(path: &str) -> &str {
    let is_separator = |c: char| c == '/' || c == '\\';
    let path = path.trim_end_matches(is_separator);
    path.rsplit(is_separator).next().unwrap_or(path)
}

/// Walk `argv[1..]` down the tree for as long as tokens name subcommands.
pub(crate) fn resolve<'c, 'a, S: AsRef<str>>(
    app: &'c Command,
    argv: &'a [S],
) -> Resolution<'c, 'a, S> {
    let (program, tokens) = match argv.split_first() {
        Some((program, tokens)) => (program_name(program.as_ref()), tokens),
        None => ("", argv),
    };

    let mut invocation = vec![program.to_string()];
    let mut command = app;
    let mut consumed = 0;
    for token in tokens {
        let Some(child) = command.command(token.as_ref()) else {
            break;
        };
        invocation.push(child.name().to_string());
        command = child;
        consumed += 1;
    }

    tracing::debug!(path = ?invocation, "resolved command");
    Resolution {
        command,
        invocation,
        rest: &tokens[consumed..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Command {
        Command::new("", "git tool")
            .with_command(Command::new("checkout", "").with_shortcut("co"))
            .with_command(
                Command::new("remote", "").with_command(Command::new("add", "")),
            )
    }

    #[test]
    fn program_name_strips_directories() {
        assert_eq!(program_name("~/some/path/git"), "git");
        assert_eq!(program_name("./git"), "git");
        assert_eq!(program_name("git"), "git");
        assert_eq!(program_name(r"C:\tools\git.exe"), "git.exe");
    }

    #[test]
    fn program_name_ignores_trailing_separators() {
        assert_eq!(program_name("dir/"), "dir");
        assert_eq!(program_name("/opt/tools/git//"), "git");
        assert_eq!(program_name(r"tools\git\"), "git");
    }

    #[test]
    fn descends_through_nested_commands() {
        let app = app();
        let argv = ["git", "remote", "add", "origin"];
        let r = resolve(&app, &argv);
        assert_eq!(r.invocation, ["git", "remote", "add"]);
        assert_eq!(r.command.name(), "add");
        assert_eq!(r.rest, ["origin"]);
    }

    #[test]
    fn shortcut_records_canonical_name() {
        let app = app();
        let argv = ["./git", "co", "dev"];
        let r = resolve(&app, &argv);
        assert_eq!(r.invocation, ["git", "checkout"]);
        assert_eq!(r.rest, ["dev"]);
    }

    #[test]
    fn stops_at_first_unknown_token() {
        let app = app();
        let argv = ["git", "foo", "checkout"];
        let r = resolve(&app, &argv);
        assert_eq!(r.invocation, ["git"]);
        assert_eq!(r.command.name(), "");
        assert_eq!(r.rest, ["foo", "checkout"]);
    }

    #[test]
    fn leaf_command_stops_descent() {
        let app = app();
        let argv = ["git", "checkout", "checkout"];
        let r = resolve(&app, &argv);
        assert_eq!(r.invocation, ["git", "checkout"]);
        assert_eq!(r.rest, ["checkout"]);
    }

    #[test]
    fn empty_argv() {
        let app = app();
        let argv: [&str; 0] = [];
        let r = resolve(&app, &argv);
        assert_eq!(r.invocation, [""]);
        assert!(r.rest.is_empty());
    }
}
