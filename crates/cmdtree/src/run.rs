use std::fmt;
use std::io::{self, Write};

use crate::command::Command;
use crate::parse::parse_command;

/// Exit code for an invocation rejected by the parser.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for a malformed command tree.
pub const EXIT_SOFTWARE: i32 = 70;

/// Parse `argv` and dispatch to the matched command's action.
///
/// - malformed tree: message on stderr, [`EXIT_SOFTWARE`]
/// - parse failure: `<invocation>: <message>` on stderr, [`EXIT_USAGE`]
/// - success (help included): the action's exit code, or 0 without an action
pub fn run<S: AsRef<str>>(app: &Command, argv: &[S]) -> i32 {
    run_with(app, argv, &mut io::stderr().lock())
}

/// [`run`] writing diagnostics to `err` instead of stderr.
pub fn run_with<S: AsRef<str>, W: Write>(app: &Command, argv: &[S], err: &mut W) -> i32 {
    if let Err(e) = app.check() {
        report(err, format_args!("{e}"));
        return EXIT_SOFTWARE;
    }

    let (command, result) = parse_command(app, argv);
    match result {
        Ok(parsed) => match command.action() {
            Some(action) => action(&parsed),
            None => {
                tracing::debug!(command = command.name(), "no action registered");
                0
            }
        },
        Err(failure) => {
            report(
                err,
                format_args!(
                    "{}: {}",
                    failure.partial().invocation().join(" "),
                    failure.error()
                ),
            );
            EXIT_USAGE
        }
    }
}

fn report<W: Write>(err: &mut W, message: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(err, "{message}") {
        tracing::warn!(error = %e, "failed to write diagnostic");
    }
}
