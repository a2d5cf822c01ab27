use std::collections::BTreeMap;

use crate::classify::{self, Outcome, Tokens};
use crate::command::{Command, HELP_NAME};
use crate::error::ParseFailure;
use crate::parsed::Parsed;
use crate::resolve;
use crate::validate;

/// Parse `argv` against the command tree rooted at `app`.
///
/// `argv[0]` is the program path and only contributes its base name to the
/// invocation. On failure the returned [`ParseFailure`] carries whatever was
/// understood before the failing step.
pub fn parse<S: AsRef<str>>(app: &Command, argv: &[S]) -> Result<Parsed, ParseFailure> {
    parse_command(app, argv).1
}

/// Like [`parse`], also returning the command the invocation resolved to.
pub(crate) fn parse_command<'c, S: AsRef<str>>(
    app: &'c Command,
    argv: &[S],
) -> (&'c Command, Result<Parsed, ParseFailure>) {
    let resolved = resolve::resolve(app, argv);
    let command = resolved.command;
    let invocation = resolved.invocation;

    let result = match classify::classify(command, resolved.rest) {
        Outcome::Help => {
            tracing::debug!("help requested, skipping validation");
            let options = BTreeMap::from([(HELP_NAME.to_string(), "true".to_string())]);
            Ok(Parsed::new(invocation, Vec::new(), options))
        }
        Outcome::Failed(error, Tokens { args, options }) => {
            Err(ParseFailure::new(error, Parsed::new(invocation, args, options)))
        }
        Outcome::Finished(Tokens { args, options }) => {
            match validate::validate(command, &args, &options) {
                Ok(()) => Ok(Parsed::new(invocation, args, options)),
                Err(error) => Err(ParseFailure::new(error, Parsed::new(invocation, args, options))),
            }
        }
    };

    if let Err(failure) = &result {
        tracing::debug!(error = %failure.error(), "parse failed");
    }
    (command, result)
}
