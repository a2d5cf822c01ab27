//! Declarative command tree argument parsing.
//!
//! A command tree is declared once with builders and then matched against raw
//! argument vectors:
//! - nested subcommands, selected by name or shortcut
//! - typed positional arguments with an optional variadic tail
//! - typed options as `--name`, `--name=value`, `-c value` and bundles `-abc`
//! - `--help`/`-h` short-circuits validation
//!
//! ```
//! use cmdtree::{ArgDef, Command, OptDef, ValueType};
//!
//! let app = cmdtree::app("git tool").with_command(
//!     Command::new("checkout", "checkout a branch or revision")
//!         .with_shortcut("co")
//!         .with_arg(ArgDef::new("branch"))
//!         .with_option(OptDef::new("branch", "Create branch").with_char('b').with_type(ValueType::Bool))
//!         .with_option(OptDef::new("fallback", "Fallback revision").with_char('f')),
//! );
//!
//! let parsed = cmdtree::parse(&app, &["/usr/bin/git", "co", "-bf", "main", "dev"]).unwrap();
//! assert_eq!(parsed.invocation(), ["git", "checkout"]);
//! assert_eq!(parsed.args(), ["dev"]);
//! assert_eq!(parsed.option("fallback"), Some("main"));
//! assert!(parsed.flag("branch"));
//!
//! let failure = cmdtree::parse(&app, &["git", "checkout", "-x"]).unwrap_err();
//! assert_eq!(failure.to_string(), "unknown flag -x");
//! ```

mod classify;
mod command;
mod error;
mod parse;
mod parsed;
mod resolve;
mod run;
mod validate;
mod value;

pub use command::{Action, ArgDef, Command, OptDef};
pub use error::{DeclarationError, ParseError, ParseFailure};
pub use parse::parse;
pub use parsed::Parsed;
pub use run::{EXIT_SOFTWARE, EXIT_USAGE, run, run_with};
pub use value::ValueType;

/// Root command of an application.
///
/// The root has no name of its own; the invocation starts with the base name
/// of `argv[0]` instead.
pub fn app(description: impl Into<String>) -> Command {
    Command::new("", description)
}
