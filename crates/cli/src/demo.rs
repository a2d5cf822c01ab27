//! Built-in `git`-like command tree used by every subcommand of the binary.

use cmdtree::{ArgDef, Command, OptDef, Parsed, ValueType};

pub fn app() -> Command {
    let checkout = Command::new("checkout", "checkout a branch or revision")
        .with_shortcut("co")
        .with_arg(ArgDef::new("branch"))
        .with_option(OptDef::new("branch", "Create branch").with_char('b').with_type(ValueType::Bool))
        .with_option(OptDef::new("upstream", "Set upstream").with_char('u').with_type(ValueType::Bool))
        .with_option(OptDef::new("fallback", "Fallback revision").with_char('f'))
        .with_option(OptDef::new("count", "Count").with_char('c').with_type(ValueType::Int))
        .with_option(OptDef::new("pi", "Ratio").with_char('p').with_type(ValueType::Number))
        .with_option(OptDef::new("str", "Free text").with_char('s'))
        .with_action(on_checkout);

    let add = Command::new("add", "add a remote")
        .with_arg(ArgDef::new("remote"))
        .with_arg(ArgDef::new("count").with_type(ValueType::Int))
        .with_arg(ArgDef::new("pi").with_type(ValueType::Number))
        .with_arg(ArgDef::new("force").with_type(ValueType::Bool))
        .with_arg(ArgDef::new("optional").with_type(ValueType::Bool).optional())
        .with_option(OptDef::new("force", "Force").with_char('f').with_type(ValueType::Bool))
        .with_option(OptDef::new("quiet", "Quiet").with_char('q').with_type(ValueType::Bool))
        .with_option(OptDef::new("default", "Default"))
        .with_action(on_remote_add);

    cmdtree::app("git tool")
        .with_arg(ArgDef::new("arg1"))
        .with_command(checkout)
        .with_command(Command::new("remote", "operations with remotes").with_command(add))
        .with_action(on_root)
}

fn on_checkout(parsed: &Parsed) -> i32 {
    if parsed.is_help() {
        return usage(parsed);
    }
    let branch = &parsed.args()[0];
    if parsed.flag("branch") {
        println!("Switched to a new branch '{branch}'");
    } else {
        println!("Switched to branch '{branch}'");
    }
    if parsed.flag("upstream") {
        println!("branch '{branch}' set up to track 'origin/{branch}'");
    }
    0
}

fn on_remote_add(parsed: &Parsed) -> i32 {
    if parsed.is_help() {
        return usage(parsed);
    }
    let args = parsed.args();
    if !parsed.flag("quiet") {
        println!("added remote '{}' (count {}, pi {})", args[0], args[1], args[2]);
    }
    0
}

fn on_root(parsed: &Parsed) -> i32 {
    if parsed.is_help() {
        return usage(parsed);
    }
    println!("{}", parsed.args().join(" "));
    0
}

fn usage(parsed: &Parsed) -> i32 {
    println!("usage: {} [options] [args]", parsed.invocation().join(" "));
    0
}
