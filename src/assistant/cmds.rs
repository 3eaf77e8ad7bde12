use clap::{Command, Arg, ArgAction};

pub(crate) const HELLO: &str = "hello";
pub(crate) const ADD: &str = "add";
pub(crate) const ADD_BIRTHDAY: &str = "add-birthday";
pub(crate) const SHOW_BIRTHDAY: &str = "show-birthday";
pub(crate) const BIRTHDAYS: &str = "birthdays";
pub(crate) const CHANGE: &str = "change";
pub(crate) const PHONE: &str = "phone";
pub(crate) const ALL: &str = "all";

pub(crate) const EXIT_COMMANDS: [&str; 2] = ["exit", "close"];

fn arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .required(true)
        .allow_hyphen_values(true)
        .help(help)
}

// Trailing words after the expected arguments are ignored.
fn lenient(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("REST")
            .action(ArgAction::Append)
            .num_args(1..)
            .allow_hyphen_values(true)
            .hide(true)
    )
}

fn command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .disable_help_flag(true)
}

pub(crate) fn assistant_cli() -> Command {
    Command::new("assistant")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .subcommand(lenient(command(HELLO, "supported commands list")))
        .subcommand(
            command(ADD, "save contact with username and phone (required: <username> <phone>)")
                .arg(arg("NAME", "Contact name"))
                .arg(arg("PHONE", "Ten digit phone"))
        )
        .subcommand(
            command(ADD_BIRTHDAY, "add birthday to previously added contact (required: <username> <birthday>)")
                .arg(arg("NAME", "Contact name"))
                .arg(arg("BIRTHDAY", "Birthday as DD.MM.YYYY"))
        )
        .subcommand(lenient(
            command(SHOW_BIRTHDAY, "show birthday from contact (required: <username>)")
                .arg(arg("NAME", "Contact name"))
        ))
        .subcommand(lenient(command(BIRTHDAYS, "show birthdays recorded in contacts for next week from today")))
        .subcommand(
            command(CHANGE, "change contact phone by username provided (required: <username> <phone>)")
                .arg(arg("NAME", "Contact name"))
                .arg(arg("PHONE", "Ten digit phone"))
        )
        .subcommand(lenient(
            command(PHONE, "show contact by username provided (required: <username>)")
                .arg(arg("NAME", "Contact name"))
        ))
        .subcommand(lenient(command(ALL, "show all saved contacts")))
}

/// One line per command, followed by the exit commands.
pub(crate) fn supported_commands(cli: &Command) -> String {
    let mut output = String::from("\n");
    for cmd in cli.get_subcommands() {
        let about = cmd.get_about().map(|v| v.to_string()).unwrap_or_default();
        output += &format!("    {:<14}- {}\n", cmd.get_name(), about);
    }
    output += &format!("    {:<14}- {}\n", EXIT_COMMANDS[0], "exit from assistant");
    output += &format!("    {:<14}- {}\n", EXIT_COMMANDS[1], "same as `exit`");
    output
}
