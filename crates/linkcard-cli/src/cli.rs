//! Command tree of the `linkcard` binary

use clap::{value_parser, Arg, ArgAction, Command};
use linkcard_profile::Direction;
use std::path::PathBuf;

/// Default store file in the working directory
pub const DEFAULT_STORE_FILE: &str = "linkcard-store.json";

/// Build the `linkcard` command tree
#[must_use]
pub fn build_cli() -> Command {
    Command::new("linkcard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit a link-in-bio profile card")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("store")
                .long("store")
                .short('s')
                .global(true)
                .value_name("FILE")
                .default_value(DEFAULT_STORE_FILE)
                .value_parser(value_parser!(PathBuf))
                .help("Key/value store file holding the profile"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity"),
        )
        .subcommand(
            Command::new("show")
                .about("Load the profile (running migrations) and print the card")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Update profile fields")
                .arg(Arg::new("name").long("name").value_name("TEXT").help("Display name"))
                .arg(Arg::new("bio").long("bio").value_name("TEXT").help("Bio"))
                .arg(Arg::new("phone").long("phone").value_name("NUMBER").help("Phone number"))
                .arg(
                    Arg::new("email")
                        .long("email")
                        .value_name("ADDRESS")
                        .help("Email address (empty string clears it)"),
                ),
        )
        .subcommand(
            Command::new("link")
                .about("Edit the link list")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Append a link")
                        .arg(Arg::new("label").required(true))
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove the link at INDEX")
                        .arg(index_arg()),
                )
                .subcommand(
                    Command::new("update")
                        .about("Replace the link at INDEX")
                        .arg(index_arg())
                        .arg(Arg::new("label").required(true))
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("move")
                        .about("Move the link at INDEX one place up or down")
                        .arg(index_arg())
                        .arg(
                            Arg::new("direction")
                                .required(true)
                                .value_parser(|s: &str| s.parse::<Direction>()),
                        ),
                ),
        )
        .subcommand(Command::new("markers").about("Show migration marker state"))
        .subcommand(
            Command::new("check")
                .about("Run a validator")
                .subcommand_required(true)
                .subcommand(Command::new("url").arg(Arg::new("value").required(true)))
                .subcommand(Command::new("email").arg(Arg::new("value").required(true)))
                .subcommand(Command::new("phone").arg(Arg::new("value").required(true))),
        )
        .subcommand(
            Command::new("open")
                .about("Check whether the link at INDEX may be followed")
                .arg(index_arg()),
        )
        .subcommand(
            Command::new("share")
                .about("Copy the page URL to the system clipboard")
                .arg(Arg::new("page-url").required(true).value_name("URL")),
        )
}

fn index_arg() -> Arg {
    Arg::new("index")
        .required(true)
        .value_parser(value_parser!(usize))
        .help("Zero-based link index")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn parses_move_direction() {
        let matches = build_cli()
            .try_get_matches_from(["linkcard", "link", "move", "2", "UP"])
            .unwrap();
        let (_, link) = matches.subcommand().unwrap();
        let (_, mv) = link.subcommand().unwrap();
        assert_eq!(mv.get_one::<Direction>("direction"), Some(&Direction::Up));
        assert_eq!(mv.get_one::<usize>("index"), Some(&2));
    }

    #[test]
    fn rejects_bad_direction() {
        assert!(build_cli()
            .try_get_matches_from(["linkcard", "link", "move", "0", "left"])
            .is_err());
    }
}
