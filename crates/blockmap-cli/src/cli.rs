//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `blockmap` command
#[must_use]
pub fn command() -> Command {
    Command::new("blockmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Map CMS content-block names onto UI components")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Catalog file (.toml or .json); defaults to the built-in site catalog"),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Fail on alias collisions instead of letting the later entry win"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("aliases")
                .about("List every alias and the component it resolves to")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve block names to components")
                .arg(
                    Arg::new("names")
                        .required(true)
                        .num_args(1..)
                        .help("Block names, in either spelling"),
                ),
        )
        .subcommand(
            Command::new("audit")
                .about("Report story blocks that have no registered component")
                .arg(
                    Arg::new("story")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Story JSON as delivered by the CMS API"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("check").about("Fail if any two catalog entries collide"))
}
