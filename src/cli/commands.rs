use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
    value_parser,
};
use std::path::{Path, PathBuf};

pub fn new(config_path: &Path) -> Command {
    // get config file path (default: ~/.config/tfbucket/config.yml)
    let config_file_path = config_path.join("config.yml");

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("tfbucket")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create a versioned S3 bucket for Terraform remote state")
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("config.yml, optional, defaults apply when missing")
                .default_value(config_file_path.into_os_string())
                .value_name("config.yml")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Host entry to use from the config file")
                .default_value("aws")
                .value_name("NAME")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .help("Verbosity level")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
}
