//! Command-line arguments

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "buscadoc", version, about = "Terminal client for the BuscadorDoc search server")]
pub struct CliArgs {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Configuration file to load (default: ./buscadoc.toml, then the user config dir)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "URL",
        env = "BUSCADOC_SERVER",
        help = "Server base URL, overriding server.base_url"
    )]
    pub server: Option<String>,

    #[arg(
        long = "from-login",
        env = "BUSCADOC_FROM_LOGIN",
        action = ArgAction::SetTrue,
        help = "The session comes straight from authentication; skip the welcome screen"
    )]
    pub from_login: bool,

    #[arg(
        long = "generate-config",
        value_name = "PATH",
        num_args = 0..=1,
        help = "Write a default configuration file and exit (default: the user config dir)"
    )]
    pub generate_config: Option<Option<PathBuf>>,
}

impl CliArgs {
    /// Where `--generate-config` should write, if it was given
    pub fn generate_config_target(&self) -> Option<Option<&PathBuf>> {
        self.generate_config.as_ref().map(Option::as_ref)
    }
}
