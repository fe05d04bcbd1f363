use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Walk through a front-desk session in the PawDesk slideout stack.
#[derive(Debug, Parser)]
#[command(name = "pawdesk-demo", version)]
pub struct Args {
    /// Slideout config (TOML or JSON, chosen by extension).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Which scripted session to play.
    #[arg(long, value_enum, default_value_t = Script::FrontDesk)]
    pub script: Script,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Script {
    /// Owner lookup, nested booking, then a task that escapes back to the booking.
    FrontDesk,
    /// Opens a panel type no form knows about.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let args =
            Args::try_parse_from(["pawdesk-demo", "--script", "unknown", "--json-logs"]).unwrap();
        assert_eq!(args.script, Script::Unknown);
        assert!(args.json_logs);
        assert!(args.config.is_none());
    }
}
