use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[clap(name = "bubble", version, about, long_about = None)]
pub struct Interface {
    /// The command to run, shows the list of commands when omitted
    #[clap(value_enum, ignore_case = true)]
    pub command: Option<Command>,

    /// The topic to show, when running `info`
    #[clap(value_parser)]
    pub topic: Option<String>,

    /// Path to the Aftermath workspace.
    ///
    /// If not specified, uses the current working directory
    #[clap(long, value_parser)]
    pub workspace: Option<PathBuf>,

    /// Exit with a non-zero status if any step failed
    #[clap(long, action)]
    pub strict: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Command {
    /// Builds the JVM alone
    BuildJvm,
    /// Builds OpenJDK with the built JVM
    BuildJdk,
    /// Tests the JVM
    Test,
    /// Advanced testing for the JVM (requires an internet connection)
    AdvancedTest,
    /// Builds random small Java snippets for JVM testing
    ClassBasket,
    /// Formats the source code
    Fmt,
    /// Gives information about the given topic
    Info,
}

/// Parses the provided arguments
pub fn parse<I, T>(args: I) -> clap::Result<Interface>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Interface::try_parse_from(args)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn commands_are_matched_case_insensitively() {
        let interface = parse(["bubble", "BuildJVM"]).unwrap();
        assert_eq!(interface.command, Some(Command::BuildJvm));
        let interface = parse(["bubble", "CLASSBASKET"]).unwrap();
        assert_eq!(interface.command, Some(Command::ClassBasket));
    }

    #[test]
    fn info_takes_an_optional_topic() {
        let interface = parse(["bubble", "info", "bytemods"]).unwrap();
        assert_eq!(interface.command, Some(Command::Info));
        assert_eq!(interface.topic.as_deref(), Some("bytemods"));

        let interface = parse(["bubble", "info"]).unwrap();
        assert_eq!(interface.topic, None);
    }

    #[test]
    fn no_command_is_not_an_error() {
        let interface = parse(["bubble"]).unwrap();
        assert_eq!(interface.command, None);
        assert!(!interface.strict);
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(parse(["bubble", "deploy"]).is_err());
    }

    #[test]
    fn interface_is_well_formed() {
        use clap::CommandFactory;

        Interface::command().debug_assert();
    }
}
