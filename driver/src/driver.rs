use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use log::debug;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::argparser::{self, Command};
use crate::commands;
use crate::config::{BuildMode, Options};
use crate::console::Console;
use crate::program::{ProcessRunner, SystemRunner};
use crate::session::Session;

pub const WELCOME_MESSAGE: &'static str = r#"
Welcome to the TapVM Aftermath JVM build system.
The following are the available commands.

# Building.
- buildjvm ~ Builds the JVM alone.
- buildjdk ~ Builds OpenJDK with the built JVM.

# Testing.
- test ~ Tests the JVM.
- advancedtest ~ Advanced testing for the JVM (Requires an internet connection).

# Development utilities.
- classbasket ~ Builds random small Java snippets for JVM testing.
- fmt ~ Formats the source code.
- info [topic] ~ Gives information regarding the JVM about the given topic.

Note -> Set the "BUBBLE_RELEASE" environment variable to "true" to build release builds.
"#;

/// Runs a single command described by `args`, returning the exit code for the process
///
/// External tools are spawned as child processes, the build mode is read from the
/// environment, and all output goes to stdout.
pub fn run_bubble<I, T>(cwd: PathBuf, args: I) -> anyhow::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut out = stdout.lock();
    let result = run_bubble_with(cwd, args, BuildMode::from_env(), &mut SystemRunner, &mut out);
    out.flush()?;
    result
}

/// Like [`run_bubble`], but with every ambient dependency supplied by the caller
pub fn run_bubble_with<I, T>(
    cwd: PathBuf,
    args: I,
    mode: BuildMode,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn WriteColor,
) -> anyhow::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let interface = match argparser::parse(args) {
        Ok(interface) => interface,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Err(err.into()),
            _ => {
                debug!("unrecognized arguments: {}", err);
                welcome(out)?;
                return Ok(0);
            }
        },
    };

    let Some(command) = interface.command else {
        welcome(out)?;
        return Ok(0);
    };

    let workspace = match interface.workspace {
        Some(ref workspace) => cwd.join(workspace),
        None => cwd,
    };
    let options = Options::new(workspace, mode, interface.strict);
    debug!(
        "running {:?} in {} ({} build)",
        command,
        options.workspace().display(),
        options.mode
    );

    let mut session = Session::new(&options, runner, Console::new(out));
    match command {
        Command::BuildJvm => commands::build::jvm(&mut session)?,
        Command::BuildJdk => commands::build::jdk(&mut session)?,
        Command::Test => commands::test::run(&mut session)?,
        Command::AdvancedTest => commands::test::advanced(&mut session)?,
        Command::ClassBasket => commands::classbasket::run(&mut session)?,
        Command::Fmt => commands::fmt::run(&mut session)?,
        Command::Info => {
            // Usage errors here are reported, never reflected in the exit code
            commands::info::run(&mut session, interface.topic.as_deref())?;
            return Ok(0);
        }
    }

    let outcome = session.finish();
    if outcome.failures() > 0 {
        debug!(
            "{} step(s) failed{}",
            outcome.failures(),
            if outcome.halted() { ", dispatch halted" } else { "" }
        );
    }
    Ok(outcome.exit_code(options.strict))
}

fn welcome(out: &mut dyn WriteColor) -> io::Result<()> {
    writeln!(out, "{}", WELCOME_MESSAGE)
}
