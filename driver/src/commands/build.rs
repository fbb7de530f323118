use crate::console::Tone;
use crate::program::{Cargo, Program};
use crate::session::Session;

/// The main entry point for the 'buildjvm' command
pub fn jvm(session: &mut Session) -> anyhow::Result<()> {
    let options = session.options();
    let console = session.console();
    if options.mode.is_release() {
        console.status("Building production JVM... ")?;
    } else {
        console.message(&[
            (Tone::Status, "Building development JVM... "),
            (Tone::Failure, "[DO NOT USE THIS BUILD IN PRODUCTION]"),
        ])?;
    }

    let mut build = Cargo.cmd(options.workspace());
    build.args(options.mode.cargo_build_args());
    let success = session.execute(&build);
    session
        .console()
        .outcome(success, "Build successful!", "Build FAILED. :(")?;

    Ok(())
}

/// The main entry point for the 'buildjdk' command
pub fn jdk(session: &mut Session) -> anyhow::Result<()> {
    session
        .console()
        .status("Not so fast cowboy, we ain't there.... yet ;)")?;

    Ok(())
}
