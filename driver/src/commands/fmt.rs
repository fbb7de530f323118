use crate::program::{Cargo, Program};
use crate::session::Session;

/// The main entry point for the 'fmt' command
pub fn run(session: &mut Session) -> anyhow::Result<()> {
    session.console().status("Formatting...")?;

    let mut fmt = Cargo.cmd(session.options().workspace());
    fmt.arg("fmt");
    let success = session.execute(&fmt);
    session
        .console()
        .outcome(success, "Formatting successful!", "Formatting FAILED. :(")?;

    Ok(())
}
