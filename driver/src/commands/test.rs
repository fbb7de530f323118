use crate::error::DriverError;
use crate::program::{Cargo, Program};
use crate::session::Session;

use super::classbasket;

/// The main entry point for the 'test' command
///
/// The class basket fixtures are rebuilt first; if they cannot be compiled the
/// test suite is never started.
pub fn run(session: &mut Session) -> anyhow::Result<()> {
    classbasket::run(session)?;
    if session.is_halted() {
        return Ok(());
    }

    session.console().status("Testing...")?;

    let mut test = Cargo.cmd(session.options().workspace());
    test.arg("test");
    let success = session.execute(&test);
    session
        .console()
        .outcome(success, "Tests successful!", "Tests FAILED. :(")?;

    Ok(())
}

/// The main entry point for the 'advancedtest' command
pub fn advanced(_session: &mut Session) -> anyhow::Result<()> {
    Err(DriverError::NotImplemented("advancedtest").into())
}
