use std::ffi::OsString;
use std::path::Path;

use log::{debug, warn};

use crate::config::CLASS_BASKET_DIR;
use crate::error::DriverError;
use crate::program::{Cargo, Javac, Program};
use crate::session::Session;

/// The main entry point for the 'classbasket' command
///
/// If the snippets fail to compile, the session is halted before the byte mods
/// tool runs.
pub fn run(session: &mut Session) -> anyhow::Result<()> {
    let options = session.options();
    session
        .console()
        .status("Building random small Java snippets for JVM testing...")?;

    let mut javac = Javac.cmd(options.workspace());
    javac.args(snippet_sources(options.workspace())?);
    if !session.execute(&javac) {
        session.console().failure("Build FAILED. ")?;
        session.halt();
        return Ok(());
    }
    session.console().status("Build successful!")?;

    session
        .console()
        .status("Building byte mods (Run `bubble info bytemods` to know more)")?;
    let mut byte_mods = Cargo.cmd(&options.byte_mods_dir());
    byte_mods.arg("run");
    let success = session.execute(&byte_mods);
    session.console().outcome(
        success,
        "Byte mods build successful!",
        "Byte mods build FAILED. ",
    )?;

    Ok(())
}

/// Expands `class_basket/*.java` relative to `workspace`
///
/// Like a shell, the pattern is passed through untouched when nothing matches,
/// leaving it to the compiler to complain.
pub(crate) fn snippet_sources(workspace: &Path) -> Result<Vec<OsString>, DriverError> {
    let relative = format!("{}/*.java", CLASS_BASKET_DIR);
    let root = workspace.to_string_lossy();
    let pattern = format!("{}/{}", glob::Pattern::escape(&root), relative);

    let mut sources = vec![];
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let source = path.strip_prefix(workspace).unwrap_or(path.as_path());
        sources.push(source.as_os_str().to_os_string());
    }

    if sources.is_empty() {
        warn!("no java sources matched {}", pattern);
        sources.push(OsString::from(relative));
    } else {
        debug!("found {} java snippets", sources.len());
    }

    Ok(sources)
}
