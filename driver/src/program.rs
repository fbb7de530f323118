use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::DriverError;

/// A fully-specified external command line
///
/// The working directory is part of the invocation, so running one never
/// changes the working directory of this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
    cwd: PathBuf,
}
impl Invocation {
    pub fn new<P: Into<String>>(program: P, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: vec![],
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn arg<S: AsRef<OsStr>>(&mut self, arg: S) -> &mut Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.arg(arg);
        }
        self
    }

    #[inline]
    pub fn program(&self) -> &str {
        self.program.as_str()
    }

    #[inline]
    pub fn get_args(&self) -> &[OsString] {
        self.args.as_slice()
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        self.cwd.as_path()
    }
}
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in self.args.iter() {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// The exit status of a finished external process
///
/// A process terminated by a signal has no exit code, and is never successful.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExitStatus(Option<i32>);
impl ExitStatus {
    pub const SUCCESS: Self = Self(Some(0));

    pub const fn from_code(code: i32) -> Self {
        Self(Some(code))
    }

    pub const fn terminated() -> Self {
        Self(None)
    }

    #[inline]
    pub fn success(self) -> bool {
        self.0 == Some(0)
    }

    #[inline]
    pub fn code(self) -> Option<i32> {
        self.0
    }
}
impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self(status.code())
    }
}
impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit status {}", code),
            None => f.write_str("termination by signal"),
        }
    }
}

/// Runs external processes on behalf of the dispatcher
pub trait ProcessRunner {
    /// Runs `invocation` to completion, blocking until it exits
    fn run(&mut self, invocation: &Invocation) -> Result<ExitStatus, DriverError>;
}

/// Runs invocations as child processes of this one, inheriting stdio
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemRunner;
impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ExitStatus, DriverError> {
        let program =
            which::which(invocation.program()).map_err(|source| DriverError::ProgramNotFound {
                program: invocation.program().to_owned(),
                source,
            })?;
        debug!(
            "spawning {} in {}",
            program.display(),
            invocation.current_dir().display()
        );

        Command::new(program)
            .args(invocation.get_args())
            .current_dir(invocation.current_dir())
            .status()
            .map(ExitStatus::from)
            .map_err(|source| DriverError::Spawn {
                invocation: invocation.to_string(),
                source,
            })
    }
}

/// An external tool the dispatcher knows how to invoke
pub trait Program {
    fn executable_name(&self) -> &'static str;

    /// Starts a new invocation of this program in `cwd`
    fn cmd(&self, cwd: &Path) -> Invocation {
        Invocation::new(self.executable_name(), cwd)
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Cargo;
impl Program for Cargo {
    fn executable_name(&self) -> &'static str {
        "cargo"
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Javac;
impl Program for Javac {
    fn executable_name(&self) -> &'static str {
        "javac"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invocation_display_includes_arguments() {
        let mut invocation = Cargo.cmd(Path::new("/work"));
        invocation.args(["build", "--verbose"]);
        assert_eq!(invocation.to_string(), "cargo build --verbose");
        assert_eq!(invocation.current_dir(), Path::new("/work"));
    }

    #[test]
    fn only_zero_is_success() {
        assert!(ExitStatus::SUCCESS.success());
        assert!(!ExitStatus::from_code(1).success());
        assert!(!ExitStatus::from_code(-1).success());
        assert!(!ExitStatus::terminated().success());
        assert_eq!(ExitStatus::terminated().code(), None);
    }

    #[test]
    fn missing_program_is_reported() {
        let invocation = Invocation::new("bubble-definitely-not-a-real-tool", Path::new("."));
        match SystemRunner.run(&invocation) {
            Err(DriverError::ProgramNotFound { program, .. }) => {
                assert_eq!(program, "bubble-definitely-not-a-real-tool")
            }
            other => panic!("expected missing program error, got {:?}", other),
        }
    }
}
