use log::{debug, error};

use crate::config::Options;
use crate::console::Console;
use crate::program::{Invocation, ProcessRunner};

/// What happened over the course of a single dispatch
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Outcome {
    failures: usize,
    halted: bool,
}
impl Outcome {
    /// The number of external steps which failed
    #[inline]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// True if a fatal step failed and the dispatch stopped early
    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Failures only affect the exit code in strict mode
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && (self.failures > 0 || self.halted) {
            1
        } else {
            0
        }
    }
}

/// State shared by the actions of a single dispatch
pub struct Session<'a> {
    options: &'a Options,
    runner: &'a mut dyn ProcessRunner,
    console: Console<'a>,
    outcome: Outcome,
}
impl<'a> Session<'a> {
    pub fn new(
        options: &'a Options,
        runner: &'a mut dyn ProcessRunner,
        console: Console<'a>,
    ) -> Self {
        Self {
            options,
            runner,
            console,
            outcome: Outcome::default(),
        }
    }

    #[inline]
    pub fn options(&self) -> &'a Options {
        self.options
    }

    #[inline]
    pub fn console(&mut self) -> &mut Console<'a> {
        &mut self.console
    }

    /// Runs `invocation`, returning true if it exited successfully
    ///
    /// A process which could not be started counts as a failed step.
    pub fn execute(&mut self, invocation: &Invocation) -> bool {
        if let Err(err) = self.console.flush() {
            debug!("unable to flush console: {}", err);
        }

        debug!(
            "running '{}' in {}",
            invocation,
            invocation.current_dir().display()
        );
        match self.runner.run(invocation) {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!("'{}' failed with {}", invocation, status);
                self.outcome.failures += 1;
                false
            }
            Err(err) => {
                error!("{}", err);
                self.outcome.failures += 1;
                false
            }
        }
    }

    /// Stops the dispatch, no further steps will run
    pub fn halt(&mut self) {
        self.outcome.halted = true;
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.outcome.halted
    }

    pub fn finish(self) -> Outcome {
        self.outcome
    }
}
