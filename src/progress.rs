// src/progress.rs
use std::fmt;

/// Steps of one pipeline run, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Parse,
    Reshape,
}

impl Stage {
    pub const COUNT: usize = 3;
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Fetch => "fetch",
            Stage::Parse => "parse",
            Stage::Reshape => "reshape",
        })
    }
}

/// Lightweight progress reporting for the fetch → parse → reshape pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called once the table is ready. Not called on error.
    fn finish(&mut self) {}
}

/// Forwards progress to the debug log; used by the CLI.
pub struct LogProgress;

impl Progress for LogProgress {
    fn log(&mut self, msg: &str) {
        logd!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        logd!("Stage done: {stage}");
    }
}
