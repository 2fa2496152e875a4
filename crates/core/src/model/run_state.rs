use std::fmt;

/// Lifecycle of an exam timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
    /// Stopped by the runaway guard after ten hours of overrun. Only `reset` leaves it.
    Halted,
}

impl RunState {
    /// True while a run is in progress, counting or not.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    /// True once ticks can no longer change anything until a reset.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Halted)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished => "finished",
            Self::Halted => "halted",
        };
        f.write_str(label)
    }
}

/// User commands that can be refused by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    TogglePause,
    FinishQuestion,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Start => "start",
            Self::TogglePause => "toggle pause",
            Self::FinishQuestion => "finish question",
        };
        f.write_str(label)
    }
}
