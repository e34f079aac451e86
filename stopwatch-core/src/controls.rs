/// Which of the start/stop pair is offered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimaryControl {
    Start,
    Stop,
}

impl PrimaryControl {
    pub fn label(self) -> &'static str {
        match self {
            PrimaryControl::Start => "Start",
            PrimaryControl::Stop => "Stop",
        }
    }
}

/// Button enablement derived from the running flag and elapsed time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Controls {
    pub primary: PrimaryControl,
    pub lap_enabled: bool,
    pub reset_enabled: bool,
}

impl Controls {
    pub fn for_state(running: bool, elapsed_ms: u64) -> Self {
        Self {
            primary: if running {
                PrimaryControl::Stop
            } else {
                PrimaryControl::Start
            },
            lap_enabled: running || elapsed_ms != 0,
            reset_enabled: elapsed_ms != 0,
        }
    }
}
