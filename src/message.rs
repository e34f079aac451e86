use num_traits::{FromPrimitive, ToPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, num_derive::FromPrimitive, num_derive::ToPrimitive)]
pub enum AppOp {
    Redraw = 0,
    Rawkeys,
    FocusChange,
    Pump,
    Quit,
}

/// A scalar message for the main loop: an opcode and one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub id: usize,
    pub arg: u64,
}

impl Message {
    pub fn new(op: AppOp, arg: u64) -> Self {
        Self {
            id: op.to_usize().unwrap_or(usize::MAX),
            arg,
        }
    }

    pub fn op(&self) -> Option<AppOp> {
        FromPrimitive::from_usize(self.id)
    }

    pub fn resize(cols: u16, rows: u16) -> Self {
        Self::new(AppOp::Redraw, ((cols as u64) << 16) | rows as u64)
    }

    /// Terminal size carried by a `Redraw`, if any.
    pub fn screensize(&self) -> Option<(u16, u16)> {
        if self.arg == 0 {
            return None;
        }
        Some(((self.arg >> 16) as u16, self.arg as u16))
    }
}
