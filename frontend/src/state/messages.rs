#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// How long a message of this kind stays on screen.
    pub fn ttl_ms(self) -> u32 {
        match self {
            MessageKind::Success => 3_000,
            MessageKind::Error => 5_000,
        }
    }
}

/// A transient banner. `id` ties it to the timer that will clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

#[cfg(target_arch = "wasm32")]
type TimerHandle = gloo_timers::callback::Timeout;

// No browser clock on the host; expiry is driven explicitly in tests.
#[cfg(not(target_arch = "wasm32"))]
type TimerHandle = ();

#[cfg(target_arch = "wasm32")]
fn start_timer(ms: u32, callback: impl FnOnce() + 'static) -> TimerHandle {
    gloo_timers::callback::Timeout::new(ms, callback)
}

#[cfg(not(target_arch = "wasm32"))]
fn start_timer(_ms: u32, _callback: impl FnOnce() + 'static) -> TimerHandle {}

/// Pending auto-clear timers, one slot per message kind.
#[derive(Default)]
pub struct MessageTimers {
    success: Option<TimerHandle>,
    error: Option<TimerHandle>,
}

impl MessageTimers {
    /// Replacing the slot drops the previous handle, which cancels it.
    pub fn schedule(&mut self, kind: MessageKind, callback: impl FnOnce() + 'static) {
        let handle = start_timer(kind.ttl_ms(), callback);
        match kind {
            MessageKind::Success => self.success = Some(handle),
            MessageKind::Error => self.error = Some(handle),
        }
    }

    #[cfg(test)]
    fn is_pending(&self, kind: MessageKind) -> bool {
        match kind {
            MessageKind::Success => self.success.is_some(),
            MessageKind::Error => self.error.is_some(),
        }
    }
}
