//! Render-completion handles.
//!
//! State changes happen synchronously; the host applies them to the screen the
//! next time it calls `view()`. Each mutating operation hands out a
//! [`RenderHandle`] that resolves once that frame has been applied, so callers
//! can `await` visible consistency. Requests made before the same frame share it.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use tokio::sync::watch;

/// Resolves once the frame that reflects an operation has been applied.
///
/// ```
/// use bubbletea_select_list::select_list::RenderHandle;
///
/// let handle = RenderHandle::ready();
/// assert!(handle.is_applied());
/// ```
#[derive(Debug, Clone)]
pub struct RenderHandle {
    target: u64,
    applied: Option<watch::Receiver<u64>>,
}

impl RenderHandle {
    /// A handle for an operation that needed no render.
    pub fn ready() -> Self {
        Self {
            target: 0,
            applied: None,
        }
    }

    /// Whether the awaited frame has already been applied.
    pub fn is_applied(&self) -> bool {
        match &self.applied {
            Some(rx) => *rx.borrow() >= self.target,
            None => true,
        }
    }
}

impl IntoFuture for RenderHandle {
    type Output = ();
    type IntoFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        let target = self.target;
        Box::pin(async move {
            if let Some(mut rx) = self.applied {
                // The clock is gone once the list is dropped; nothing left to wait for.
                if rx.wait_for(|frame| *frame >= target).await.is_err() {
                    log::trace!("frame clock closed before frame {target}");
                }
            }
        })
    }
}

/// Counts applied frames and hands out handles for the next one.
#[derive(Debug)]
pub(crate) struct FrameClock {
    applied: watch::Sender<u64>,
}

impl FrameClock {
    pub(crate) fn new() -> Self {
        let (applied, _) = watch::channel(0);
        Self { applied }
    }

    /// Handle resolving when the next frame is applied.
    pub(crate) fn next_frame(&self) -> RenderHandle {
        RenderHandle {
            target: *self.applied.borrow() + 1,
            applied: Some(self.applied.subscribe()),
        }
    }

    /// Marks the pending frame as applied.
    pub(crate) fn apply(&self) {
        self.applied.send_modify(|frame| *frame += 1);
        log::trace!("applied frame {}", *self.applied.borrow());
    }

    /// Resolves every outstanding handle.
    pub(crate) fn close(&self) {
        self.applied.send_replace(u64::MAX);
    }
}
