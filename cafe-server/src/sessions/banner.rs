//! Success banner
//!
//! After a successful submission the form's banner is shown and one hide is
//! scheduled `delay` later. Showing it again inside the window cancels the
//! pending hide and starts a new one. The timer task keeps only a weak
//! reference to its slot, so a dropped session takes its timers with it.

use std::sync::{Arc, Weak};
use std::time::Duration;

use serde::Serialize;
use shared::forms::FormLifecycle;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// A form together with its success banner, guarded by one mutex
pub type SharedSlot<F> = Arc<Mutex<FormSlot<F>>>;

#[derive(Debug, Default)]
pub struct Banner {
    visible: bool,
    /// Bumped on every show; a timer only hides the banner it was started for
    generation: u64,
    pending: Option<CancellationToken>,
    hidden_transitions: u64,
}

impl Banner {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// How many times the banner went from visible to hidden
    pub fn hidden_transitions(&self) -> u64 {
        self.hidden_transitions
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Banner {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[derive(Debug)]
pub struct FormSlot<F> {
    pub form: F,
    banner: Banner,
    delay: Duration,
}

impl<F> FormSlot<F>
where
    F: FormLifecycle + Send + 'static,
{
    pub fn shared(form: F, delay: Duration) -> SharedSlot<F> {
        Arc::new(Mutex::new(Self {
            form,
            banner: Banner::default(),
            delay,
        }))
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Show the banner now and schedule exactly one hide after the delay
    ///
    /// Must be called while holding the lock of `slot`.
    pub fn show_banner(&mut self, slot: &SharedSlot<F>) {
        self.banner.cancel_pending();
        self.banner.generation += 1;
        self.banner.visible = true;

        let generation = self.banner.generation;
        let token = CancellationToken::new();
        self.banner.pending = Some(token.clone());

        // armed now, not when the task is first polled
        let deadline = Instant::now() + self.delay;
        let weak: Weak<Mutex<FormSlot<F>>> = Arc::downgrade(slot);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep_until(deadline) => {
                    let Some(slot) = weak.upgrade() else {
                        return;
                    };
                    slot.lock().await.expire_banner(generation);
                }
            }
        });
    }

    /// Drop any pending hide without touching visibility
    pub fn cancel_banner(&mut self) {
        self.banner.cancel_pending();
    }

    fn expire_banner(&mut self, generation: u64) {
        // superseded by a newer show
        if self.banner.generation != generation || !self.banner.visible {
            return;
        }
        self.banner.visible = false;
        self.banner.pending = None;
        self.banner.hidden_transitions += 1;
        self.form.clear_submitted();
        tracing::debug!(generation, "Success banner hidden");
    }
}

/// A form view plus the banner flag
#[derive(Debug, Clone, Serialize)]
pub struct WithBanner<V> {
    #[serde(flatten)]
    pub form: V,
    pub banner_visible: bool,
}
