//! Scroll listener lifecycle.
//!
//! A [`ScrollSource`] hands out one [`ListenerHandle`] per subscription. The
//! handle is wrapped in a [`Subscription`] right away, which releases it
//! exactly once: on [`Subscription::release`] or, failing that, on drop.
//! A page view keeps its subscription for as long as it is mounted and lets
//! it go during teardown, so no callback outlives the view it writes to.

/// Callback invoked with the viewport's vertical scroll offset
pub type ScrollCallback = Box<dyn Fn(f64)>;

/// Token for an installed scroll listener.
pub trait ListenerHandle {
    /// Detach the listener. After this returns the callback never runs again.
    fn release(self);
}

/// Something that emits scroll offsets (the browser window, or a test double).
pub trait ScrollSource {
    /// Handle returned for each installed listener
    type Handle: ListenerHandle;

    /// Install `callback`; it runs on every scroll event until the handle is released.
    fn subscribe(&self, callback: ScrollCallback) -> Self::Handle;
}

/// Scoped ownership of an installed listener.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription<H: ListenerHandle> {
    handle: Option<H>,
}

impl<H: ListenerHandle> Subscription<H> {
    /// Take ownership of an already installed listener
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Install `on_scroll` on `source` and guard the resulting handle.
    pub fn attach<S>(source: &S, on_scroll: impl Fn(f64) + 'static) -> Self
    where
        S: ScrollSource<Handle = H> + ?Sized,
    {
        let handle = source.subscribe(Box::new(on_scroll));
        tracing::debug!("scroll listener installed");
        Self::new(handle)
    }

    /// Whether the listener is still installed
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Detach now instead of waiting for drop.
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.release();
            tracing::debug!("scroll listener released");
        }
    }
}

impl<H: ListenerHandle> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: ListenerHandle> std::fmt::Debug for Subscription<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeViewport;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn attach_installs_one_listener() {
        let viewport = FakeViewport::default();
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();

        let sub = Subscription::attach(&viewport, move |y| sink.set(y));
        assert!(sub.is_active());
        assert_eq!(viewport.listener_count(), 1);

        viewport.scroll_to(420.0);
        assert_eq!(seen.get(), 420.0);
    }

    #[test]
    fn release_stops_callbacks() {
        let viewport = FakeViewport::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();

        let sub = Subscription::attach(&viewport, move |_| counter.set(counter.get() + 1));
        viewport.scroll_to(1.0);
        sub.release();
        viewport.scroll_to(2.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn drop_releases_listener() {
        let viewport = FakeViewport::default();
        {
            let _sub = Subscription::attach(&viewport, |_| {});
            assert_eq!(viewport.listener_count(), 1);
        }
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn remount_does_not_duplicate_listeners() {
        let viewport = FakeViewport::default();
        for _ in 0..3 {
            let sub = Subscription::attach(&viewport, |_| {});
            assert_eq!(viewport.listener_count(), 1);
            sub.release();
        }
        assert_eq!(viewport.listener_count(), 0);
    }
}
