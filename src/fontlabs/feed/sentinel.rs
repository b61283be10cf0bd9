//! Viewport-proximity signalling.
//!
//! The rendering layer owns a sentinel placed on the last rendered item and calls
//! back whenever it comes (or nearly comes) into view. Signals may repeat rapidly;
//! the feed's own guard is what keeps them from issuing duplicate fetches.

/// Capability for "the sentinel is nearly visible" notifications.
pub trait ViewportSentinel {
    fn on_near_visible(&mut self, callback: Box<dyn FnMut()>);
}

/// Sentinel fired by hand. Used by tests and by the CLI, where "scrolling" is
/// asking for another page.
#[derive(Default)]
pub struct ManualSentinel {
    callbacks: Vec<Box<dyn FnMut()>>,
}

impl ManualSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifies every attached listener once.
    pub fn fire(&mut self) {
        for callback in self.callbacks.iter_mut() {
            callback();
        }
    }

    pub fn listeners(&self) -> usize {
        self.callbacks.len()
    }
}

impl ViewportSentinel for ManualSentinel {
    fn on_near_visible(&mut self, callback: Box<dyn FnMut()>) {
        self.callbacks.push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn fire_reaches_every_listener() {
        let hits = Rc::new(Cell::new(0));
        let mut sentinel = ManualSentinel::new();
        for _ in 0..2 {
            let hits = hits.clone();
            sentinel.on_near_visible(Box::new(move || hits.set(hits.get() + 1)));
        }

        sentinel.fire();
        sentinel.fire();
        assert_eq!(sentinel.listeners(), 2);
        assert_eq!(hits.get(), 4);
    }
}
