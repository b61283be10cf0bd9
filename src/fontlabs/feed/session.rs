//! Event-loop driver for a [`PagedFeed`].
//!
//! A [`FeedSession`] shares one feed between the sentinel callbacks and the code
//! that resolves fetches. Issued requests wait in a FIFO until [`FeedSession::pump`]
//! runs them against the catalog; that gap is the suspension point where signals,
//! resets and stale completions interleave.

use super::{FeedState, PageOutcome, PageRequest, PagedFeed, ViewportSentinel};
use crate::model::Font;
use crate::store::{CatalogStore, CategoryFilter};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// What the rendering layer observes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub items: Vec<Font>,
    pub is_loading: bool,
    pub has_more: bool,
    pub state: FeedState,
}

impl FeedSnapshot {
    /// Index of the item the viewport sentinel belongs on.
    pub fn sentinel_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

pub struct FeedSession {
    feed: Rc<RefCell<PagedFeed>>,
    in_flight: Rc<RefCell<VecDeque<PageRequest>>>,
}

impl FeedSession {
    pub fn new(feed: PagedFeed) -> Self {
        Self {
            feed: Rc::new(RefCell::new(feed)),
            in_flight: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Routes the sentinel's proximity signals into this session.
    pub fn attach<V: ViewportSentinel>(&self, sentinel: &mut V) {
        let feed = Rc::clone(&self.feed);
        let in_flight = Rc::clone(&self.in_flight);
        sentinel.on_near_visible(Box::new(move || {
            request_next(&feed, &in_flight);
        }));
    }

    /// Same as a proximity signal. Returns whether a request was issued.
    pub fn near_visible(&self) -> bool {
        request_next(&self.feed, &self.in_flight)
    }

    pub fn reset(&self, filter: CategoryFilter) {
        let request = self.feed.borrow_mut().reset(filter);
        if let Some(request) = request {
            self.in_flight.borrow_mut().push_back(request);
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.borrow().len()
    }

    /// Resolves every issued request in issue order.
    pub fn pump<S: CatalogStore>(&self, store: &S) -> Vec<PageOutcome> {
        let mut outcomes = Vec::new();
        loop {
            // The queue borrow must end before the feed is touched.
            let next = self.in_flight.borrow_mut().pop_front();
            let Some(request) = next else {
                break;
            };
            let result = store.list_fonts(&request.query);
            outcomes.push(self.feed.borrow_mut().complete(request, result));
        }
        outcomes
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let feed = self.feed.borrow();
        FeedSnapshot {
            items: feed.items().to_vec(),
            is_loading: feed.is_loading(),
            has_more: feed.has_more(),
            state: feed.state(),
        }
    }

    pub fn with_feed<R>(&self, f: impl FnOnce(&PagedFeed) -> R) -> R {
        f(&self.feed.borrow())
    }
}

fn request_next(
    feed: &Rc<RefCell<PagedFeed>>,
    in_flight: &Rc<RefCell<VecDeque<PageRequest>>>,
) -> bool {
    let request = feed.borrow_mut().begin_next_page();
    match request {
        Some(request) => {
            in_flight.borrow_mut().push_back(request);
            true
        }
        None => false,
    }
}
