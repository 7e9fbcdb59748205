//! One-shot session flags.
//!
//! A page view has a few facts that flip exactly once and are read by many
//! parties, such as "the intro animation has finished" or "content has been
//! loaded". [`OnceFlag`] models one of those as an owned value passed to
//! whoever needs it, rather than a process-wide global.

use std::fmt;

type Observer = Box<dyn FnMut()>;

/// A flag that starts unset, can be set once, and then stays set.
///
/// Observers registered with [`subscribe`](Self::subscribe) run exactly once:
/// when the flag is set, or immediately if it already is.
///
/// ```
/// use brandfolio::OnceFlag;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let calls = Rc::new(Cell::new(0));
/// let mut flag = OnceFlag::new();
///
/// let seen = Rc::clone(&calls);
/// flag.subscribe(move || seen.set(seen.get() + 1));
///
/// assert!(flag.set_finished());
/// assert!(!flag.set_finished());
/// assert!(flag.is_finished());
/// assert_eq!(calls.get(), 1);
/// ```
#[derive(Default)]
pub struct OnceFlag {
    finished: bool,
    observers: Vec<Observer>,
}

impl OnceFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sets the flag and notifies pending observers.
    ///
    /// Returns `true` if this call flipped the flag, `false` if it was already set.
    pub fn set_finished(&mut self) -> bool {
        if self.finished {
            return false;
        }

        self.finished = true;
        let observers = std::mem::take(&mut self.observers);
        tracing::debug!(observers = observers.len(), "flag set");
        for mut observer in observers {
            observer();
        }
        true
    }

    /// Registers `observer`, running it right away if the flag is already set.
    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) {
        let mut observer: Observer = Box::new(observer);
        if self.finished {
            observer();
        } else {
            self.observers.push(observer);
        }
    }

    /// Number of observers still waiting for the flag.
    #[must_use]
    pub fn pending_observers(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for OnceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceFlag")
            .field("finished", &self.finished)
            .field("pending_observers", &self.observers.len())
            .finish()
    }
}
