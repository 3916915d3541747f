//! Synchronous observable value with explicit subscriptions.
//!
//! Both wizard stores are thin wrappers around [`Observable`]. Delivery
//! happens on the thread that issued the write; there is no background
//! work and no lock is held while an observer runs.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, MutexGuard};

type Callback<T> = Box<dyn FnMut(&T) + Send + 'static>;

struct Observer<T> {
    id: u64,
    active: AtomicBool,
    callback: Mutex<Callback<T>>,
}

impl<T> Observer<T> {
    fn notify(&self, value: &T) {
        if self.active.load(Ordering::Acquire) {
            let mut callback = self.callback.lock();
            (*callback)(value);
        }
    }
}

/// One queued delivery: the value plus the observers registered when the
/// write was issued.
type Delivery<T> = (Vec<Arc<Observer<T>>>, T);

struct Inner<T> {
    value: T,
    observers: Vec<Arc<Observer<T>>>,
    next_id: u64,
    pending: VecDeque<Delivery<T>>,
    notifying: bool,
}

/// A shared value that pushes every write to its observers.
///
/// Writes issued from inside an observer are queued and delivered once the
/// current round finishes, so each observer sees the values in the order
/// the writes were issued. Equal values are delivered too; there is no
/// deduplication.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                observers: Vec::new(),
                next_id: 0,
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Register an observer.
    ///
    /// The observer is called once immediately with the current value and
    /// again after every subsequent write. It stays registered until the
    /// returned [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&T) + Send + 'static,
    {
        let (observer, current) = {
            let mut inner = self.inner.lock();
            let observer = Arc::new(Observer {
                id: inner.next_id,
                active: AtomicBool::new(true),
                callback: Mutex::new(Box::new(observer) as Callback<T>),
            });
            inner.next_id += 1;
            inner.observers.push(Arc::clone(&observer));
            (observer, inner.value.clone())
        };

        observer.notify(&current);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                observer.active.store(false, Ordering::Release);
                if let Some(inner) = weak.upgrade() {
                    inner.lock().observers.retain(|o| o.id != observer.id);
                }
            })),
        }
    }

    /// Replace the value and notify every observer exactly once.
    pub fn set(&self, value: T) {
        let mut inner = self.inner.lock();
        inner.value = value;
        self.publish(inner);
    }

    /// Compute the next value from the current one and publish it as
    /// [`set`](Self::set) does.
    ///
    /// `f` runs under the store lock, so concurrent updates through cloned
    /// handles never overwrite each other. It must not call back into this
    /// observable.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        let mut inner = self.inner.lock();
        let next = f(inner.value.clone());
        inner.value = next;
        self.publish(inner);
    }

    /// Queue the value just written. The caller that opens a round drains
    /// the queue; writes that land while a round runs only enqueue.
    fn publish(&self, mut inner: MutexGuard<'_, Inner<T>>) {
        let observers = inner.observers.clone();
        let value = inner.value.clone();
        inner.pending.push_back((observers, value));
        if inner.notifying {
            return;
        }
        inner.notifying = true;
        drop(inner);

        let mut round = NotifyRound {
            inner: &self.inner,
            finished: false,
        };
        loop {
            let (observers, value) = {
                let mut inner = self.inner.lock();
                match inner.pending.pop_front() {
                    Some(delivery) => delivery,
                    None => {
                        inner.notifying = false;
                        break;
                    }
                }
            };
            for observer in &observers {
                observer.notify(&value);
            }
        }
        round.finished = true;
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.lock().observers.len()
    }
}

/// Unwinds a notification round when an observer panics, so later writes
/// are delivered again.
///
/// Deliveries still queued behind the panicking observer are discarded.
/// The stored value has already advanced, so observers can lag behind
/// [`Observable::get`] until the next write reaches them.
struct NotifyRound<'a, T> {
    inner: &'a Mutex<Inner<T>>,
    finished: bool,
}

impl<T> Drop for NotifyRound<'_, T> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut inner = self.inner.lock();
        inner.notifying = false;
        inner.pending.clear();
    }
}

/// Handle returned by `subscribe`; the observer is removed when this drops.
#[must_use = "dropping a Subscription unsubscribes the observer immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl Subscription {
    /// Remove the observer now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
