use arc_swap::ArcSwap;
use std::fmt::{self, Debug, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

use crate::{Method, Pattern, RouteError, Router};

/// A [`Router`] that can gain routes while it is being read.
///
/// Readers [`load`](LiveRouter::load) the current table without taking a
/// lock. Writers never touch a published table: each change builds a new
/// [`Router`] and swaps it in atomically, so a reader sees either the old
/// table or the new one in full.
pub struct LiveRouter<T> {
    current: ArcSwap<Router<T>>,
    writer: Mutex<()>,
}

impl<T> Debug for LiveRouter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let current = self.current.load();
        f.debug_tuple("LiveRouter").field(&**current).finish()
    }
}

impl<T> Default for LiveRouter<T> {
    fn default() -> Self {
        Self::new(Router::default())
    }
}

impl<T> From<Router<T>> for LiveRouter<T> {
    fn from(router: Router<T>) -> Self {
        Self::new(router)
    }
}

impl<T> LiveRouter<T> {
    pub fn new(router: Router<T>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
            writer: Mutex::new(()),
        }
    }

    /// the table as of now. Holding on to it keeps that version alive
    /// even after later swaps.
    pub fn load(&self) -> Arc<Router<T>> {
        self.current.load_full()
    }

    /// Publishes `router` in place of the current table, returning the
    /// table it replaced.
    pub fn replace(&self, router: Router<T>) -> Arc<Router<T>> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        #[cfg(feature = "log")]
        log::debug!("replacing route table ({} routes)", router.len());
        self.current.swap(Arc::new(router))
    }
}

impl<T: Clone> LiveRouter<T> {
    /// Registers a route into a copy of the current table and publishes
    /// the copy. On error nothing is published.
    pub fn register<M, P>(&self, method: M, pattern: P, handler: T) -> Result<(), RouteError>
    where
        M: TryInto<Method>,
        P: TryInto<Pattern>,
        RouteError: From<M::Error> + From<P::Error>,
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = Router::clone(&self.current.load());
        next.register(method, pattern, handler)?;
        #[cfg(feature = "log")]
        log::debug!("publishing route table ({} routes)", next.len());
        self.current.store(Arc::new(next));
        Ok(())
    }
}
