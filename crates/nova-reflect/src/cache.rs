use std::fmt;
use std::sync::OnceLock;

use parking_lot::ReentrantMutex;

/// A lazily computed, memoized attribute.
///
/// The first caller runs the supplier while holding the cell's own lock; concurrent callers of the
/// same cell wait for it and then observe the stored value. Distinct cells never contend. A failed
/// computation stores nothing, so the next caller retries.
pub struct AttrCache<T> {
    value: OnceLock<T>,
    lock: ReentrantMutex<()>,
}

impl<T> Default for AttrCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AttrCache<T> {
    pub fn new() -> Self {
        Self {
            value: OnceLock::new(),
            lock: ReentrantMutex::new(()),
        }
    }

    /// The value, if it has been computed.
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        match self.get_or_try_init(|| Ok::<_, std::convert::Infallible>(f())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    pub fn get_or_try_init<E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<&T, E>
    where
        E: fmt::Display,
    {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let _guard = self.lock.lock();
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        match f() {
            // A reentrant computation on this thread may have filled the cell already; keep the
            // first value so earlier borrows stay valid.
            Ok(value) => Ok(self.value.get_or_init(|| value)),
            Err(err) => {
                tracing::debug!(
                    target: "nova.reflect.cache",
                    error = %err,
                    "attribute computation failed; will retry on next access"
                );
                Err(err)
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AttrCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("AttrCache").field(value).finish(),
            None => f.write_str("AttrCache(<uncomputed>)"),
        }
    }
}
