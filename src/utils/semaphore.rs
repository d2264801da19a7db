use_prelude!();

use ::std::sync::PoisonError;

/// A counting semaphore: the "permit" half of the handshake.
///
/// Permits are not tied to a thread: any thread may [`release`] one, and any
/// thread may [`acquire`] it.
///
/// [`release`]: Semaphore::release
/// [`acquire`]: Semaphore::acquire
pub(in crate)
struct Semaphore {
    permits: Mutex<usize>,
    released: Condvar,
}

impl Semaphore {
    pub(in crate)
    fn new (permits: usize)
      -> Self
    {
        Self {
            permits: Mutex::new(permits),
            released: Condvar::new(),
        }
    }

    /// Blocks until a permit is available, and takes it.
    pub(in crate)
    fn acquire (self: &'_ Self)
    {
        let mut permits = lock(&self.permits);
        while *permits == 0 {
            permits =
                self.released
                    .wait(permits)
                    .unwrap_or_else(PoisonError::into_inner)
            ;
        }
        *permits -= 1;
    }

    /// Adds a permit, waking up one waiter (if any).
    pub(in crate)
    fn release (self: &'_ Self)
    {
        *lock(&self.permits) += 1;
        self.released.notify_one();
    }

    #[cfg(test)]
    pub(in crate)
    fn available (self: &'_ Self)
      -> usize
    {
        *lock(&self.permits)
    }
}

impl ::core::fmt::Debug for Semaphore {
    fn fmt (self: &'_ Self, f: &'_ mut ::core::fmt::Formatter<'_>)
      -> ::core::fmt::Result
    {
        f   .debug_struct("Semaphore")
            .field("permits", &*lock(&self.permits))
            .finish()
    }
}
