//! Process-wide count of live generator workers.

use_prelude!();

static ACTIVE_WORKERS: AtomicUsize = AtomicUsize::new(0);

/// Number of generator worker threads currently alive, across the whole
/// process.
///
/// A worker counts as alive from the moment its [`Generator`] is being
/// spawned until its thread is done with the producer: exhausted, abandoned, or
/// panicked. Once every generator has been drained or dropped (and their
/// producers have noticed), this returns to its previous value.
///
/// ```rust
/// use ::yield_gen::{active_workers, Generator};
///
/// let baseline = active_workers();
/// let generator = Generator::new(|co| { co.emit(()); });
/// // Cannot have exited yet: it still owes us the end of the sequence.
/// assert_eq!(active_workers(), baseline + 1);
/// assert_eq!(generator.count(), 1);
/// ```
pub
fn active_workers ()
  -> usize
{
    ACTIVE_WORKERS.load(Ordering::SeqCst)
}

/// Registration of one worker in [`ACTIVE_WORKERS`], released on drop.
pub(in crate)
struct ActiveWorker {
    _private: (),
}

impl ActiveWorker {
    pub(in crate)
    fn register ()
      -> Self
    {
        let active = ACTIVE_WORKERS.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(active, "generator worker registered");
        Self { _private: () }
    }
}

impl Drop for ActiveWorker {
    fn drop (self: &'_ mut Self)
    {
        let active = ACTIVE_WORKERS.fetch_sub(1, Ordering::SeqCst) - 1;
        trace!(active, "generator worker unregistered");
    }
}
