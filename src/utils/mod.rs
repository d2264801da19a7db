#[macro_use]
mod macros;

pub(in crate)
mod prelude;

pub(in crate)
mod semaphore;

use ::std::sync::{Mutex, MutexGuard, PoisonError};

/// No user code ever runs while one of our locks is held, so a poisoned lock
/// still guards consistent data.
#[inline]
pub(in crate)
fn lock<T> (mutex: &'_ Mutex<T>)
  -> MutexGuard<'_, T>
{
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
