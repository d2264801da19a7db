//! The push side: routines that drive their own control flow.

use_prelude!();

/// A push-style routine that hands its values, one at a time, to an
/// [`Emitter`].
///
/// This is what a [`Generator`] runs on its worker thread. Any
/// `FnOnce(&Emitter<T>)` closure is a `Producer<T>`; implementing the trait by
/// hand is useful for named, reusable producers that hold some setup state.
///
/// # Contract
///
///   - call [`emit`][`Emitter::emit`] synchronously from within `run`, once per
///     value, in the order the values are to be observed;
///
///   - stop calling it once it returns `false`: the consumer is gone;
///
///   - eventually return, releasing whatever resources (files, child
///     processes…) `run` acquired. An unending producer is only fine when the
///     consumer is expected to drop the [`Generator`] at some point.
///
/// # Example
///
/// ```rust
/// use ::yield_gen::{Emitter, Generator, Producer};
///
/// struct Countdown(u32);
///
/// impl Producer<u32> for Countdown {
///     fn run (self, co: &'_ Emitter<u32>)
///     {
///         for n in (1 ..= self.0).rev() {
///             if !co.emit(n) {
///                 return;
///             }
///         }
///     }
/// }
///
/// let generator = Generator::from_producer(Countdown(3));
/// assert_eq!(generator.collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub
trait Producer<T> : Send + 'static {
    /// Runs the producer to completion (or until the consumer leaves).
    fn run (self, co: &'_ Emitter<T>)
    ;
}

impl<T, F> Producer<T> for F
where
    F : FnOnce(&Emitter<T>) + Send + 'static,
{
    #[inline]
    fn run (self, co: &'_ Emitter<T>)
    {
        self(co)
    }
}
