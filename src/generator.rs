//! The pull side: a one-pass iterator over what a [`Producer`] emits.

use_prelude!();

use {
    ::core::iter::FusedIterator,
    crate::{
        builder::Builder,
        error::Result,
        worker::{self, Shared},
    },
};

/// A pull-style iterator fed, one value at a time, by a push-style
/// [`Producer`] running on its own thread.
///
/// Generators, also commonly referred to as coroutines, let an iterator be
/// written in an _imperative_ way: a loop that `yield`s values, rather than a
/// state machine answering `next()` calls. This type gets there without any
/// language support for coroutines, by running the producer on a dedicated
/// worker thread and strictly alternating between both sides:
///
///   - the producer runs as soon as the generator is created, and then blocks
///     inside [`emit`][`Emitter::emit`] until the consumer is done with the
///     previous value, so it is never more than one value ahead;
///
///   - [`next()`][`Iterator::next`] blocks until the producer has emitted a
///     value, or returned.
///
/// # Example
///
/// ```rust
/// use ::yield_gen::Generator;
///
/// let fibonacci = Generator::new(|co| {
///     let (mut a, mut b) = (0_u64, 1);
///     loop {
///         if !co.emit(b) {
///             return; // the consumer is gone
///         }
///         let sum = a + b;
///         a = b;
///         b = sum;
///     }
/// });
///
/// assert_eq!(
///     fibonacci.take(10).collect::<Vec<_>>(),
///     [1, 1, 2, 3, 5, 8, 13, 21, 34, 55],
/// );
/// ```
///
/// # Abandoning a generator
///
/// Dropping a generator before it is exhausted tells its producer to stop:
/// the next [`emit`][`Emitter::emit`] call (or the one it is currently blocked
/// on) returns `false`, and the producer is expected to return. This is
/// _cooperative_: a producer busy with some long computation between two
/// `emit`s keeps its thread alive until it gets to the next one (or polls
/// [`Emitter::is_cancelled`]). Dropping never blocks.
///
/// # One pass, one consumer
///
/// A generator cannot be cloned nor restarted, and pulling requires `&mut`
/// access. Once it has returned `None`, it keeps returning `None`.
///
/// # Panics
///
/// A panic inside the producer does not cross over to the consumer: the values
/// emitted before it are delivered, then the sequence ends. The fault can be
/// observed with [`.try_next()`][`Generator::try_next`] or
/// [`.take_fault()`][`Generator::take_fault`].
pub
struct Generator<T> {
    shared: Arc<Shared<T>>,
    finished: bool,
}

impl<T> Generator<T>
where
    T : Send + 'static,
{
    /// Spawns a worker thread running `producer`, with the default
    /// [`Builder`] settings.
    ///
    /// # Panics
    ///
    /// If the OS fails to create a thread (use [`Builder::spawn`] to handle
    /// that error).
    pub
    fn new<F> (producer: F)
      -> Self
    where
        F : FnOnce(&Emitter<T>) + Send + 'static,
    {
        Self::from_producer(producer)
    }

    /// Same as [`Generator::new`], for any [`Producer`] implementor.
    pub
    fn from_producer<P> (producer: P)
      -> Self
    where
        P : Producer<T>,
    {
        Builder::new()
            .spawn_producer(producer)
            .unwrap_or_else(|err| {
                panic!("failed to spawn generator worker thread: {}", err)
            })
    }

    /// Configure the worker thread before spawning it.
    #[inline]
    pub
    fn builder ()
      -> Builder
    {
        Builder::new()
    }

    pub(in crate)
    fn spawn_with<P> (thread: thread::Builder, producer: P)
      -> io::Result<Self>
    where
        P : Producer<T>,
    {
        let shared = worker::spawn(thread, producer)?;
        Ok(Self { shared, finished: false })
    }
}

impl<T> Generator<T> {
    /// Like [`Iterator::next`], but reports a [panicked][`GeneratorError`]
    /// producer as an `Err`, on the pull that reaches the end of the sequence.
    ///
    /// ```rust
    /// use ::yield_gen::Generator;
    ///
    /// let mut generator = Generator::new(|co| {
    ///     co.emit(1);
    ///     panic!("out of ideas");
    /// });
    /// assert_eq!(generator.try_next(), Ok(Some(1)));
    /// assert!(generator.try_next().is_err());
    /// assert_eq!(generator.try_next(), Ok(None));
    /// ```
    pub
    fn try_next (self: &'_ mut Self)
      -> Result<Option<T>>
    {
        match self.next() {
            | Some(value) => Ok(Some(value)),
            | None => match self.take_fault() {
                | Some(fault) => Err(fault),
                | None => Ok(None),
            },
        }
    }

    /// Takes the fault that ended the producer, if any.
    ///
    /// Only meaningful once the generator [is finished][
    /// `Generator::is_finished`]: before that, the producer may yet panic.
    pub
    fn take_fault (self: &'_ mut Self)
      -> Option<GeneratorError>
    {
        self.shared.take_fault()
    }

    /// Whether the end of the sequence has been reached.
    #[inline]
    pub
    fn is_finished (self: &'_ Self)
      -> bool
    {
        self.finished
    }
}

impl<T> Iterator for Generator<T> {
    type Item = T;

    fn next (self: &'_ mut Self)
      -> Option<T>
    {
        if self.finished {
            return None;
        }
        let value = self.shared.receive();
        if value.is_none() {
            trace!("generator exhausted");
            self.finished = true;
        }
        value
    }
}

impl<T> FusedIterator for Generator<T> {}

impl<T> Drop for Generator<T> {
    fn drop (self: &'_ mut Self)
    {
        if self.finished.not() {
            debug!("generator dropped before exhaustion: cancelling its producer");
            self.shared.abandon();
        }
    }
}

impl<T> ::core::fmt::Debug for Generator<T> {
    fn fmt (self: &'_ Self, f: &'_ mut ::core::fmt::Formatter<'_>)
      -> ::core::fmt::Result
    {
        f   .debug_struct("Generator")
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// Iterating moves the generator, so it cannot be pulled from afterwards.
/// ```compile_fail
/// use ::yield_gen::Generator;
///
/// let mut generator = Generator::new(|co| { co.emit(1); });
/// for _ in generator {}
/// let _ = generator.next();
/// ```
///
/// The values cross over to the consumer's thread, so they must be [`Send`].
/// ```compile_fail
/// use ::std::rc::Rc;
/// use ::yield_gen::Generator;
///
/// let generator = Generator::new(|co| { co.emit(Rc::new(42)); });
/// drop(generator);
/// ```
///
/// And so must the producer itself.
/// ```compile_fail
/// use ::std::rc::Rc;
/// use ::yield_gen::Generator;
///
/// let shared = Rc::new(42);
/// let generator = Generator::new(move |co| { co.emit(*shared); });
/// drop(generator);
/// ```
fn _compile_error_test() {}

use ::core::ops::Not as _;
