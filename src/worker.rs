//! The background half of a [`Generator`]: the two-permit rendezvous, the
//! single-slot mailbox, and the thread running the [`Producer`].
//!
//! One permit flows back and forth between both sides:
//!
//!   - the producer needs a `wants_value` permit to fill the mailbox, and
//!     hands over a `value_available` one once it has;
//!
//!   - the consumer needs a `value_available` permit to empty the mailbox, and
//!     hands over a `wants_value` one once it has.
//!
//! The worker starts with one `wants_value` permit, so the first value gets
//! produced before anybody asks for it, and the producer is then never more
//! than one value ahead of the consumer.

use_prelude!();

use {
    ::std::panic::{self, AssertUnwindSafe},
    crate::counter::ActiveWorker,
};

/// State shared between a [`Generator`] and its worker thread.
pub(in crate)
struct Shared<T> {
    value_available: Semaphore,
    wants_value: Semaphore,
    mailbox: Mutex<Option<T>>,
    abandoned: AtomicBool,
    fault: Mutex<Option<GeneratorError>>,
}

impl<T> Shared<T> {
    fn new ()
      -> Self
    {
        Self {
            value_available: Semaphore::new(0),
            wants_value: Semaphore::new(0),
            mailbox: Mutex::new(None),
            abandoned: AtomicBool::new(false),
            fault: Mutex::new(None),
        }
    }

    #[inline]
    fn is_abandoned (self: &'_ Self)
      -> bool
    {
        self.abandoned.load(Ordering::SeqCst)
    }

    /// Consumer side of the handshake: `None` is the end of the sequence.
    ///
    /// Must not be called again once it has returned `None`: no permit would
    /// ever be released to match it.
    pub(in crate)
    fn receive (self: &'_ Self)
      -> Option<T>
    {
        self.value_available.acquire();
        let value = lock(&self.mailbox).take();
        self.wants_value.release();
        value
    }

    /// Tells the producer to stop, at its next `emit` at the latest.
    pub(in crate)
    fn abandon (self: &'_ Self)
    {
        self.abandoned.store(true, Ordering::SeqCst);
        // The worker may be parked waiting for this very permit.
        self.wants_value.release();
    }

    pub(in crate)
    fn take_fault (self: &'_ Self)
      -> Option<GeneratorError>
    {
        lock(&self.fault).take()
    }

    /// Last handoff: an empty mailbox, i.e., the terminal sentinel.
    fn deliver_terminal (self: &'_ Self)
    {
        if self.is_abandoned() {
            debug!("generator abandoned: skipping the terminal handoff");
            return;
        }
        self.wants_value.acquire();
        *lock(&self.mailbox) = None;
        self.value_available.release();
        trace!("generator terminal handoff delivered");
    }
}

impl<T> ::core::fmt::Debug for Shared<T> {
    fn fmt (self: &'_ Self, f: &'_ mut ::core::fmt::Formatter<'_>)
      -> ::core::fmt::Result
    {
        f   .debug_struct("Shared")
            .field("value_available", &self.value_available)
            .field("wants_value", &self.wants_value)
            .field("abandoned", &self.is_abandoned())
            .finish_non_exhaustive()
    }
}

/// The handle through which a [`Producer`] pushes its values.
///
/// Each call to [`.emit()`][`Emitter::emit`] blocks until the consumer has
/// taken the previously emitted value.
pub
struct Emitter<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Emitter<T> {
    /// Hands `value` over to the consumer.
    ///
    /// Returns `false` when the consumer has dropped its [`Generator`]: the
    /// value is then discarded, and the producer is expected to stop emitting
    /// and return.
    pub
    fn emit (self: &'_ Self, value: T)
      -> bool
    {
        let shared = &*self.shared;
        if shared.is_abandoned() {
            trace!("generator abandoned: refusing to emit");
            return false;
        }
        shared.wants_value.acquire();
        // Dropping the generator releases the permit we were waiting for.
        if shared.is_abandoned() {
            trace!("generator abandoned while emitting");
            return false;
        }
        let prev = lock(&shared.mailbox).replace(value);
        debug_assert!(prev.is_none(), "mailbox was not empty");
        shared.value_available.release();
        trace!("generator value handed off");
        true
    }

    /// Whether the consumer has dropped its [`Generator`].
    ///
    /// Producers doing lengthy work between two [`.emit()`][`Emitter::emit`]s
    /// may poll this to bail out early, since nothing interrupts them
    /// otherwise.
    pub
    fn is_cancelled (self: &'_ Self)
      -> bool
    {
        self.shared.is_abandoned()
    }
}

impl<T> ::core::fmt::Debug for Emitter<T> {
    fn fmt (self: &'_ Self, f: &'_ mut ::core::fmt::Formatter<'_>)
      -> ::core::fmt::Result
    {
        f   .debug_struct("Emitter")
            .field("shared", &self.shared)
            .finish()
    }
}

/// Spawns the worker thread running `producer`, and returns the state it
/// shares with the consumer.
pub(in crate)
fn spawn<T, P> (
    builder: thread::Builder,
    producer: P,
) -> io::Result<Arc<Shared<T>>>
where
    T : Send + 'static,
    P : Producer<T>,
{
    let shared = Arc::new(Shared::new());
    // The startup permit: the first value needs nobody's go-ahead.
    shared.wants_value.release();
    let co = Emitter { shared: Arc::clone(&shared) };
    // On spawn failure the closure, and thus the registration, gets dropped.
    let registration = ActiveWorker::register();
    let worker = builder.spawn(move || run(co, producer, registration))?;
    // Detached: nobody ever joins a generator's worker.
    drop(worker);
    Ok(shared)
}

fn run<T, P> (
    co: Emitter<T>,
    producer: P,
    registration: ActiveWorker,
)
where
    P : Producer<T>,
{
    debug!("generator worker started");
    ::unwind_safe::with_state((co, registration))
        .try_eval(move |(co, _)| {
            let co: &Emitter<T> = co;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                producer.run(co)
            }));
            if let Err(payload) = outcome {
                let fault = GeneratorError::from_panic(&*payload);
                warn!(%fault, "generator producer panicked");
                *lock(&co.shared.fault) = Some(fault);
            }
        })
        .finally(|(co, registration)| {
            co.shared.deliver_terminal();
            debug!("generator worker exiting");
            drop(registration);
        })
}
