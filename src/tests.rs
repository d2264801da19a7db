#![allow(unused_imports)]
use {
    ::core::{
        iter::FromIterator,
    },
    ::std::{
        *,
        prelude::v1::*,
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            mpsc,
            Arc,
            Mutex,
        },
        time::{Duration, Instant},
    },
    crate::{
        prelude::*,
        utils::semaphore::Semaphore,
    },
};

#[test]
fn basic ()
{
    let generator = Generator::new(|co| {
        co.emit(42_u8);
        co.emit(0);
        co.emit(27);
    });
    assert_it_eq!(
        generator,
        [42, 0, 27],
    );
}

#[test]
fn range ()
{
    struct Range(u8, u8);

    impl Producer<u8> for Range {
        fn run (self, co: &'_ Emitter<u8>)
        {
            let Self(mut current, end) = self;
            while current < end {
                if !co.emit(current) {
                    return;
                }
                current += 1;
            }
        }
    }

    assert_it_eq!(
        Generator::from_producer(Range(2, 8)),
        Vec::from_iter(2 .. 8),
    );
}

#[test]
fn empty ()
{
    let mut generator = Generator::<()>::new(|_| {});
    assert_eq!(generator.next(), None);
    assert!(generator.is_finished());
}

#[test]
fn fused_after_exhaustion ()
{
    let mut generator = Generator::new(|co| { co.emit("only"); });
    assert_eq!(generator.next(), Some("only"));
    assert_eq!(generator.next(), None);
    // Would block forever if the handshake were attempted again.
    for _ in 0 .. 3 {
        assert_eq!(generator.next(), None);
    }
}

#[test]
fn first_value_is_produced_eagerly ()
{
    let entered = Arc::new(AtomicUsize::new(0));
    let completed = Arc::new(AtomicBool::new(false));
    let mut generator = Generator::new({
        let entered = Arc::clone(&entered);
        let completed = Arc::clone(&completed);
        move |co| {
            for value in 1 ..= 3 {
                entered.fetch_add(1, Ordering::SeqCst);
                co.emit(value);
            }
            completed.store(true, Ordering::SeqCst);
        }
    });

    // The first `emit` went through without us; the second one is blocked.
    assert!(wait_until(|| entered.load(Ordering::SeqCst) == 2));
    thread::sleep(Duration::from_millis(10));
    assert_eq!(entered.load(Ordering::SeqCst), 2);
    assert!(completed.load(Ordering::SeqCst).not());

    assert_eq!(generator.next(), Some(1));
    assert!(wait_until(|| entered.load(Ordering::SeqCst) == 3));
    assert!(completed.load(Ordering::SeqCst).not());

    assert_eq!(generator.next(), Some(2));
    assert_eq!(generator.next(), Some(3));
    assert!(wait_until(|| completed.load(Ordering::SeqCst)));
    assert_eq!(generator.next(), None);
}

#[test]
fn producer_is_at_most_one_value_ahead ()
{
    const N: usize = 50;
    let completed = Arc::new(AtomicUsize::new(0));
    let generator = Generator::new({
        let completed = Arc::clone(&completed);
        move |co| {
            for value in 0 .. N {
                if !co.emit(value) {
                    return;
                }
                completed.fetch_add(1, Ordering::SeqCst);
            }
        }
    });

    for (taken, value) in generator.enumerate() {
        assert_eq!(taken, value);
        if value % 10 == 0 {
            thread::sleep(Duration::from_millis(2));
        }
        // `value + 1` values have been taken: the producer may have handed
        // over one more, but no further.
        assert!(completed.load(Ordering::SeqCst) <= value + 2);
    }
    assert_eq!(completed.load(Ordering::SeqCst), N);
}

#[test]
fn dropping_cancels_the_producer ()
{
    let (done, producer_done) = mpsc::channel();
    let accepted = Arc::new(AtomicUsize::new(0));
    let mut generator = Generator::new({
        let accepted = Arc::clone(&accepted);
        move |co| {
            let mut n = 0_u64;
            while co.emit(n) {
                accepted.fetch_add(1, Ordering::SeqCst);
                n += 1;
            }
            done.send(co.is_cancelled()).unwrap();
        }
    });

    assert_eq!(generator.by_ref().take(3).collect::<Vec<_>>(), [0, 1, 2]);
    drop(generator);

    let was_cancelled =
        producer_done
            .recv_timeout(Duration::from_secs(5))
            .expect("the producer did not stop")
    ;
    assert!(was_cancelled);
    let accepted = accepted.load(Ordering::SeqCst);
    assert!((3 ..= 4).contains(&accepted), "accepted = {}", accepted);
}

#[test]
fn dropping_before_any_pull ()
{
    let (ahead, producer_ahead) = mpsc::channel();
    let (done, producer_done) = mpsc::channel();
    let generator = Generator::new(move |co| {
        let first = co.emit(1);
        ahead.send(()).unwrap();
        let second = co.emit(2);
        done.send((first, second)).unwrap();
    });
    // The producer got ahead, and is (about to be) blocked on its second value.
    producer_ahead.recv_timeout(Duration::from_secs(5)).unwrap();
    drop(generator);
    assert_eq!(
        producer_done.recv_timeout(Duration::from_secs(5)),
        Ok((true, false)),
    );
}

#[test]
fn cooperative_cancellation_check ()
{
    let (done, producer_done) = mpsc::channel();
    let generator: Generator<()> = Generator::new(move |co| {
        // Some lengthy computation that never gets to emit anything.
        while co.is_cancelled().not() {
            thread::sleep(Duration::from_millis(1));
        }
        done.send(()).unwrap();
    });
    thread::sleep(Duration::from_millis(5));
    drop(generator);
    assert!(producer_done.recv_timeout(Duration::from_secs(5)).is_ok());
}

#[test]
fn panicking_producer ()
{
    let mut generator = Generator::new(|co| {
        co.emit(1);
        co.emit(2);
        panic!("producer exploded");
    });
    assert_eq!(generator.next(), Some(1));
    assert_eq!(generator.next(), Some(2));
    assert_eq!(generator.next(), None);
    assert_eq!(
        generator.take_fault(),
        Some(GeneratorError::Panicked {
            message: "producer exploded".into(),
        }),
    );
    assert_eq!(generator.take_fault(), None);
}

#[test]
fn panicking_producer_try_next ()
{
    let mut generator = Generator::<i32>::new(|_| {
        panic!("{} went wrong", "something");
    });
    assert_eq!(
        generator.try_next(),
        Err(GeneratorError::Panicked {
            message: "something went wrong".into(),
        }),
    );
    assert_eq!(generator.try_next(), Ok(None));
}

#[test]
fn panic_message_display ()
{
    let fault = GeneratorError::Panicked { message: "oops".into() };
    assert_eq!(fault.to_string(), "generator producer panicked: oops");
}

#[test]
fn builder_names_the_worker ()
{
    let generator =
        Generator::<Option<String>>::builder()
            .name("fizz")
            .spawn(|co| {
                co.emit(thread::current().name().map(String::from));
            })
            .unwrap()
    ;
    assert_it_eq!(generator, [Some("fizz".to_owned())]);

    let generator = Generator::new(|co| {
        co.emit(thread::current().name().map(String::from));
    });
    assert_it_eq!(generator, [Some("yield-gen".to_owned())]);
}

#[test]
fn send ()
{
    let mut generator = Generator::new(|co| {
        for n in 1 .. 8_u8 {
            if !co.emit(n) {
                return;
            }
        }
    });
    assert_eq!(generator.next(), Some(1));
    thread::spawn(move || {
        assert_it_eq!(generator, Vec::from_iter(2 .. 8));
    })
    .join()
    .unwrap();
}

#[test]
fn nested_generators ()
{
    let outer = Generator::new(|co| {
        for row in 0 .. 3_u32 {
            let inner = Generator::new(move |co| {
                for col in 0 .. 3 {
                    co.emit(row * 10 + col);
                }
            });
            for value in inner {
                if !co.emit(value) {
                    return;
                }
            }
        }
    });
    assert_it_eq!(
        outer,
        [0, 1, 2, 10, 11, 12, 20, 21, 22],
    );
}

#[test]
fn semaphore_permits ()
{
    let semaphore = Arc::new(Semaphore::new(1));
    semaphore.acquire();
    assert_eq!(semaphore.available(), 0);

    let waiter = thread::spawn({
        let semaphore = Arc::clone(&semaphore);
        move || semaphore.acquire()
    });
    thread::sleep(Duration::from_millis(5));
    semaphore.release();
    waiter.join().unwrap();
    assert_eq!(semaphore.available(), 0);

    semaphore.release();
    semaphore.release();
    assert_eq!(semaphore.available(), 2);
}

mod proc_macros {
    use super::{*, panic};

    #[test]
    fn range ()
    {
        #[generator(u8)]
        fn range (start: u8, end: u8)
        {
            let mut current = start;
            while current < end {
                yield_!(current);
                current += 1;
            }
        }

        assert_it_eq!(
            range(2, 8),
            Vec::from_iter(2 .. 8),
        );
    }

    #[test]
    fn early_drop_stops_the_loop ()
    {
        #[generator(u64)]
        fn naturals (stopped: mpsc::Sender<()>)
        {
            let mut n = 0;
            let _guard = OnDrop(move || { let _ = stopped.send(()); });
            loop {
                yield_!(n);
                n += 1;
            }
        }

        struct OnDrop<F : FnMut()>(F);
        impl<F : FnMut()> Drop for OnDrop<F> {
            fn drop (self: &'_ mut Self)
            {
                (self.0)()
            }
        }

        let (stopped, producer_stopped) = mpsc::channel();
        let mut naturals = naturals(stopped);
        assert_eq!(naturals.nth(5), Some(5));
        drop(naturals);
        let _ = producer_stopped
            .recv_timeout(Duration::from_secs(5))
            .expect("the producer did not stop")
        ;
    }

    mod adaptors {
        use super::{*, panic};

        #[generator(T)]
        fn filter<T, I> (
            mut predicate: impl FnMut(&T) -> bool + Send + 'static,
            iterable: I,
        )
        where
            T : Send + 'static,
            I : IntoIterator<Item = T> + Send + 'static,
        {
            for element in iterable {
                if predicate(&element) {
                    yield_!(element);
                }
            }
        }

        #[generator(U)]
        fn map<T, U, I> (
            mut f: impl FnMut(T) -> U + Send + 'static,
            iterable: I,
        )
        where
            U : Send + 'static,
            I : IntoIterator<Item = T> + Send + 'static,
        {
            for element in iterable {
                yield_!(f(element));
            }
        }

        #[test]
        fn filter_map_range ()
        {
            let iterator = filter(|x| x % 2 == 0, 2 .. 7);
            let iterator = map(|x| x * x, iterator);
            assert_it_eq!(
                iterator,
                [4, 16, 36],
            );
        }
    }
}

/// Polls `condition` for up to a few seconds.
fn wait_until (mut condition: impl FnMut() -> bool)
  -> bool
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    condition()
}

use ::core::ops::Not as _;

macro_rules! assert_it_eq {(
    $left:expr, $right:expr $(, $($msg:expr $(,)?)?)?
) => (
    assert_eq!(
        $left.into_iter().collect::<Vec<_>>(),
        $right,
        $($($msg ,)?)?
    )
)}
use assert_it_eq;
