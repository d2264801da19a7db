pub(in crate)
use {
    ::std::{
        io,
        sync::{
            atomic::{
                AtomicBool,
                AtomicUsize,
                Ordering,
            },
            Arc,
            Condvar,
            Mutex,
        },
        thread,
    },
    ::tracing::{
        debug,
        trace,
        warn,
    },
    crate::{
        error::GeneratorError,
        generator::Generator,
        producer::Producer,
        utils::{
            lock,
            semaphore::Semaphore,
        },
        worker::Emitter,
    },
};
