use_prelude!();

const DEFAULT_THREAD_NAME: &str = "yield-gen";

/// Worker thread configuration for a [`Generator`].
///
/// ```rust
/// use ::yield_gen::Generator;
///
/// let generator =
///     Generator::<Option<String>>::builder()
///         .name("letters")
///         .stack_size(64 * 1024)
///         .spawn(|co| {
///             let name = ::std::thread::current().name().map(String::from);
///             co.emit(name);
///         })?
/// ;
/// assert_eq!(
///     generator.collect::<Vec<_>>(),
///     [Some("letters".to_owned())],
/// );
/// # Ok::<_, ::std::io::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub
struct Builder {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl Builder {
    /// The default settings: threads named `yield-gen`, with the platform's
    /// default stack size.
    pub
    fn new ()
      -> Self
    {
        Self::default()
    }

    /// Names the worker thread (shows up in panic messages and debuggers).
    pub
    fn name (self: Self, name: impl Into<String>)
      -> Self
    {
        Self { name: Some(name.into()), ..self }
    }

    /// Stack size of the worker thread, in bytes.
    pub
    fn stack_size (self: Self, size: usize)
      -> Self
    {
        Self { stack_size: Some(size), ..self }
    }

    /// Spawns the worker thread running `producer`.
    pub
    fn spawn<T, F> (self: Self, producer: F)
      -> io::Result<Generator<T>>
    where
        T : Send + 'static,
        F : FnOnce(&Emitter<T>) + Send + 'static,
    {
        self.spawn_producer(producer)
    }

    /// Same as [`Builder::spawn`], for any [`Producer`] implementor.
    pub
    fn spawn_producer<T, P> (self: Self, producer: P)
      -> io::Result<Generator<T>>
    where
        T : Send + 'static,
        P : Producer<T>,
    {
        let name = self.name.unwrap_or_else(|| DEFAULT_THREAD_NAME.to_owned());
        let mut thread = thread::Builder::new().name(name);
        if let Some(size) = self.stack_size {
            thread = thread.stack_size(size);
        }
        Generator::spawn_with(thread, producer)
    }
}
