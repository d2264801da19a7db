use super::*;

use {
    ::core::iter::FusedIterator,
    ::std::fs::File,
};

/// The lines of a file, or of the output of a command.
///
/// Unless `path` ends with a `|`, it is opened as a file. Otherwise, what
/// precedes the `|` is run as a `sh -c` command, and its standard output is
/// read instead (its standard error is left alone).
///
/// Each line is yielded without its line terminator. A file or command which
/// cannot be opened is logged and yields no lines.
///
/// ```rust
/// use ::yield_gen::sources;
///
/// let mut lines = sources::lines("printf 'one\\ntwo\\n'; exit 3|");
/// assert_eq!(lines.by_ref().collect::<Vec<_>>(), ["one", "two"]);
/// assert_eq!(lines.exit_code(), Some(3));
///
/// assert_eq!(sources::lines("/does/not/exist").count(), 0);
/// ```
pub
fn lines (path: impl Into<String>)
  -> Lines
{
    let path = path.into();
    let status = StatusSlot::default();
    let generator = Generator::from_producer(LinesOf {
        path,
        status: Arc::clone(&status),
    });
    Lines { generator, status }
}

struct LinesOf {
    path: String,
    status: StatusSlot,
}

impl Producer<String> for LinesOf {
    fn run (self, co: &'_ Emitter<String>)
    {
        match self.path.strip_suffix('|') {
            | Some(command) => read_command(command, &self.status, co),
            | None => read_file(&self.path, co),
        }
    }
}

fn read_file (path: &'_ str, co: &'_ Emitter<String>)
{
    let file = match File::open(path) {
        | Ok(file) => file,
        | Err(err) => {
            warn!(path, %err, "could not open file");
            return;
        },
    };
    emit_lines(BufReader::new(file), b'\n', co, |_| true);
}

fn read_command (
    command: &'_ str,
    status: &'_ StatusSlot,
    co: &'_ Emitter<String>,
)
{
    let mut sh = Command::new("sh");
    sh.arg("-c").arg(command);
    emit_command_lines(sh, b'\n', status, co, |_| true);
}

/// A [`Generator`] of lines, which also knows how the process it read them
/// from (if any) exited.
///
/// Returned by [`lines`] and [`command_lines`][`super::command_lines`].
#[derive(Debug)]
pub
struct Lines {
    pub(in super)
    generator: Generator<String>,
    pub(in super)
    status: StatusSlot,
}

impl Lines {
    /// How the underlying process exited.
    ///
    /// `None` while the lines are not exhausted, when reading a plain file, or
    /// when the process could not be started.
    pub
    fn exit_status (self: &'_ Self)
      -> Option<ExitStatus>
    {
        if self.generator.is_finished() {
            *lock(&self.status)
        } else {
            None
        }
    }

    /// The exit code of the underlying process, when it exited normally.
    pub
    fn exit_code (self: &'_ Self)
      -> Option<i32>
    {
        self.exit_status()?.code()
    }

    /// The underlying [`Generator`], e.g., to check it for a fault.
    pub
    fn generator_mut (self: &'_ mut Self)
      -> &'_ mut Generator<String>
    {
        &mut self.generator
    }
}

impl Iterator for Lines {
    type Item = String;

    #[inline]
    fn next (self: &'_ mut Self)
      -> Option<String>
    {
        self.generator.next()
    }
}

impl FusedIterator for Lines {}
