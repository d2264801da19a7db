use super::*;

use ::std::path::PathBuf;

/// How [`command_lines`] runs its command and filters its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub
struct CommandOptions {
    /// Where the command runs. Defaults to the system temporary directory.
    pub working_directory: PathBuf,

    /// The byte ending each line. Defaults to `b'\n'`.
    pub line_separator: u8,

    /// Only keep the lines containing this.
    pub contains: Option<String>,

    /// Only keep the lines starting with this.
    ///
    /// When both this and [`contains`][`CommandOptions::contains`] are set, a
    /// line matching either is kept.
    pub starts_with: Option<String>,
}

impl Default for CommandOptions {
    fn default ()
      -> Self
    {
        Self {
            working_directory: ::std::env::temp_dir(),
            line_separator: b'\n',
            contains: None,
            starts_with: None,
        }
    }
}

impl CommandOptions {
    fn keeps (self: &'_ Self, line: &'_ [u8])
      -> bool
    {
        let contains = self.contains.as_ref().map(|needle| {
            let needle = needle.as_bytes();
            needle.is_empty() || line.windows(needle.len()).any(|w| w == needle)
        });
        let starts_with = self.starts_with.as_ref().map(|prefix| {
            line.starts_with(prefix.as_bytes())
        });
        match (contains, starts_with) {
            | (None, None) => true,
            | (a, b) => a == Some(true) || b == Some(true),
        }
    }
}

/// The output lines of a shell command, standard error included.
///
/// `command` is run through `sh -c`, in
/// [`options.working_directory`][`CommandOptions::working_directory`], with
/// its standard error merged into its standard output. The output is split on
/// [`options.line_separator`][`CommandOptions::line_separator`] (a last,
/// unterminated line is still yielded) and filtered.
///
/// Once the lines are exhausted, [`Lines::exit_status`] tells how the command
/// exited. Dropping the [`Lines`] early kills the command. A command which
/// cannot be started is logged and yields no lines.
///
/// ```rust
/// use ::yield_gen::sources::{command_lines, CommandOptions};
///
/// let mut lines = command_lines(
///     "echo kept; echo dropped; echo also kept >&2; exit 1",
///     CommandOptions {
///         contains: Some("kept".into()),
///         ..Default::default()
///     },
/// );
/// assert_eq!(lines.by_ref().collect::<Vec<_>>(), ["kept", "also kept"]);
/// assert_eq!(lines.exit_code(), Some(1));
/// ```
pub
fn command_lines (command: impl Into<String>, options: CommandOptions)
  -> Lines
{
    let status = StatusSlot::default();
    let generator = Generator::from_producer(CommandOutput {
        command: command.into(),
        options,
        status: Arc::clone(&status),
    });
    Lines { generator, status }
}

struct CommandOutput {
    command: String,
    options: CommandOptions,
    status: StatusSlot,
}

impl Producer<String> for CommandOutput {
    fn run (self, co: &'_ Emitter<String>)
    {
        let Self { command, options, status } = self;
        let mut sh = Command::new("sh");
        sh  .arg("-c")
            .arg(format!("exec 2>&1\n{}", command))
            .current_dir(&options.working_directory)
        ;
        let keep = |line: &[u8]| options.keeps(line);
        emit_command_lines(sh, options.line_separator, &status, co, keep);
    }
}
