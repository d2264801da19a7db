//! Ready-made producers: lines of a file or of a command's output, and regex
//! matches.
//!
//! These follow a "fail open" policy. When a source cannot be set up (the file
//! does not exist, the command cannot be started, the pattern is invalid), the
//! reason is logged through [`tracing`] and the sequence is just empty.
//!
//! [`tracing`]: ::tracing

use_prelude!();

use ::std::{
    io::{BufRead, BufReader},
    process::{Command, ExitStatus, Stdio},
};

pub use self::command::{command_lines, CommandOptions};
mod command;

pub use self::lines::{lines, Lines};
mod lines;

#[cfg(feature = "regex")]
#[cfg_attr(feature = "better-docs", doc(cfg(feature = "regex")))]
pub use self::matches::{regex_matches, RegexOptions};
#[cfg(feature = "regex")]
mod matches;

/// Where a line producer leaves the exit status of the process it ran.
type StatusSlot = Arc<Mutex<Option<ExitStatus>>>;

/// Emits every line of `reader` for which `keep` holds, without its trailing
/// `separator` (nor, for `\n`-separated lines, a trailing `\r`).
///
/// Returns `false` if the consumer went away before the input was exhausted.
fn emit_lines (
    mut reader: impl BufRead,
    separator: u8,
    co: &'_ Emitter<String>,
    mut keep: impl FnMut(&[u8]) -> bool,
) -> bool
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(separator, &mut buf) {
            | Ok(0) => return true,
            | Ok(_) => {},
            | Err(err) => {
                warn!(%err, "failed to read line");
                return true;
            },
        }
        if buf.last() == Some(&separator) {
            buf.pop();
            if separator == b'\n' && buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if keep(&buf) && !co.emit(decode(&buf)) {
            return false;
        }
    }
}

/// Runs `command` with its standard output piped, emits its lines (see
/// [`emit_lines`]), and records how it exited into `status`.
///
/// If the consumer goes away first, the command is killed, and still reaped.
fn emit_command_lines (
    mut command: Command,
    separator: u8,
    status: &'_ StatusSlot,
    co: &'_ Emitter<String>,
    keep: impl FnMut(&[u8]) -> bool,
)
{
    let spawned =
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
    ;
    let mut child = match spawned {
        | Ok(child) => child,
        | Err(err) => {
            warn!(?command, %err, "could not run command");
            return;
        },
    };
    debug!(?command, pid = child.id(), "command started");
    if let Some(stdout) = child.stdout.take() {
        if !emit_lines(BufReader::new(stdout), separator, co, keep) {
            debug!(?command, "command lines abandoned: killing it");
            if let Err(err) = child.kill() {
                debug!(?command, %err, "could not kill command");
            }
        }
    }
    match child.wait() {
        | Ok(exit) => {
            debug!(?command, %exit, "command exited");
            *lock(status) = Some(exit);
        },
        | Err(err) => warn!(?command, %err, "could not wait for command"),
    }
}

/// UTF-8 when possible, Latin-1 otherwise (every byte is then a `char`).
fn decode (bytes: &'_ [u8])
  -> String
{
    match ::core::str::from_utf8(bytes) {
        | Ok(s) => s.to_owned(),
        | Err(_) => {
            debug!("line is not valid UTF-8: falling back to Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        },
    }
}
