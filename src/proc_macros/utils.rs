use super::*;

/// Prints the expansion of a `#[generator]` on stderr, formatted with
/// `rustfmt` and highlighted with `bat` when these are available.
#[cfg(feature = "verbose-expansions")]
pub(in crate)
fn pretty_print_tokenstream (
    code: &'_ TokenStream2,
)
{
    use ::std::{
        io::{Read, Write},
        process::{Command, Stdio},
    };

    fn rustfmt (input: &'_ str)
      -> Option<String>
    {
        let mut child =
            Command::new("rustfmt")
                .args(&["--edition", "2018"])
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()
                .ok()?
        ;
        child.stdin.take()?.write_all(input.as_bytes()).ok()?;
        let mut formatted = String::new();
        child.stdout.take()?.read_to_string(&mut formatted).ok()?;
        if child.wait().ok()?.success() {
            Some(formatted)
        } else {
            None
        }
    }

    let code = code.to_string();
    let code = rustfmt(&code).unwrap_or(code);
    eprintln!("// `#[yield_gen::generator]` expansion:");
    let highlighted =
        ::bat::PrettyPrinter::new()
            .input_from_bytes(code.as_ref())
            .language("rust")
            .true_color(false)
            .print()
    ;
    if highlighted.is_err() {
        eprintln!("{}", code);
    }
}
