use super::*;

use ::regex::RegexBuilder;

/// Flags for [`regex_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub
struct RegexOptions {
    /// Defaults to `true`.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` matches `\n` too.
    pub dot_matches_new_line: bool,
    /// Whitespace and `#` comments in the pattern are ignored.
    pub ignore_whitespace: bool,
}

impl Default for RegexOptions {
    fn default ()
      -> Self
    {
        Self {
            case_insensitive: true,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
        }
    }
}

/// The successive matches of `pattern` in `input`.
///
/// Each match is yielded as the list of its capture groups, the whole match
/// being group `0`; optional groups which did not participate in the match
/// are `None`. An invalid pattern is logged and yields no matches.
///
/// ```rust
/// use ::yield_gen::sources::{regex_matches, RegexOptions};
///
/// let mut matches = regex_matches(
///     "the quick brown fox",
///     r"(\w{3})(\w+)?",
///     RegexOptions::default(),
/// );
/// assert_eq!(
///     matches.next().unwrap(),
///     [Some("the".to_owned()), Some("the".to_owned()), None],
/// );
/// assert_eq!(matches.next().unwrap()[2].as_deref(), Some("ck"));
/// ```
pub
fn regex_matches (
    input: impl Into<String>,
    pattern: &'_ str,
    options: RegexOptions,
) -> Generator<Vec<Option<String>>>
{
    Generator::from_producer(MatchesOf {
        input: input.into(),
        pattern: pattern.to_owned(),
        options,
    })
}

struct MatchesOf {
    input: String,
    pattern: String,
    options: RegexOptions,
}

impl Producer<Vec<Option<String>>> for MatchesOf {
    fn run (self, co: &'_ Emitter<Vec<Option<String>>>)
    {
        let Self { input, pattern, options } = self;
        let regex =
            RegexBuilder::new(&pattern)
                .case_insensitive(options.case_insensitive)
                .multi_line(options.multi_line)
                .dot_matches_new_line(options.dot_matches_new_line)
                .ignore_whitespace(options.ignore_whitespace)
                .build()
        ;
        let regex = match regex {
            | Ok(regex) => regex,
            | Err(err) => {
                warn!(%pattern, %err, "invalid regex");
                return;
            },
        };
        for captures in regex.captures_iter(&input) {
            let groups =
                captures
                    .iter()
                    .map(|group| group.map(|m| m.as_str().to_owned()))
                    .collect()
            ;
            if !co.emit(groups) {
                return;
            }
        }
    }
}
