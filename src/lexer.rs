//! Splitting an input line into an argument vector.

/// Characters that separate arguments on a command line.
///
/// Any maximal run of these acts as a single separator and never shows up in
/// a produced token. There is no quoting, so a token containing one of these
/// characters cannot be written.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\u{7}'];

/// Split `line` into an ordered argument vector.
///
/// The first token is the command name, the rest are its arguments. Empty
/// tokens are never produced; a line consisting only of delimiters yields an
/// empty vector, which the dispatcher treats as "no command entered" rather
/// than an error. The tokens own their text, so the caller is free to drop
/// `line` right away.
///
/// The vector grows as needed; running out of memory aborts the process via
/// the global allocator, which is the only failure mode here.
pub(crate) fn split_into_tokens(line: &str) -> Vec<String> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_command_line() {
        assert_eq!(split_into_tokens("ls -la /tmp"), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn collapses_leading_trailing_and_repeated_delimiters() {
        assert_eq!(split_into_tokens("   ls    -la  "), vec!["ls", "-la"]);
        assert_eq!(split_into_tokens("\t\tls\t-la\t"), vec!["ls", "-la"]);
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(split_into_tokens("").is_empty());
    }

    #[test]
    fn delimiter_only_line_yields_no_tokens() {
        assert!(split_into_tokens(" \t\r\n\u{7} ").is_empty());
    }

    #[test]
    fn every_delimiter_separates_tokens() {
        assert_eq!(
            split_into_tokens("a b\tc\rd\ne\u{7}f"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
    }
}
