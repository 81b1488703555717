use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_uppercase = true,
            "--no-lower" => flags.no_lowercase = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--allow-similar" => flags.allow_similar = true,
            "--no-ambiguous" => flags.no_ambiguous = true,
            "--no-require-all" => flags.no_require_all = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    flags.length = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.number = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "--include" => {
                i += 1;
                if i < args.len() {
                    flags.include = Some(args[i].clone());
                }
            }
            "--exclude" => {
                i += 1;
                if i < args.len() {
                    flags.exclude = Some(args[i].clone());
                }
            }
            "-o" | "--output" => {
                // Path operand is optional; bare -o exports to the
                // default file name in the current directory.
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passbatch")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn bare_invocation_parses_to_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help);
        assert!(flags.length.is_none());
        assert!(flags.output.is_none());
    }

    #[test]
    fn length_and_number_take_values() {
        let flags = parse(&args(&["-l", "20", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn invalid_number_is_an_error() {
        assert!(matches!(
            parse(&args(&["-l", "tall"])),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert!(matches!(
            parse(&args(&["--frobnicate"])),
            Err(ParseError::UnknownArg(_))
        ));
    }

    #[test]
    fn category_and_pool_flags() {
        let flags = parse(&args(&[
            "--no-upper",
            "--no-symbols",
            "--allow-similar",
            "--no-ambiguous",
            "--no-require-all",
            "--include",
            "äö",
            "--exclude",
            "abc",
        ]))
        .unwrap();
        assert!(flags.no_uppercase);
        assert!(flags.no_symbols);
        assert!(!flags.no_lowercase);
        assert!(flags.allow_similar);
        assert!(flags.no_ambiguous);
        assert!(flags.no_require_all);
        assert_eq!(flags.include.as_deref(), Some("äö"));
        assert_eq!(flags.exclude.as_deref(), Some("abc"));
    }

    #[test]
    fn output_path_is_optional() {
        let flags = parse(&args(&["-o"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));

        let flags = parse(&args(&["-o", "mine.txt"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("mine.txt"));

        // A following flag is not an operand.
        let flags = parse(&args(&["-o", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert!(flags.quiet);
    }
}
