//! Command-line splitting: leading skube options, then the phrase.

/// Errors from reading the command line.
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("--context needs a value")]
    MissingContext,
    #[error("could not split quoted phrase: {0}")]
    Split(#[from] shell_words::ParseError),
}

/// Parsed command line.
///
/// Options are only recognized before the first phrase word, so flags
/// such as `-n` or `-f` inside the phrase reach the parser untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Emit logs as JSON lines.
    pub log_json: bool,
    /// Kube context to resolve names against; overrides the config file.
    pub context: Option<String>,
    pub words: Vec<String>,
}

impl CliArgs {
    /// Parse arguments after the program name.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().peekable();

        loop {
            match args.peek().map(String::as_str) {
                Some("--log-json") => {
                    parsed.log_json = true;
                    args.next();
                }
                Some("--context") => {
                    args.next();
                    parsed.context = Some(args.next().ok_or(ArgsError::MissingContext)?);
                }
                _ => break,
            }
        }

        let mut words: Vec<String> = args.collect();
        // `skube "logs of web in qa"` arrives as one argument.
        if let [single] = words.as_slice()
            && single.contains(char::is_whitespace)
        {
            words = shell_words::split(single)?;
        }
        parsed.words = words;

        Ok(parsed)
    }
}
