//! Game configuration and the binary's command-line options.

/// Settings that shape a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed for the session; `None` picks one at random.
    pub seed: Option<u64>,
    /// Deal a new game straight after a win.
    pub auto_new_game: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: None, auto_new_game: true }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid seed '{0}': expected an unsigned integer")]
    InvalidSeed(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unrecognized argument '{0}'")]
    UnknownArgument(String),
}

pub const USAGE: &str = "\
usage: seahaven [--seed=<u64>] [--plain] [--no-auto-deal] [--help]

  --seed <u64>     deal every game of the session from this seed
  --plain          line-oriented text interface even on a terminal
  --no-auto-deal   keep the won board instead of dealing a new game
  --help           show this message";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    pub config: GameConfig,
    pub plain: bool,
    pub show_usage: bool,
}

impl Options {
    /// Parse arguments, program name already stripped.
    ///
    /// ```
    /// use seahaven::config::Options;
    ///
    /// let opts = Options::parse(["--seed=100", "--plain"]).unwrap();
    /// assert_eq!(opts.config.seed, Some(100));
    /// assert!(opts.plain);
    /// ```
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--plain" => opts.plain = true,
                "--no-auto-deal" => opts.config.auto_new_game = false,
                "--help" | "-h" => opts.show_usage = true,
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    opts.config.seed = Some(parse_seed(value.as_ref())?);
                }
                _ => {
                    if let Some(rest) = arg.strip_prefix("--seed=") {
                        opts.config.seed = Some(parse_seed(rest)?);
                    } else {
                        return Err(ConfigError::UnknownArgument(arg.to_string()));
                    }
                }
            }
        }
        Ok(opts)
    }
}

fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    s.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::parse(Vec::<String>::new()).unwrap();
        assert_eq!(opts.config, GameConfig::default());
        assert!(opts.config.auto_new_game);
        assert!(!opts.plain);
        assert!(!opts.show_usage);
    }

    #[test]
    fn seed_both_forms() {
        assert_eq!(Options::parse(["--seed", "7"]).unwrap().config.seed, Some(7));
        assert_eq!(Options::parse(["--seed=8"]).unwrap().config.seed, Some(8));
    }

    #[test]
    fn errors() {
        assert_eq!(Options::parse(["--seed"]), Err(ConfigError::MissingValue("--seed")));
        assert_eq!(Options::parse(["--seed=x"]), Err(ConfigError::InvalidSeed("x".into())));
        assert_eq!(
            Options::parse(["--fast"]),
            Err(ConfigError::UnknownArgument("--fast".into()))
        );
    }

    #[test]
    fn flags() {
        let opts = Options::parse(["--no-auto-deal", "-h"]).unwrap();
        assert!(!opts.config.auto_new_game);
        assert!(opts.show_usage);
    }
}
