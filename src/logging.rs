use env_logger::{Builder, Env};
use log::LevelFilter;

/// How much diagnostic output the run produces.
///
/// Chosen once at start-up from the command line and handed to [`init`];
/// nothing else changes the log level afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map `-q` and the number of `-v` flags to a verbosity
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
        }
    }
}

/// Install the global logger. `RUST_LOG` still takes precedence when set.
pub fn init(verbosity: Verbosity) {
    let default_filter = verbosity.level_filter().to_string().to_lowercase();
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
