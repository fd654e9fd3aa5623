use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run {
        /// Configuration file given with `--config`; if `None`, the default
        /// path is used and may be absent
        config: Option<PathBuf>,

        /// Log file given with `--log-file`, overriding the configuration
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { config, log_file })
    }
}

pub(crate) const USAGE: &str = concat!(
    "Usage: gridsnake [--config FILE] [--log-file FILE]\n",
    "\n",
    "Play Snake on a wrap-around board in the terminal.\n",
    "\n",
    "Steer with the arrow keys, h j k l, or w a s d.  Quit with q, Esc, or Ctrl-C.\n",
    "\n",
    "Options:\n",
    "  -c, --config FILE    Read configuration from FILE\n",
    "      --log-file FILE  Append log messages to FILE\n",
    "  -h, --help           Show this help and exit\n",
    "  -V, --version        Show the program version and exit\n",
);
