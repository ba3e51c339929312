use crate::task::EchoTask;
use crate::ConfigError;
use argh::{EarlyExit, FromArgs};
use tracing::level_filters::LevelFilter;

pub const PROG: &str = "send-echo-request";

#[derive(FromArgs, Debug)]
/// send ICMPv6 (or ICMP) echo requests to all ADDRs given with a constant
/// delay of 0.5s between each packet sent, without waiting for answers.
#[argh(
    example = "{command_name} 127.0.0.1 ::1",
    note = "Verbosity levels:
  -qq           no output whatsoever until program crashes
  -q            report only packet send errors
  <default>     also report current loop iteration number
  -v            also report each address packet is sent to
  -vv           also report address details
Giving both -q and -v is reported as illegal use of --verbose/-v,
whichever comes first.",
    note = "Exit status:
  0             problem free operation
  non-0         if there have been any errors sending packets or otherwise
  <none>        in --loop mode, {command_name} does not exit."
)]
pub struct Args {
    /// do not actually send any packets
    #[argh(switch, short = 'n')]
    pub dry_run: bool,

    /// loop after sending packet to last addr in list
    #[argh(switch, long = "loop")]
    pub do_loop: bool,

    /// operate without generating output (repeat for less output)
    #[argh(switch, short = 'q')]
    pub quiet: u8,

    /// generate more output (repeat for more output)
    #[argh(switch, short = 'v')]
    pub verbose: u8,

    /// print program version information and exit
    #[argh(switch)]
    pub version: bool,

    /// numerical IPv4 or IPv6 addresses
    #[argh(positional, arg_name = "addr")]
    pub addresses: Vec<String>,
}

impl Args {
    /// Parses a full command line including the program name.
    ///
    /// `-qq` and `-vv` count as two `-q` or `-v` flags.
    pub fn from_cmdline(cmdline: &[String]) -> Result<Args, EarlyExit> {
        let command_name = cmdline.first().map_or(PROG, String::as_str);
        let args: Vec<&str> = cmdline
            .iter()
            .skip(1)
            .flat_map(|arg| match arg.as_str() {
                "-qq" => vec!["-q", "-q"],
                "-vv" => vec!["-v", "-v"],
                other => vec![other],
            })
            .collect();
        Args::from_args(&[command_name], &args)
    }
}

/// Text printed for `--version`.
pub fn version_text() -> String {
    format!("{PROG} {}\nLicense {}", env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_LICENSE"))
}

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Verbosity {
    Mute,
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Verbosity {
    fn from_flags(quiet: u8, verbose: u8) -> Result<Self, ConfigError> {
        match (quiet, verbose) {
            (0, 0) => Ok(Verbosity::Normal),
            (1, 0) => Ok(Verbosity::Quiet),
            (2, 0) => Ok(Verbosity::Mute),
            (0, 1) => Ok(Verbosity::Verbose),
            (0, 2) => Ok(Verbosity::VeryVerbose),
            (_, 0) => Err(ConfigError::new("Illegal use of --quiet/-q")),
            _ => Err(ConfigError::new("Illegal use of --verbose/-v")),
        }
    }
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Mute => LevelFilter::OFF,
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::DEBUG,
            Verbosity::VeryVerbose => LevelFilter::TRACE,
        }
    }
}

/// Validated command line.
#[derive(Debug)]
pub struct Config {
    pub dry_run: bool,
    pub do_loop: bool,
    pub verbosity: Verbosity,
    pub tasks: Vec<EchoTask>,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let verbosity = Verbosity::from_flags(args.quiet, args.verbose)?;
        let tasks = args
            .addresses
            .iter()
            .map(|addr_str| EchoTask::parse(addr_str))
            .collect::<Result<Vec<_>, _>>()?;
        if tasks.is_empty() {
            return Err(ConfigError::new("No address(es) given"));
        }
        Ok(Config { dry_run: args.dry_run, do_loop: args.do_loop, verbosity, tasks })
    }
}
