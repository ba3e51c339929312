use send_echo_request::{logging, version_text, Args, Config, EchoSender, Runner, PROG};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cmdline: Vec<String> = std::env::args().collect();
    let args = match Args::from_cmdline(&cmdline) {
        Ok(args) => args,
        Err(early_exit) => {
            return match early_exit.status {
                Ok(()) => {
                    println!("{}", early_exit.output);
                    ExitCode::SUCCESS
                }
                Err(()) => {
                    eprintln!("{}", early_exit.output);
                    ExitCode::FAILURE
                }
            };
        }
    };

    if args.version {
        println!("{}", version_text());
        return ExitCode::SUCCESS;
    }

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{PROG}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let subscriber = logging::subscriber(config.verbosity, std::io::stderr, std::io::stdout);
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let echo_sender = EchoSender::new(config.dry_run);
    let runner = Runner::new(echo_sender, &config.tasks, config.do_loop);
    match runner.run() {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{PROG}: {e}");
            ExitCode::FAILURE
        }
    }
}
