use send_echo_request::{Args, Config, EchoSender, Runner, Verbosity};
use std::time::{Duration, Instant};

use more_asserts as ma;

fn config(args: &[&str]) -> Config {
    let cmdline: Vec<String> = std::iter::once("send-echo-request")
        .chain(args.iter().copied())
        .map(String::from)
        .collect();
    let args = Args::from_cmdline(&cmdline).unwrap_or_else(|early_exit| panic!("{}", early_exit.output));
    Config::try_from(args).unwrap()
}

#[test]
fn dry_run_succeeds_without_privileges() {
    let config = config(&["--dry-run", "-qq", "10.0.0.1", "::1"]);
    assert_eq!(Verbosity::Mute, config.verbosity);

    let runner = Runner::new(EchoSender::new(config.dry_run), &config.tasks, config.do_loop);

    assert_eq!(0, runner.run().unwrap());
}

#[test]
fn dry_run_pauses_after_each_send() {
    let config = config(&["-n", "127.0.0.1", "::1"]);

    let runner = Runner::new(EchoSender::new(config.dry_run), &config.tasks, config.do_loop);
    let start = Instant::now();
    let ping_errors = runner.run().unwrap();

    assert_eq!(0, ping_errors);
    ma::assert_ge!(start.elapsed(), Duration::from_millis(1000));
}
