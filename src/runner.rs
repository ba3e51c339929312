use crate::icmp::SequenceNumber;
use crate::task::{Destination, EchoTask};
use crate::{Pinger, SendError};

/// Sequence numbers of consecutive passes: 1, 2, ..., 65535, 0, 1, ...
pub fn sequence_numbers() -> impl Iterator<Item = SequenceNumber> {
    std::iter::successors(Some(SequenceNumber::start_value()), |sequence_number| {
        Some(sequence_number.next())
    })
}

/// Drives a [`Pinger`] over a task list, once or forever.
pub struct Runner<'a, P> {
    pinger: P,
    tasks: &'a [EchoTask],
    do_loop: bool,
}

impl<'a, P> Runner<'a, P>
where
    P: Pinger,
{
    pub fn new(pinger: P, tasks: &'a [EchoTask], do_loop: bool) -> Self {
        Runner { pinger, tasks, do_loop }
    }

    /// Runs passes until the run is over.
    ///
    /// Returns the number of failed sends of the single pass when not looping.
    /// When looping this only returns on a fatal error.
    pub fn run(&self) -> Result<usize, SendError> {
        let mut ping_errors = 0;
        for sequence_number in sequence_numbers() {
            ping_errors = self.run_pass(sequence_number)?;
            if !self.do_loop {
                break;
            }
        }
        Ok(ping_errors)
    }

    /// Sends one echo request to every task in order and sleeps after each.
    ///
    /// Recoverable errors are logged and counted, a fatal error ends the pass.
    pub fn run_pass(&self, sequence_number: SequenceNumber) -> Result<usize, SendError> {
        tracing::info!("sequenceno {}", sequence_number);

        let mut ping_errors = 0;
        for task in self.tasks {
            let result = match task.destination() {
                Destination::V4(addr) => self.pinger.send_ping4(addr, sequence_number, task.addr_str()),
                Destination::V6(addr) => self.pinger.send_ping6(addr, sequence_number, task.addr_str()),
            };
            match result {
                Ok(()) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::error!("{}", e);
                    ping_errors += 1;
                }
            }

            std::thread::sleep(task.delay());
        }
        if ping_errors > 0 {
            tracing::info!("ping_errors {}/{}", ping_errors, self.tasks.len());
        }
        Ok(ping_errors)
    }
}
