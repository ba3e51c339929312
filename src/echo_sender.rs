use crate::icmp::{self, RawSocketOpener, SequenceNumber, TSocketOpener};
use crate::SendError;
use std::net::{SocketAddrV4, SocketAddrV6};

/// Sends single echo requests, one address family per method.
pub trait Pinger {
    fn send_ping4(
        &self,
        destination: &SocketAddrV4,
        sequence_number: SequenceNumber,
        label: &str,
    ) -> Result<(), SendError>;

    fn send_ping6(
        &self,
        destination: &SocketAddrV6,
        sequence_number: SequenceNumber,
        label: &str,
    ) -> Result<(), SendError>;
}

/// [`Pinger`] that opens a new socket for every echo request.
///
/// In dry-run mode nothing is opened or sent and every send succeeds.
pub struct EchoSender<O = RawSocketOpener> {
    opener: O,
    dry_run: bool,
}

impl EchoSender<RawSocketOpener> {
    pub fn new(dry_run: bool) -> Self {
        Self::with_opener(RawSocketOpener, dry_run)
    }
}

impl<O> EchoSender<O>
where
    O: TSocketOpener,
{
    pub fn with_opener(opener: O, dry_run: bool) -> Self {
        EchoSender { opener, dry_run }
    }
}

impl<O> Pinger for EchoSender<O>
where
    O: TSocketOpener,
{
    fn send_ping4(
        &self,
        destination: &SocketAddrV4,
        sequence_number: SequenceNumber,
        label: &str,
    ) -> Result<(), SendError> {
        tracing::debug!("send_ping4 {}", label);
        tracing::trace!("{:<13} {}", "sin_family", libc::AF_INET);
        tracing::trace!("{:<13} {}", "sin_addr", destination.ip());
        tracing::trace!("{:<13} {}", "sin_port", destination.port());

        if self.dry_run {
            return Ok(());
        }
        icmp::v4::send_to(&self.opener, destination, sequence_number)
    }

    fn send_ping6(
        &self,
        destination: &SocketAddrV6,
        sequence_number: SequenceNumber,
        label: &str,
    ) -> Result<(), SendError> {
        tracing::debug!("send_ping6 {}", label);
        tracing::trace!("{:<13} {}", "sin6_family", libc::AF_INET6);
        tracing::trace!("{:<13} {}", "sin6_port", destination.port());
        tracing::trace!("{:<13} {:#010x}", "sin6_flowinfo", destination.flowinfo());
        tracing::trace!("{:<13} {}", "sin6_addr", expanded(destination));
        tracing::trace!("{:<13} {:#010x}", "sin6_scope_id", destination.scope_id());

        if self.dry_run {
            return Ok(());
        }
        icmp::v6::send_to(&self.opener, destination, sequence_number)
    }
}

// All eight groups, zero padded, no `::` compression.
fn expanded(destination: &SocketAddrV6) -> String {
    destination
        .ip()
        .segments()
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icmp::socket::tests::{OnOpen, OnSend, OnSetChecksumOffset, SocketMock};
    use crate::icmp::IDENTIFIER;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn dry_run_opens_no_socket() {
        let socket_mock = SocketMock::new(OnOpen::ReturnErr, OnSetChecksumOffset::ReturnErr, OnSend::ReturnErr);
        let echo_sender = EchoSender::with_opener(socket_mock.clone(), true);

        let v4 = SocketAddrV4::new(Ipv4Addr::new(192, 0, 2, 1), 0);
        let v6 = SocketAddrV6::new(Ipv6Addr::LOCALHOST, 0, 0, 0);
        assert!(echo_sender.send_ping4(&v4, SequenceNumber::start_value(), "192.0.2.1").is_ok());
        assert!(echo_sender.send_ping6(&v6, SequenceNumber::start_value(), "::1").is_ok());

        socket_mock.should_open_number_of_sockets(0).should_send_number_of_messages(0);
    }

    #[test]
    fn socket_failure_is_recoverable() {
        let socket_mock = SocketMock::new(OnOpen::ReturnErr, OnSetChecksumOffset::ReturnDefault, OnSend::ReturnDefault);
        let echo_sender = EchoSender::with_opener(socket_mock, false);

        let v4 = SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 0);
        let result = echo_sender.send_ping4(&v4, SequenceNumber::start_value(), "10.0.0.1");

        assert!(matches!(result, Err(ref e) if !e.is_fatal()));
    }

    #[test]
    fn identifier_is_constant() {
        let socket_mock = SocketMock::new_default();
        let echo_sender = EchoSender::with_opener(socket_mock.clone(), false);

        let v4 = SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 0);
        let v6 = SocketAddrV6::new("2001:db8::1".parse().unwrap(), 0, 0, 0);
        for sequence_number in [1u16, 2, 300, u16::MAX, 0] {
            echo_sender.send_ping4(&v4, sequence_number.into(), "10.0.0.1").unwrap();
            echo_sender.send_ping6(&v6, sequence_number.into(), "2001:db8::1").unwrap();
        }

        let sent = socket_mock.sent();
        assert_eq!(10, sent.len());
        for (buf, _) in sent {
            assert_eq!(IDENTIFIER.to_be_bytes(), buf[4..6]);
        }
    }

    #[test]
    fn ipv6_checksum_is_left_to_the_kernel() {
        let socket_mock = SocketMock::new_default();
        let echo_sender = EchoSender::with_opener(socket_mock.clone(), false);

        let v6 = SocketAddrV6::new(Ipv6Addr::LOCALHOST, 0, 0, 0);
        echo_sender.send_ping6(&v6, SequenceNumber::from(9), "::1").unwrap();
        echo_sender.send_ping6(&v6, SequenceNumber::from(10), "::1").unwrap();

        socket_mock.should_set_checksum_offsets(&[2, 2]);
        for (buf, _) in socket_mock.sent() {
            assert_eq!([0u8, 0], buf[2..4]);
        }
    }

    #[test]
    fn expanded_address() {
        let v6 = SocketAddrV6::new("fe80::1:2".parse().unwrap(), 0, 0, 0);
        assert_eq!("fe80:0000:0000:0000:0000:0000:0001:0002", expanded(&v6));
    }
}
