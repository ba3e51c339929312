use super::socket::{Family, TSocket, TSocketOpener};
use super::{SequenceNumber, HEADER_SIZE, IDENTIFIER};
use crate::SendError;
use pnet_packet::icmpv6::echo_request::MutableEchoRequestPacket;
use pnet_packet::icmpv6::{Icmpv6Code, Icmpv6Types};
use std::net::SocketAddrV6;

/// Position of the checksum field within an ICMPv6 header.
pub(crate) const CHECKSUM_OFFSET: libc::c_int = 2;

/// ICMPv6 echo request header. The checksum stays zero for the kernel to fill in.
pub(crate) fn new_echo_request(sequence_number: SequenceNumber) -> Option<[u8; HEADER_SIZE]> {
    let mut buf = [0u8; HEADER_SIZE];
    let mut package = MutableEchoRequestPacket::new(&mut buf)?;
    package.set_icmpv6_type(Icmpv6Types::EchoRequest);
    package.set_icmpv6_code(Icmpv6Code::new(0));
    package.set_checksum(0_u16);
    package.set_identifier(IDENTIFIER);
    package.set_sequence_number(sequence_number.into());
    drop(package);
    Some(buf)
}

/// Sends one echo request on a fresh raw ICMPv6 socket.
///
/// Open, checksum option and send errors are recoverable. A short send without
/// an error is fatal.
pub(crate) fn send_to<O>(
    opener: &O,
    destination: &SocketAddrV6,
    sequence_number: SequenceNumber,
) -> Result<(), SendError>
where
    O: TSocketOpener,
{
    let socket = opener
        .open(Family::V6)
        .map_err(|e| SendError::recoverable("socket(AF_INET6, SOCK_RAW, IPPROTO_ICMPV6)", e))?;

    let package = new_echo_request(sequence_number)
        .ok_or_else(|| SendError::fatal("could not create ICMPv6 echo request"))?;

    socket
        .set_checksum_offset(CHECKSUM_OFFSET)
        .map_err(|e| SendError::recoverable("setsockopt(SOL_RAW, IPV6_CHECKSUM)", e))?;

    let sent_bytes = socket
        .send_to(&package, &(*destination).into())
        .map_err(|e| SendError::recoverable("sendto", e))?;
    if sent_bytes < package.len() {
        return Err(SendError::fatal(format!(
            "sendto only sent {sent_bytes} bytes of {}",
            package.len()
        )));
    }
    Ok(())
}
