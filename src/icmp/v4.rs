use super::checksum::checksum;
use super::socket::{Family, TSocket, TSocketOpener};
use super::{SequenceNumber, HEADER_SIZE, IDENTIFIER};
use crate::SendError;
use pnet_packet::icmp::echo_request::MutableEchoRequestPacket;
use pnet_packet::icmp::{IcmpCode, IcmpTypes};
use pnet_packet::Packet;
use std::net::SocketAddrV4;

/// ICMP echo request header with the checksum filled in.
pub(crate) fn new_echo_request(sequence_number: SequenceNumber) -> Option<[u8; HEADER_SIZE]> {
    let mut buf = [0u8; HEADER_SIZE];
    let mut package = MutableEchoRequestPacket::new(&mut buf)?;
    package.set_icmp_type(IcmpTypes::EchoRequest);
    package.set_icmp_code(IcmpCode::new(0));
    package.set_identifier(IDENTIFIER);
    package.set_sequence_number(sequence_number.into());

    package.set_checksum(0_u16);
    let cksum = checksum(package.packet());
    package.set_checksum(cksum);
    drop(package);
    Some(buf)
}

/// Sends one echo request on a fresh raw ICMP socket.
///
/// Failing to open the socket is recoverable. A failed or short send is fatal.
pub(crate) fn send_to<O>(
    opener: &O,
    destination: &SocketAddrV4,
    sequence_number: SequenceNumber,
) -> Result<(), SendError>
where
    O: TSocketOpener,
{
    let socket = opener
        .open(Family::V4)
        .map_err(|e| SendError::recoverable("socket(AF_INET, SOCK_RAW, IPPROTO_ICMP)", e))?;

    let package = new_echo_request(sequence_number)
        .ok_or_else(|| SendError::fatal("could not create ICMP echo request"))?;

    match socket.send_to(&package, &(*destination).into()) {
        Ok(sent_bytes) if sent_bytes == package.len() => Ok(()),
        Ok(sent_bytes) => Err(SendError::fatal(format!(
            "sendto only sent {sent_bytes} bytes of {}",
            package.len()
        ))),
        Err(e) => Err(SendError::fatal(format!("sendto: {e}"))),
    }
}
