pub mod checksum;
mod sequence_number;
pub(crate) mod socket;
pub(crate) mod v4;
pub(crate) mod v6;

pub use sequence_number::SequenceNumber;
pub use socket::raw_socket::{RawSocket, RawSocketOpener};
pub use socket::{Family, TSocket, TSocketOpener};

/// Identifier field of every echo request this tool sends.
pub const IDENTIFIER: u16 = 0x2342;

/// Size of an ICMP and of an ICMPv6 echo request header. No payload follows.
pub(crate) const HEADER_SIZE: usize = 8;
