use super::{Family, TSocket, TSocketOpener};
use socket2::{Domain, Protocol, Type};
use std::{io, os::unix::prelude::AsRawFd};

/// Raw ICMP or ICMPv6 socket. Needs root or `CAP_NET_RAW`.
pub struct RawSocket {
    socket: socket2::Socket,
}

impl RawSocket {
    pub(crate) fn new(family: Family) -> Result<Self, io::Error> {
        let (domain, protocol) = match family {
            Family::V4 => (Domain::IPV4, Protocol::ICMPV4),
            Family::V6 => (Domain::IPV6, Protocol::ICMPV6),
        };
        tracing::trace!("creating raw socket for {:?}", family);
        let socket = socket2::Socket::new(domain, Type::RAW, Some(protocol))?;
        Ok(RawSocket { socket })
    }
}

impl TSocket for RawSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize> {
        self.socket.send_to(buf, addr)
    }

    fn set_checksum_offset(&self, offset: libc::c_int) -> io::Result<()> {
        // socket2 has no setter for IPV6_CHECKSUM.
        #[allow(clippy::cast_possible_truncation)]
        let optlen = std::mem::size_of_val(&offset) as libc::socklen_t;
        let ret = unsafe {
            libc::setsockopt(
                self.socket.as_raw_fd(),
                libc::SOL_RAW,
                libc::IPV6_CHECKSUM,
                std::ptr::addr_of!(offset).cast(),
                optlen,
            )
        };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Opens a new [`RawSocket`] for every send.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawSocketOpener;

impl TSocketOpener for RawSocketOpener {
    type Socket = RawSocket;

    fn open(&self, family: Family) -> io::Result<Self::Socket> {
        RawSocket::new(family)
    }
}
