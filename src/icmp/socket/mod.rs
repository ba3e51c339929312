use std::io;

pub(crate) mod raw_socket;

/// Address family of an echo request socket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Family {
    V4,
    V6,
}

pub trait TSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize>;

    /// Let the kernel fill in the checksum at byte `offset` of every outgoing payload.
    fn set_checksum_offset(&self, offset: libc::c_int) -> io::Result<()>;
}

/// Opens a fresh socket for one send. The socket is closed when dropped.
pub trait TSocketOpener {
    type Socket: TSocket;

    fn open(&self, family: Family) -> io::Result<Self::Socket>;
}
