use std::{
    error::Error,
    fmt::{Display, Formatter},
    io,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};

pub const SERVER_IP: &'static str = "127.0.0.1:1609";
pub const CLIENT_HELLO: &'static [u8] = b"hello from client\0";
pub const SERVER_HELLO: &'static [u8] = b"hello from server";
pub const RECV_LIMIT: usize = 1024;

#[derive(Debug)]
pub enum SessionError {
    Create(io::Error),
    Connect(io::Error),
    Recv(io::Error),
    Send(io::Error),
}

impl Error for SessionError {}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create(err) => write!(f, "socket create failed: {}", err),
            Self::Connect(err) => write!(f, "connect failed: {}", err),
            Self::Recv(err) => write!(f, "recv failed: {}", err),
            Self::Send(err) => write!(f, "send failed: {}", err),
        }
    }
}

pub async fn recv_chunk(stream: &mut TcpStream, limit: usize) -> Result<Vec<u8>, SessionError> {
    // a zero-length request completes immediately, without touching the socket
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut buffer = vec![0; limit];
    let size = stream.read(&mut buffer).await.map_err(SessionError::Recv)?;
    buffer.truncate(size);

    Ok(buffer)
}

pub async fn send_all(stream: &mut TcpStream, bytes: &[u8]) -> Result<(), SessionError> {
    stream.write_all(bytes).await.map_err(SessionError::Send)
}
