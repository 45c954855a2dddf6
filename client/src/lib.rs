use std::net::SocketAddr;
use tokio::net::{TcpSocket, TcpStream};
use log::debug;
use connect_lib::{recv_chunk, send_all, SessionError, CLIENT_HELLO, RECV_LIMIT};

/// What one client session observed: the ephemeral port the kernel bound
/// locally, and whatever bytes the peer sent before our payload went out.
#[derive(Debug)]
pub struct SessionReport {
    pub local_port: u16,
    pub received: Vec<u8>,
}

/// Variant A: receive up to 1024 bytes from the peer, then send
/// `hello from client\0` (18 bytes, trailing null included).
pub async fn exchange_session(addr: SocketAddr) -> Result<SessionReport, SessionError> {
    let (mut stream, local_port) = open_session(addr).await?;

    let outcome = exchange(&mut stream).await;

    drop(stream);
    println!("closed");

    let received = outcome?;
    Ok(SessionReport { local_port, received })
}

/// Variant B: issue a zero-length receive, which yields an empty result
/// immediately, then close. No payload is sent.
pub async fn probe_session(addr: SocketAddr) -> Result<SessionReport, SessionError> {
    let (mut stream, local_port) = open_session(addr).await?;

    let outcome = recv_chunk(&mut stream, 0).await;
    if let Ok(received) = &outcome {
        println!("received {:?}", String::from_utf8_lossy(received));
    }

    drop(stream);
    println!("closed");

    let received = outcome?;
    Ok(SessionReport { local_port, received })
}

async fn open_session(addr: SocketAddr) -> Result<(TcpStream, u16), SessionError> {
    let socket = TcpSocket::new_v4().map_err(SessionError::Create)?;
    println!("created");

    debug!("connecting to {}", addr);
    let stream = socket.connect(addr).await.map_err(SessionError::Connect)?;

    let local_port = stream.local_addr().map_err(SessionError::Connect)?.port();
    println!("connected {}", local_port);

    Ok((stream, local_port))
}

async fn exchange(stream: &mut TcpStream) -> Result<Vec<u8>, SessionError> {
    let received = recv_chunk(stream, RECV_LIMIT).await?;
    println!("received {:?}", String::from_utf8_lossy(&received));

    send_all(stream, CLIENT_HELLO).await?;
    println!("sent");

    Ok(received)
}
