use std::io;
use std::net::SocketAddr;

use log::warn;
use tokio::net::{TcpListener, TcpStream};
use tokio::spawn;

use connect_lib::{recv_chunk, send_all, SessionError, RECV_LIMIT, SERVER_HELLO};

/// Accepts connections forever, one task per client. Each client is greeted
/// with `hello from server`, then read until it disconnects.
pub async fn run(listener: TcpListener) -> io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        spawn(async move {
            if let Err(err) = handle_client(stream, peer).await {
                warn!("client {}: {}", peer.port(), err);
            }
        });
    }
}

/// Runs one client to completion and returns every byte it sent. The
/// `closed` line is printed however the connection ends.
pub async fn handle_client(mut stream: TcpStream, peer: SocketAddr) -> Result<Vec<u8>, SessionError> {
    println!("client {} opened", peer.port());

    let outcome = serve(&mut stream, peer).await;

    println!("client {} closed", peer.port());
    outcome
}

async fn serve(stream: &mut TcpStream, peer: SocketAddr) -> Result<Vec<u8>, SessionError> {
    send_all(stream, SERVER_HELLO).await?;
    println!(
        "client {} send `{}`",
        peer.port(),
        String::from_utf8_lossy(SERVER_HELLO)
    );

    let mut payload = Vec::new();
    loop {
        let data = recv_chunk(stream, RECV_LIMIT).await?;
        if data.is_empty() {
            break;
        }
        println!(
            "client {} recv `{}`",
            peer.port(),
            String::from_utf8_lossy(&data)
        );
        payload.extend_from_slice(&data);
    }

    Ok(payload)
}
