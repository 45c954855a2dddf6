use std::net::SocketAddr;
use anyhow::Context;
use client::probe_session;
use connect_lib::SERVER_IP;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let addr: SocketAddr = SERVER_IP.parse().context("bad server address")?;
    probe_session(addr).await?;

    Ok(())
}
