use anyhow::Context;
use connect_lib::SERVER_IP;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let listener = TcpListener::bind(SERVER_IP)
        .await
        .with_context(|| format!("failed to bind {}", SERVER_IP))?;
    println!("listening {}", listener.local_addr()?);

    server::run(listener).await?;

    Ok(())
}
