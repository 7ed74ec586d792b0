use anyhow::Result;

use crate::config;
use crate::server;

/// Run the gate server from the CLI, exactly as the `portal-gate`
/// binary does
pub async fn handle(port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or_else(|| config::config().server.port);
    server::serve(port).await
}
