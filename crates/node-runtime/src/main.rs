//! # Quantum-Chain Light Node
//!
//! Entry point for the light node runtime.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Validate it for production (duplicate IPs refused)
//! 3. Initialize logging and metrics
//! 4. Build genesis and start the pipeline
//! 5. Serve `/health` and `/metrics` on the admin port
//! 6. Run until Ctrl+C, then shut down gracefully

use anyhow::{Context, Result};
use node_runtime::wiring::{admin_addr, serve_admin};
use node_runtime::{GenesisBuilder, GenesisConfig, LightNode, NodeConfig};
use quantum_telemetry::init_telemetry;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env().context("Failed to load node configuration")?;
    config
        .validate_for_production()
        .context("Node configuration is not production safe")?;

    let _telemetry =
        init_telemetry(config.telemetry.clone()).context("Failed to initialize telemetry")?;

    info!("===========================================");
    info!("  Quantum-Chain Light Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    info!(
        p2p_port = config.p2p.p2p_port,
        max_peers = config.p2p.max_peers,
        allow_duplicate_ip = config.p2p.allow_duplicate_ip,
        "Network settings"
    );

    let genesis = GenesisBuilder::new(GenesisConfig::default())
        .build()
        .context("Failed to build genesis")?;
    let node = LightNode::start(&config, &genesis).context("Failed to start light node")?;

    let (admin_stop, admin_stopped) = oneshot::channel::<()>();
    let admin = if config.telemetry.metrics_port != 0 {
        let addr = admin_addr(config.telemetry.metrics_port);
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind admin endpoint on {addr}"))?;
        Some(tokio::spawn(serve_admin(listener, async {
            let _ = admin_stopped.await;
        })))
    } else {
        None
    };

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    let _ = admin_stop.send(());
    if let Some(handle) = admin {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!(error = %e, "Admin server failed"),
            Err(e) => error!(error = %e, "Admin server task failed"),
        }
    }

    let stats = node.shutdown().await.context("Shutdown failed")?;
    info!(appended = stats.appended, dropped = stats.dropped, "Goodbye");
    Ok(())
}
