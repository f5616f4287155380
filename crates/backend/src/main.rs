pub mod dashboards;
pub mod handlers;
pub mod routes;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let (config, config_source) = shared::config::load_config()?;
    shared::logger::init(&config.logging)?;
    tracing::info!("Configuration loaded from {}", config_source);

    // Dataset is static; fail here rather than on the first request
    let dataset = dashboards::d100_sales_overview::dataset::sales_dataset()
        .map_err(|e| anyhow::anyhow!("sales dataset init failed: {e}"))?;
    tracing::info!("Sales dataset ready, years: {}", dataset.years().join(", "));

    let static_dir = config.static_dir();
    if !static_dir.exists() {
        tracing::warn!(
            "Static directory {} not found, only the API will be served",
            static_dir.display()
        );
    }

    let app = routes::configure_routes(&static_dir);
    let addr = config.bind_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
