use rail_network::config::AppConfig;
use rail_network::loader::read_stations;
use rail_network::network::RailNetwork;
use rail_network::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    // Load the network (fail fast on bad data)
    let stations = read_stations(&config.stations_csv)?;
    let network = RailNetwork::with_fare_model(stations, config.fare_model)?;
    info!(
        path = %config.stations_csv.display(),
        stations = network.station_count(),
        regions = network.regions().len(),
        hubs = network.hub_stations(None).len(),
        "loaded rail network"
    );

    let app = create_router(AppState::new(network));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Rail fare service listening on http://{}", config.listen_addr);
    info!("  GET /                         - Network overview");
    info!("  GET /health                   - Health check");
    info!("  GET /api/regions              - Regions");
    info!("  GET /api/stations             - Stations");
    info!("  GET /api/hubs?region=         - Hub stations");
    info!("  GET /api/hubs/closest?station= - Closest hub");
    info!("  GET /journey?from=&to=        - Plan and price a journey");
    info!("  GET /api/fares?to=            - Fares from every station");

    axum::serve(listener, app).await?;
    Ok(())
}
