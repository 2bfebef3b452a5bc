use scam_rs::analysis::Analyzer;
use scam_rs::api::ApiServer;
use scam_rs::config::Config;
use scam_rs::logging::{self, LogTarget};
use scam_rs::model::load_model;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    logging::init(&config.logging, LogTarget::Stdout)?;

    info!("Starting scam-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("  Listen address: {}", config.server.listen_addr);
    info!("  Model path: {}", config.model.path);
    info!("  Spam label: {}", config.model.spam_label);

    // The model must be loaded before accepting any request
    let model = match load_model(&config.model.path) {
        Ok(model) => model,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let analyzer = Analyzer::new(Arc::new(model), config.model.spam_label.clone());
    let server = ApiServer::new(analyzer, &config.server)?;

    server.run().await?;

    Ok(())
}
