use std::sync::Arc;

use atlas_domain::SharedCatalog;
use atlas_service::AtlasService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AtlasService>,
}
impl AppState {
	pub async fn new(config: atlas_config::Config) -> color_eyre::Result<Self> {
		let catalog = SharedCatalog::new(config.catalog.path.clone()).ensure_loaded().await?;
		let service = AtlasService::new(config, catalog)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: AtlasService) -> Self {
		Self { service: Arc::new(service) }
	}
}
