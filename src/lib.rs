use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::{error, info};

pub mod adapters;
pub mod domain;
pub mod infrastructure;

use crate::adapters::web::routes;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::mongo::UNIQUE_INDEX_FIELD;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::persistence::mongo_payment_repository::MongoPaymentRepository;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let _ = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.try_init();

	info!("Connecting to MongoDB at {}...", config.mongo_host);
	let repository = MongoPaymentRepository::connect(&config).await.map_err(|e| {
		error!("Invalid MongoDB configuration: {e}");
		std::io::Error::other(e)
	})?;

	repository
		.ensure_unique_index(UNIQUE_INDEX_FIELD)
		.await
		.map_err(|e| {
			error!("Could not create unique index on {UNIQUE_INDEX_FIELD:?}: {e}");
			std::io::Error::other(e)
		})?;

	let repository: Arc<dyn PaymentRepository> = Arc::new(repository);
	let repository = web::Data::from(repository);

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(repository.clone())
			.configure(routes)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
