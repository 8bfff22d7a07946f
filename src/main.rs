use std::sync::Arc;

use payments_api::infrastructure::config::settings::Config;
use payments_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(Config::load().expect("Failed to load configuration"));
	run(config).await
}
