use payments_api::infrastructure::config::settings::Config;
use payments_api::infrastructure::persistence::mongo_payment_repository::MongoPaymentRepository;
use testcontainers::GenericImage;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;

pub struct MongoTestContainer {
	pub config:     Config,
	pub repository: MongoPaymentRepository,
	pub container:  testcontainers::ContainerAsync<GenericImage>,
}

pub fn test_config(mongo_host: String) -> Config {
	Config {
		mongo_host,
		mongo_connect_timeout_secs: 5,
		server_host: "127.0.0.1".to_string(),
		server_port: 0,
		server_keepalive: 5,
	}
}

pub async fn get_test_mongo_repository() -> MongoTestContainer {
	let container = GenericImage::new("mongo", "7.0")
		.with_exposed_port(ContainerPort::Tcp(27017))
		.with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
		.start()
		.await
		.unwrap();
	let host_port = container.get_host_port_ipv4(27017).await.unwrap();
	let config = test_config(format!("127.0.0.1:{host_port}"));
	let repository = MongoPaymentRepository::connect(&config)
		.await
		.expect("Failed to connect to MongoDB");

	MongoTestContainer {
		config,
		repository,
		container,
	}
}
