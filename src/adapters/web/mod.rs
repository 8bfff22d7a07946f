use actix_web::web;

pub mod errors;
pub mod payments_handler;
pub mod response;
pub mod schema;

/// Registers the `/payments` routes. The app must carry a
/// `web::Data<dyn PaymentRepository>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(payments_handler::list_payments)
		.service(payments_handler::create_payment)
		.service(payments_handler::get_payment)
		.service(payments_handler::update_payment)
		.service(payments_handler::delete_payment);
}
