pub mod mongo_payment_repository;
