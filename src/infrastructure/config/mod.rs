pub mod mongo;
pub mod settings;
