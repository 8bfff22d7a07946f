#![allow(dead_code)]

pub mod mongo_container;
pub mod sample;
pub mod stub_payment_repository;
