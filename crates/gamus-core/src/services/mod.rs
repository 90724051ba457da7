pub mod delivery_service;

pub use delivery_service::DeliveryService;
