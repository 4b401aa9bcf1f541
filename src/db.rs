pub mod vehicle_repo;
pub use vehicle_repo::VehicleRepository;
pub mod contact_repo;
pub use contact_repo::ContactRepository;
