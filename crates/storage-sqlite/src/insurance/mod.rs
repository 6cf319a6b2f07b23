mod repository;

pub use repository::InsuranceRepository;
