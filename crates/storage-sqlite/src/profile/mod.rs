mod repository;

pub use repository::ProfileRepository;
