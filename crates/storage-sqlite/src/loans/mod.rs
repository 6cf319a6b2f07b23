mod repository;

pub use repository::LoanRepository;
