mod model;
mod repository;

pub use model::ReportDB;
pub use repository::ReportRepository;
