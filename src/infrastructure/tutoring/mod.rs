mod service;

pub use service::StudentTutorService;
