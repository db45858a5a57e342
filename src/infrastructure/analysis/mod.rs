mod service;

pub use service::EducationAnalysisService;
