pub mod level_converter;
pub mod logger_repository;

pub use level_converter::LevelConverter;
pub use logger_repository::LoggerRepository;
