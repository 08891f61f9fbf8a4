mod app;
pub use app::Sonatina;
