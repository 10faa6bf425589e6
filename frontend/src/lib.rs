pub mod app;
pub mod components;
pub mod design;
pub mod router;
pub mod switch;
pub mod telemetry;
