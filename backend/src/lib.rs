pub mod conf;
pub mod error;
pub mod leads;
pub mod startup;
pub mod telemetry;

mod routes;
