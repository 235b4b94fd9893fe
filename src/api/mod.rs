pub mod models;
pub mod params;
pub mod percolate;
pub mod transport;
