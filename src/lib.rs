pub mod arr_functions;
pub mod functions;
pub mod landscape;
pub mod plot;
pub mod sampling;
