// Effect-size figure generator: simulated conversion-rate trajectories
// under baseline / decreased / increased scenarios, rendered with plotters.
pub mod config;
pub mod plots;
pub mod sim;
