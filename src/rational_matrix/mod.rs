pub mod gauss_jordan;
pub mod matrix;
pub mod step_log;
