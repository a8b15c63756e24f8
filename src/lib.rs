pub mod wav;
pub mod utils;
pub mod signal;
pub mod nlms;
pub mod export;
