pub mod contracts;
pub mod pool_helpers;
pub mod providers;
