//! Host platforms providing stores, views and timers.

#[cfg(feature = "headless")]
pub mod headless;
