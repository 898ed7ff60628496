pub mod assets_management;
pub mod logging;
pub mod math;
pub mod platform;
pub mod rendering;
pub mod windowing;
