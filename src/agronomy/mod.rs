//! 작물 양분 요구량, 비료 환산, 재배 일정 모듈 모음.

pub mod crop_calendar;
pub mod crop_db;
pub mod fertilizer;
pub mod soil;

pub use crop_db::{CropProfile, DEFAULT_CROP};
pub use fertilizer::*;
pub use soil::SoilType;
