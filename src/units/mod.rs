//! 단위 정의 및 변환 모듈 모음.

pub mod length;

pub use length::{height_in_unit, LengthUnit, FEET_PER_METER_NANO};
