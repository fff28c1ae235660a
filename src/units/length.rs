/// 1 m 당 ft (3.280839895)를 10⁻⁹ 단위 정수로 나타낸 값.
pub const FEET_PER_METER_NANO: i128 = 3_280_839_895;
const NANO: i128 = 1_000_000_000;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meter,
    Foot,
}

impl LengthUnit {
    /// 미터법 사용 여부에 맞는 표시 단위를 고른다.
    pub fn for_metric_preference(uses_metric_system: bool) -> Self {
        if uses_metric_system {
            LengthUnit::Meter
        } else {
            LengthUnit::Foot
        }
    }
}

/// 미터 단위 정수 높이를 표시 단위의 정수로 바꾼다.
///
/// `i128`로 정확히 곱한 뒤 0 방향으로 잘라낸다 (1000 m → 3280 ft).
/// 결과가 `i64`를 넘으면 `None`. 저장된 값은 건드리지 않는다.
pub fn height_in_unit(height_m: i64, unit: LengthUnit) -> Option<i64> {
    match unit {
        LengthUnit::Meter => Some(height_m),
        LengthUnit::Foot => i64::try_from(height_m as i128 * FEET_PER_METER_NANO / NANO).ok(),
    }
}
