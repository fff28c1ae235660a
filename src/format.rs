//! 로케일 규칙에 따른 숫자/날짜 문자열 변환.
//!
//! 포매터 인스턴스를 재사용하지 않고, 호출할 때마다 전달받은 규칙만으로 계산한다.

use chrono::{Datelike, NaiveDate};

use crate::locale::{MediumDateStyle, NumberConventions};

/// 정수를 자릿수 구분 기호와 함께 표시한다. 소수부는 표시하지 않는다.
pub fn format_whole_number(value: i64, conventions: &NumberConventions) -> String {
    let digits = value.unsigned_abs().to_string();
    let size = conventions.grouping_size.max(1);
    let mut out = String::with_capacity(digits.len() + digits.len() / size * 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = match digits.len() % size {
        0 => size,
        n => n,
    };
    for (i, ch) in digits.chars().enumerate() {
        if i >= lead && (i - lead) % size == 0 {
            out.push_str(&conventions.grouping_separator);
        }
        out.push(ch);
    }
    out
}

/// 날짜를 중간 길이 형식으로 표시한다 (`Jan 5, 2016`).
pub fn format_medium_date(date: NaiveDate, style: MediumDateStyle) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match style {
        MediumDateStyle::MonthDayYear(months) => format!("{} {d}, {y}", months[m as usize - 1]),
        MediumDateStyle::DayMonthYear(months) => format!("{d} {} {y}", months[m as usize - 1]),
        MediumDateStyle::DottedNumeric => format!("{d:02}.{m:02}.{y}"),
        MediumDateStyle::YearMonthDayNumeric => format!("{y}. {m}. {d}."),
    }
}
