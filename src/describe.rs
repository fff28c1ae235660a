//! 산 이름/높이/등정일을 현지화된 한 문장으로 만든다.

use chrono::NaiveDate;
use thiserror::Error;

use crate::format::{format_medium_date, format_whole_number};
use crate::i18n::{keys, I18nError, Translator};
use crate::locale::LocaleSettings;
use crate::units::{height_in_unit, LengthUnit};

/// 호출자 계약 위반.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("mountain name is empty")]
    EmptyName,
    #[error("height must not be negative (got {0} m)")]
    NegativeHeight(i64),
    #[error("height must be a finite number (got {0})")]
    NonFiniteHeight(f64),
    #[error("height must be a whole number of meters (got {0})")]
    FractionalHeight(f64),
    #[error("height does not fit in a 64-bit integer (got {0})")]
    HeightOutOfRange(f64),
    #[error("{0} m is too large to express in feet")]
    ConvertedHeightOutOfRange(i64),
}

/// 문장 생성 실패.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescribeError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error(transparent)]
    Resource(#[from] I18nError),
}

/// 산 한 개의 정보. 높이는 항상 미터로 저장한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountainRecord {
    pub name: String,
    pub height_meters: i64,
    pub climbed_date: Option<NaiveDate>,
}

impl MountainRecord {
    pub fn new(name: impl Into<String>, height_meters: i64, climbed_date: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            height_meters,
            climbed_date,
        }
    }

    /// 실수 높이를 검증해 레코드를 만든다. 데이터 파일/CLI 입력용.
    pub fn from_raw(
        name: impl Into<String>,
        height_meters: f64,
        climbed_date: Option<NaiveDate>,
    ) -> Result<Self, InputError> {
        let name = name.into();
        validate_name(&name)?;
        let height = validate_height(height_meters)?;
        Ok(Self::new(name, height, climbed_date))
    }

    pub fn describe(&self, locale: &LocaleSettings) -> Result<String, DescribeError> {
        describe(&self.name, self.height_meters, self.climbed_date, locale)
    }

    pub fn describe_with(
        &self,
        locale: &LocaleSettings,
        tr: &Translator,
    ) -> Result<String, DescribeError> {
        describe_with(&self.name, self.height_meters, self.climbed_date, locale, tr)
    }
}

/// 내장 언어 번들로 문장을 만든다.
///
/// 등정일이 있으면 `sentenceFormat`(이름, 높이, 날짜), 없으면
/// `undatedSentenceFormat`(이름, 높이)을 쓴다.
pub fn describe(
    name: &str,
    height_meters: i64,
    climbed_date: Option<NaiveDate>,
    locale: &LocaleSettings,
) -> Result<String, DescribeError> {
    let tr = Translator::for_locale(locale);
    describe_with(name, height_meters, climbed_date, locale, &tr)
}

/// 주어진 번역기로 문장을 만든다.
pub fn describe_with(
    name: &str,
    height_meters: i64,
    climbed_date: Option<NaiveDate>,
    locale: &LocaleSettings,
    tr: &Translator,
) -> Result<String, DescribeError> {
    validate_name(name)?;
    if height_meters < 0 {
        return Err(InputError::NegativeHeight(height_meters).into());
    }

    let height = height_as_string(height_meters, locale, tr)?;
    let sentence = match climbed_date {
        Some(date) => {
            let date = date_as_string(date, locale);
            tr.format(keys::SENTENCE_FORMAT, &[name, height.as_str(), date.as_str()])?
        }
        None => tr.format(keys::UNDATED_SENTENCE_FORMAT, &[name, height.as_str()])?,
    };
    tracing::debug!(locale = %locale.tag(), metric = locale.uses_metric(), %sentence, "rendered");
    Ok(sentence)
}

/// 높이를 로케일의 단위(m/ft)와 자릿수 규칙으로 표시한다.
pub fn height_as_string(
    height_meters: i64,
    locale: &LocaleSettings,
    tr: &Translator,
) -> Result<String, DescribeError> {
    let unit = LengthUnit::for_metric_preference(locale.uses_metric());
    let key = match unit {
        LengthUnit::Meter => keys::METER_FORMAT,
        LengthUnit::Foot => keys::FOOT_FORMAT,
    };
    let converted = height_in_unit(height_meters, unit)
        .ok_or(InputError::ConvertedHeightOutOfRange(height_meters))?;
    let number = format_whole_number(converted, &locale.number);
    Ok(tr.format(key, &[number.as_str()])?)
}

/// 날짜를 로케일의 medium 형식으로 표시한다. 시각은 표시하지 않는다.
pub fn date_as_string(date: NaiveDate, locale: &LocaleSettings) -> String {
    format_medium_date(date, locale.date)
}

fn validate_name(name: &str) -> Result<(), InputError> {
    if name.trim().is_empty() {
        Err(InputError::EmptyName)
    } else {
        Ok(())
    }
}

/// 실수 높이를 정수 미터로 검증한다.
pub fn validate_height(height_meters: f64) -> Result<i64, InputError> {
    if !height_meters.is_finite() {
        return Err(InputError::NonFiniteHeight(height_meters));
    }
    if height_meters.fract() != 0.0 {
        return Err(InputError::FractionalHeight(height_meters));
    }
    if height_meters < 0.0 {
        return Err(InputError::NegativeHeight(height_meters as i64));
    }
    // i64::MAX as f64 는 2^63 으로 올림되므로 같은 값도 범위 밖이다.
    if height_meters >= i64::MAX as f64 {
        return Err(InputError::HeightOutOfRange(height_meters));
    }
    Ok(height_meters as i64)
}
