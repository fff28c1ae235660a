//! 지역 설정(로케일) 스냅샷과 시스템 로케일 조회.
//!
//! 렌더링할 때마다 `LocaleProvider`에서 새 `LocaleSettings`를 받아 쓴다.
//! 전역 상태를 두지 않는다.

use sys_locale::get_locale;

/// 미국식 단위를 쓰는 지역 코드.
const NON_METRIC_REGIONS: [&str; 3] = ["US", "LR", "MM"];

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const FR_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// 정수 자릿수 구분 규칙.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberConventions {
    pub grouping_separator: String,
    pub grouping_size: usize,
}

impl Default for NumberConventions {
    fn default() -> Self {
        Self {
            grouping_separator: ",".into(),
            grouping_size: 3,
        }
    }
}

/// 중간 길이(medium) 날짜 표기 방식. 요일과 시각은 포함하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediumDateStyle {
    /// `Jan 5, 2016`
    MonthDayYear(&'static [&'static str; 12]),
    /// `5 Jan 2016`
    DayMonthYear(&'static [&'static str; 12]),
    /// `05.01.2016`
    DottedNumeric,
    /// `2016. 1. 5.`
    YearMonthDayNumeric,
}

impl Default for MediumDateStyle {
    fn default() -> Self {
        MediumDateStyle::MonthDayYear(&EN_MONTHS)
    }
}

/// 현재 환경의 로케일 스냅샷. 호출자가 소유하지 않고 매번 다시 조회한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    language: String,
    region: Option<String>,
    /// 판별할 수 없으면 `None`.
    pub uses_metric_system: Option<bool>,
    pub number: NumberConventions,
    pub date: MediumDateStyle,
}

impl LocaleSettings {
    /// `en-US`, `ko_KR.UTF-8`, `de` 같은 로케일 문자열로 설정을 만든다.
    ///
    /// 언어를 알 수 없으면 영어 규칙을 쓰되 태그는 그대로 유지한다.
    pub fn from_tag(tag: &str) -> Self {
        let (language, region) = parse_tag(tag);
        let uses_metric_system = region
            .as_deref()
            .map(|r| !NON_METRIC_REGIONS.contains(&r));
        let (number, date) = conventions_for(&language, region.as_deref());
        tracing::trace!(%language, ?region, ?uses_metric_system, "locale settings parsed");
        Self {
            language,
            region,
            uses_metric_system,
            number,
            date,
        }
    }

    /// 미터법 여부를 덮어쓴다. `None`이면 지역에서 유도한 값을 유지한다.
    pub fn with_metric_system(mut self, uses_metric_system: Option<bool>) -> Self {
        if uses_metric_system.is_some() {
            self.uses_metric_system = uses_metric_system;
        }
        self
    }

    /// 미터법 사용 여부. 판별할 수 없으면 비미터법(ft)으로 간주한다.
    pub fn uses_metric(&self) -> bool {
        self.uses_metric_system.unwrap_or(false)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// 정규화된 BCP-47 형태의 태그 (`en-US`, `ko`).
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        LocaleSettings::from_tag("en-US")
    }
}

fn parse_tag(tag: &str) -> (String, Option<String>) {
    let trimmed = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    let mut parts = trimmed.split(['-', '_']).filter(|p| !p.is_empty());
    let language = match parts.next().map(str::to_lowercase) {
        // POSIX 로케일은 언어만 영어로 보고 지역은 알 수 없는 것으로 둔다.
        Some(l) if l == "c" || l == "posix" => "en".to_string(),
        Some(l) if l.chars().all(|c| c.is_ascii_alphabetic()) => l,
        _ => "en".to_string(),
    };
    let region = parts.find_map(|p| {
        let is_alpha2 = p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic());
        let is_numeric3 = p.len() == 3 && p.chars().all(|c| c.is_ascii_digit());
        (is_alpha2 || is_numeric3).then(|| p.to_uppercase())
    });
    (language, region)
}

fn conventions_for(language: &str, region: Option<&str>) -> (NumberConventions, MediumDateStyle) {
    match language {
        "en" if matches!(region, None | Some("US")) => {
            (NumberConventions::default(), MediumDateStyle::MonthDayYear(&EN_MONTHS))
        }
        "en" => (NumberConventions::default(), MediumDateStyle::DayMonthYear(&EN_MONTHS)),
        "de" => (
            NumberConventions {
                grouping_separator: ".".into(),
                grouping_size: 3,
            },
            MediumDateStyle::DottedNumeric,
        ),
        "fr" => (
            NumberConventions {
                grouping_separator: "\u{202f}".into(),
                grouping_size: 3,
            },
            MediumDateStyle::DayMonthYear(&FR_MONTHS),
        ),
        "ko" => (NumberConventions::default(), MediumDateStyle::YearMonthDayNumeric),
        _ => (NumberConventions::default(), MediumDateStyle::default()),
    }
}

/// 로케일 정보를 제공하는 외부 환경.
pub trait LocaleProvider {
    /// 현재 로케일 스냅샷을 새로 읽는다.
    fn current(&self) -> LocaleSettings;
}

/// OS 로케일(`sys-locale`)과 `LC_ALL`/`LANG` 환경 변수를 읽는다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleProvider;

impl LocaleProvider for SystemLocaleProvider {
    fn current(&self) -> LocaleSettings {
        match detect_system_locale() {
            Some(tag) => LocaleSettings::from_tag(&tag),
            None => {
                tracing::debug!("system locale unavailable, using undetermined English");
                LocaleSettings::from_tag("en")
            }
        }
    }
}

/// 고정된 스냅샷을 돌려준다. CLI의 `--lang` 지정과 테스트에서 쓴다.
#[derive(Debug, Clone)]
pub struct FixedLocaleProvider(LocaleSettings);

impl FixedLocaleProvider {
    pub fn new(settings: LocaleSettings) -> Self {
        Self(settings)
    }

    /// 다음 조회부터 돌려줄 스냅샷을 교체한다.
    pub fn set(&mut self, settings: LocaleSettings) {
        self.0 = settings;
    }
}

impl LocaleProvider for FixedLocaleProvider {
    fn current(&self) -> LocaleSettings {
        self.0.clone()
    }
}

/// 시스템 로케일 문자열을 찾는다.
pub fn detect_system_locale() -> Option<String> {
    get_locale()
        .filter(|loc| !loc.trim().is_empty())
        .or_else(|| locale_from_env(|name| std::env::var(name).ok()))
}

/// 환경 변수 우선순위: `LC_ALL` → `LANG`. 빈 값은 설정되지 않은 것으로 본다.
fn locale_from_env(var: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(var)
        .find(|loc| !loc.trim().is_empty())
}
