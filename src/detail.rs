//! 산 상세 문장과 로케일 변경 시 다시 그리기.
//!
//! 레코드는 한 번 받아 보관하고, 로케일/시간대 변경 이벤트가 오면
//! 호출자가 `handle_event`를 불러 새 로케일로 문장을 다시 만든다.

use crate::config::Measurement;
use crate::describe::{DescribeError, MountainRecord};
use crate::i18n::Translator;
use crate::locale::{LocaleProvider, LocaleSettings};

/// 외부 환경이 보내는 변경 알림.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleEvent {
    /// 지역 형식(로케일) 변경
    CurrentLocaleChanged,
    /// 시스템 시간대 변경
    SystemTimeZoneChanged,
}

/// 렌더링마다 적용하는 사용자 설정.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub pack_dir: Option<String>,
    pub measurement: Measurement,
}

impl RenderOptions {
    fn locale_from(&self, provider: &dyn LocaleProvider) -> LocaleSettings {
        provider
            .current()
            .with_metric_system(self.measurement.metric_override())
    }

    fn translator_for(&self, locale: &LocaleSettings) -> Translator {
        Translator::new_with_pack(&locale.tag(), self.pack_dir.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct MountainDetail {
    record: MountainRecord,
    options: RenderOptions,
    sentence: String,
}

impl MountainDetail {
    /// 레코드를 보관하고 현재 로케일로 첫 문장을 만든다.
    pub fn load(
        record: MountainRecord,
        provider: &dyn LocaleProvider,
        options: RenderOptions,
    ) -> Result<Self, DescribeError> {
        let sentence = render(&record, &options, provider)?;
        Ok(Self {
            record,
            options,
            sentence,
        })
    }

    /// 변경 알림을 받아 로케일을 다시 읽고 문장을 새로 만든다.
    ///
    /// 실패하면 이전 문장을 그대로 둔다.
    pub fn handle_event(
        &mut self,
        event: LocaleEvent,
        provider: &dyn LocaleProvider,
    ) -> Result<&str, DescribeError> {
        tracing::debug!(?event, mountain = %self.record.name, "re-rendering");
        self.sentence = render(&self.record, &self.options, provider)?;
        Ok(&self.sentence)
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn record(&self) -> &MountainRecord {
        &self.record
    }
}

fn render(
    record: &MountainRecord,
    options: &RenderOptions,
    provider: &dyn LocaleProvider,
) -> Result<String, DescribeError> {
    let locale = options.locale_from(provider);
    let tr = options.translator_for(&locale);
    record.describe_with(&locale, &tr)
}
