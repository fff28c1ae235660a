use std::io::Write;

use thiserror::Error;

use crate::catalog::{self, CatalogError};
use crate::cli::Cli;
use crate::config::{self, ConfigError};
use crate::describe::{DescribeError, InputError, MountainRecord};
use crate::detail::{MountainDetail, RenderOptions};
use crate::i18n::{self, keys, Translator};
use crate::locale::{
    FixedLocaleProvider, LocaleProvider, LocaleSettings, SystemLocaleProvider,
};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Describe(#[from] DescribeError),
    #[error("--height is required when --name is given")]
    MissingHeight,
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        AppError::Describe(value.into())
    }
}

/// CLI 인자/설정에서 로케일 제공자를 고른다.
pub fn locale_provider(cli_lang: Option<&str>, config_lang: &str) -> Box<dyn LocaleProvider> {
    match i18n::resolve_language(cli_lang, Some(config_lang)) {
        Some(tag) => {
            tracing::debug!(%tag, "using fixed locale");
            Box::new(FixedLocaleProvider::new(LocaleSettings::from_tag(&tag)))
        }
        None => Box::new(SystemLocaleProvider),
    }
}

/// 오류 출력 앞에 붙일 현지화된 접두어. 설정 파일을 읽지 못하면 `auto`로 본다.
pub fn error_prefix(cli: &Cli) -> String {
    let config_lang = config::load_or_default(&cli.config)
        .map(|cfg| cfg.language)
        .unwrap_or_else(|_| "auto".into());
    let provider = locale_provider(cli.lang.as_deref(), &config_lang);
    let tr = Translator::for_locale(&provider.current());
    tr.t(keys::ERROR_PREFIX).to_string()
}

/// 설정을 읽고 문장을 `out`에 한 줄씩 출력한다.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let provider = locale_provider(cli.lang.as_deref(), &cfg.language);
    let options = RenderOptions {
        pack_dir: cli.pack_dir.clone().or(cfg.language_pack_dir),
        measurement: cli.units.unwrap_or(cfg.measurement),
    };

    let records = match &cli.name {
        Some(name) => {
            let height = cli.height.ok_or(AppError::MissingHeight)?;
            vec![MountainRecord::from_raw(name.as_str(), height, cli.climbed)?]
        }
        None => catalog::built_in()?,
    };

    for record in records {
        let detail = MountainDetail::load(record, provider.as_ref(), options.clone())?;
        writeln!(out, "{}", detail.sentence())?;
    }
    Ok(())
}
