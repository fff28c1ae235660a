//! 빌드 시 포함되는 샘플 산 목록.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::describe::{InputError, MountainRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid catalog entry `{name}`: {source}")]
    Invalid { name: String, source: InputError },
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    mountain: Vec<RawMountain>,
}

#[derive(Debug, Deserialize)]
struct RawMountain {
    name: String,
    height: f64,
    climbed: Option<NaiveDate>,
}

/// 내장 목록(`data/mountains.toml`)을 읽는다.
pub fn built_in() -> Result<Vec<MountainRecord>, CatalogError> {
    parse(include_str!("../data/mountains.toml"))
}

/// `[[mountain]]` 배열 형식의 TOML을 레코드로 바꾼다. 높이 단위는 미터.
pub fn parse(src: &str) -> Result<Vec<MountainRecord>, CatalogError> {
    let raw: RawCatalog = toml::from_str(src)?;
    raw.mountain
        .into_iter()
        .map(|m| {
            MountainRecord::from_raw(m.name.clone(), m.height, m.climbed).map_err(|source| {
                CatalogError::Invalid {
                    name: m.name,
                    source,
                }
            })
        })
        .collect()
}
