use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::locale::LocaleSettings;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    /// 이름, 높이, 등정일 순서의 문장.
    pub const SENTENCE_FORMAT: &str = "sentenceFormat";
    /// 이름, 높이 순서의 문장. 등정일이 없는 산에 쓴다.
    pub const UNDATED_SENTENCE_FORMAT: &str = "undatedSentenceFormat";
    pub const FOOT_FORMAT: &str = "footFormat";
    pub const METER_FORMAT: &str = "meterFormat";

    pub const ERROR_PREFIX: &str = "cli.error_prefix";
}

/// 리소스가 없는 경우 마지막으로 찾는 기본 언어.
pub const DEFAULT_LANGUAGE: &str = "en";

/// 언어팩 조회/치환 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// 기본 언어까지 찾아도 키가 없다.
    #[error("missing localized resource `{key}` for locale `{locale}`")]
    MissingResource { key: String, locale: String },
    /// 템플릿이 전달되지 않은 인자를 참조한다.
    #[error("template `{key}` refers to parameter {index}, but only {supplied} were supplied")]
    Template {
        key: String,
        index: usize,
        supplied: usize,
    },
}

/// 런타임 언어 번들을 제공한다.
///
/// 조회 순서: 언어팩 디렉터리(전체 코드 → 기본 코드) → 내장 번들(전체 코드 → 기본 코드)
/// → 영어 내장 번들.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    layers: Vec<HashMap<String, String>>,
}

impl Translator {
    /// 로케일 태그로 내장 번들만 사용하는 번역기를 만든다.
    pub fn new(tag: &str) -> Self {
        Self::new_with_pack(tag, None)
    }

    /// 로케일 태그 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(tag: &str, pack_dir: Option<&str>) -> Self {
        let codes = candidate_codes(tag);
        let mut layers = Vec::new();
        if let Some(dir) = pack_dir {
            layers.extend(codes.iter().filter_map(|code| load_pack_file(dir, code)));
        }
        layers.extend(codes.iter().filter_map(|code| built_in_pack(code)));
        tracing::debug!(locale = tag, ?codes, layers = layers.len(), "translator ready");
        Self {
            locale: tag.to_string(),
            layers,
        }
    }

    /// 호스트가 준비한 번들 하나만 쓰는 번역기. 내장 번들로 폴백하지 않는다.
    pub fn with_bundle(tag: &str, bundle: HashMap<String, String>) -> Self {
        Self {
            locale: tag.to_string(),
            layers: vec![bundle],
        }
    }

    /// 로케일 스냅샷에 맞는 내장 번역기를 만든다.
    pub fn for_locale(locale: &LocaleSettings) -> Self {
        Self::new(&locale.tag())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 키를 조회해 문자열을 반환한다. 어느 번들에도 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .enumerate()
            .find_map(|(depth, layer)| layer.get(key).map(|v| (depth, v.as_str())))
            .map(|(depth, value)| {
                if depth > 0 {
                    tracing::trace!(key, depth, locale = %self.locale, "resource resolved via fallback");
                }
                value
            })
    }

    /// 키를 조회하고, 없으면 `MissingResource`를 돌려준다.
    pub fn template(&self, key: &str) -> Result<&str, I18nError> {
        self.lookup(key).ok_or_else(|| I18nError::MissingResource {
            key: key.to_string(),
            locale: self.locale.clone(),
        })
    }

    /// 템플릿을 조회해 `%@`/`%N$@` 자리에 인자를 채운다.
    pub fn format(&self, key: &str, args: &[&str]) -> Result<String, I18nError> {
        let template = self.template(key)?;
        substitute(template, args).map_err(|(index, supplied)| I18nError::Template {
            key: key.to_string(),
            index,
            supplied,
        })
    }

    /// CLI 메시지용 조회. 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }
}

/// 템플릿 치환. `%@`는 순서대로, `%N$@`는 N번째(1부터) 인자, `%%`는 `%`이다.
/// 그 밖의 `%` 시퀀스는 그대로 둔다.
///
/// 인자가 모자라면 `(참조한 번호, 전달된 개수)`를 돌려준다.
pub fn substitute(template: &str, args: &[&str]) -> Result<String, (usize, usize)> {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut next = 0usize;
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let spec = &rest[pos + 1..];
        if let Some(after) = spec.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(after) = spec.strip_prefix('@') {
            next += 1;
            out.push_str(arg_at(args, next)?);
            rest = after;
        } else if let Some((index, after)) = positional(spec) {
            out.push_str(arg_at(args, index)?);
            rest = after;
        } else {
            out.push('%');
            rest = spec;
        }
    }
    out.push_str(rest);
    Ok(out)
}

fn arg_at<'a>(args: &[&'a str], index: usize) -> Result<&'a str, (usize, usize)> {
    index
        .checked_sub(1)
        .and_then(|i| args.get(i))
        .copied()
        .ok_or((index, args.len()))
}

/// `1$@...` 형태를 읽어 (번호, 나머지)를 돌려준다.
fn positional(spec: &str) -> Option<(usize, &str)> {
    let digits = spec.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let index = spec[..digits].parse().ok()?;
    let after = spec[digits..].strip_prefix("$@")?;
    Some((index, after))
}

/// `en-GB` → `["en-gb", "en"]`. 기본 언어는 항상 마지막에 붙는다.
fn candidate_codes(tag: &str) -> Vec<String> {
    let full = tag.trim().replace('_', "-").to_lowercase();
    let mut codes = Vec::new();
    if !full.is_empty() {
        codes.push(full.clone());
        if let Some((base, _)) = full.split_once('-') {
            codes.push(base.to_string());
        }
    }
    codes.push(DEFAULT_LANGUAGE.to_string());
    codes.dedup();
    codes
}

/// CLI 플래그/설정/시스템 순으로 로케일 태그를 결정한다. `auto`는 시스템 로케일을 뜻한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> Option<String> {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim();
    if c.is_empty() || c.eq_ignore_ascii_case("auto") {
        None
    } else {
        Some(c.replace('_', "-"))
    }
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_pack_file(dir: &str, code: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{code}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        tracing::warn!(path = %path.display(), "ignoring unreadable language pack");
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(code: &str) -> Option<HashMap<String, String>> {
    match code {
        "en" => parse_toml_to_map(include_str!("../locales/en.toml")),
        "en-gb" => parse_toml_to_map(include_str!("../locales/en-gb.toml")),
        "de" => parse_toml_to_map(include_str!("../locales/de.toml")),
        "fr" => parse_toml_to_map(include_str!("../locales/fr.toml")),
        "ko" => parse_toml_to_map(include_str!("../locales/ko.toml")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_and_positional_placeholders() {
        assert_eq!(substitute("%@ is %@.", &["a", "b"]).unwrap(), "a is b.");
        assert_eq!(substitute("%2$@ then %1$@", &["a", "b"]).unwrap(), "b then a");
        assert_eq!(substitute("100%% %d %", &[]).unwrap(), "100% %d %");
    }

    #[test]
    fn missing_argument_is_reported() {
        assert_eq!(substitute("%@ %@", &["a"]), Err((2, 1)));
        assert_eq!(substitute("%0$@", &["a"]), Err((0, 1)));
    }

    #[test]
    fn candidate_codes_end_with_default() {
        assert_eq!(candidate_codes("en-GB"), ["en-gb", "en"]);
        assert_eq!(candidate_codes("ko_KR"), ["ko-kr", "ko", "en"]);
        assert_eq!(candidate_codes("en"), ["en"]);
        assert_eq!(candidate_codes(""), ["en"]);
    }

    #[test]
    fn every_built_in_pack_has_the_sentence_keys() {
        for code in ["en", "de", "fr", "ko"] {
            let map = built_in_pack(code).expect(code);
            for key in [
                keys::SENTENCE_FORMAT,
                keys::UNDATED_SENTENCE_FORMAT,
                keys::FOOT_FORMAT,
                keys::METER_FORMAT,
                keys::ERROR_PREFIX,
            ] {
                assert!(map.contains_key(key), "{code} lacks {key}");
            }
        }
    }

    #[test]
    fn resolve_prefers_cli_then_config() {
        assert_eq!(resolve_language(Some("de_DE"), Some("ko")), Some("de-DE".into()));
        assert_eq!(resolve_language(Some("auto"), Some("ko")), Some("ko".into()));
        assert_eq!(resolve_language(None, Some("auto")), None);
    }
}
