//! 로케일 변경 알림에 따른 재렌더링 테스트.
use std::fs;

use chrono::NaiveDate;
use international_mountains::config::Measurement;
use international_mountains::detail::{LocaleEvent, MountainDetail, RenderOptions};
use international_mountains::locale::FixedLocaleProvider;
use international_mountains::{LocaleSettings, MountainRecord};

fn everest() -> MountainRecord {
    MountainRecord::new("Everest", 8848, NaiveDate::from_ymd_opt(1953, 5, 29))
}

#[test]
fn locale_change_re_renders_cached_record() {
    let mut provider = FixedLocaleProvider::new(LocaleSettings::from_tag("en-US"));
    let mut detail = MountainDetail::load(everest(), &provider, RenderOptions::default())
        .expect("initial render");
    assert_eq!(
        detail.sentence(),
        "Everest is 29,028 feet tall and was climbed on May 29, 1953."
    );

    provider.set(LocaleSettings::from_tag("de-DE"));
    let s = detail
        .handle_event(LocaleEvent::CurrentLocaleChanged, &provider)
        .expect("re-render");
    assert_eq!(s, "Everest ist 8.848 Meter hoch und wurde am 29.05.1953 bestiegen.");
    assert_eq!(detail.record(), &everest());
}

#[test]
fn time_zone_change_also_re_renders() {
    let mut provider = FixedLocaleProvider::new(LocaleSettings::from_tag("en-GB"));
    let mut detail =
        MountainDetail::load(everest(), &provider, RenderOptions::default()).expect("render");
    provider.set(LocaleSettings::from_tag("ko-KR"));
    detail
        .handle_event(LocaleEvent::SystemTimeZoneChanged, &provider)
        .expect("re-render");
    assert_eq!(
        detail.sentence(),
        "Everest의 높이는 8,848미터이며 1953. 5. 29.에 등정되었습니다."
    );
}

#[test]
fn measurement_option_overrides_region() {
    let provider = FixedLocaleProvider::new(LocaleSettings::from_tag("en-US"));
    let options = RenderOptions {
        measurement: Measurement::Metric,
        ..RenderOptions::default()
    };
    let detail = MountainDetail::load(everest(), &provider, options).expect("render");
    assert!(detail.sentence().starts_with("Everest is 8,848 meters tall"));

    let provider = FixedLocaleProvider::new(LocaleSettings::from_tag("fr-FR"));
    let options = RenderOptions {
        measurement: Measurement::Imperial,
        ..RenderOptions::default()
    };
    let detail = MountainDetail::load(everest(), &provider, options).expect("render");
    assert!(detail.sentence().starts_with("Everest mesure 29\u{202f}028 pieds"));
}

#[test]
fn language_pack_dir_overrides_built_in_strings() {
    let dir = std::env::temp_dir().join(format!("mountains-pack-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("en-us.toml"), "meterFormat = \"%@ m\"\n").unwrap();

    let provider = FixedLocaleProvider::new(LocaleSettings::from_tag("en-US"));
    let options = RenderOptions {
        pack_dir: Some(dir.to_string_lossy().into_owned()),
        measurement: Measurement::Metric,
    };
    let detail = MountainDetail::load(
        MountainRecord::new("Everest", 8848, None),
        &provider,
        options,
    )
    .expect("render");
    assert_eq!(detail.sentence(), "Everest is 8,848 m tall.");

    fs::remove_dir_all(&dir).ok();
}
