//! 산 이름/높이/등정일을 현재 로케일에 맞는 한 문장으로 만든다.
//!
//! 핵심 로직은 라이브러리에 두고 CLI는 얇게 유지한다.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod describe;
pub mod detail;
pub mod format;
pub mod i18n;
pub mod locale;
pub mod units;

pub use describe::{describe, describe_with, DescribeError, InputError, MountainRecord};
pub use locale::{LocaleProvider, LocaleSettings};
