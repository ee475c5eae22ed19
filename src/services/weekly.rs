//! Weekly Document Locator
//!
//! Derives the identity of "this week's" checklist document from a date using
//! ISO-8601 week numbering, and provisions the document with a minimal
//! template the first time a week is touched. The locator never deletes
//! anything.

use std::fs;
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, info};

use life_dash_core::CoreResult;

use crate::storage::config::VaultConfig;

/// Document key for the ISO week containing `date`: `"<year>-W<week>"` with
/// the week zero-padded to two digits. The ISO year is used, so the last days
/// of December can belong to week 1 of the following year.
pub fn week_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Template written when a week's document does not exist yet. A title and an
/// empty checklist section; items are never pre-populated.
fn weekly_template(key: &str) -> String {
    format!("# {}\n\n## Weekly Checklist\n\n", key)
}

/// Locator for the current week's checklist document.
#[derive(Debug, Default)]
pub struct WeeklyLocator;

impl WeeklyLocator {
    /// Resolve (and provision if absent) the document for the week containing
    /// today, keyed at call time.
    pub fn resolve(config: &VaultConfig) -> CoreResult<PathBuf> {
        Self::resolve_for(config, Local::now().date_naive())
    }

    /// Resolve (and provision if absent) the document for the week containing
    /// `date`. Pure aside from the provisioning side effect.
    pub fn resolve_for(config: &VaultConfig, date: NaiveDate) -> CoreResult<PathBuf> {
        let key = week_key(date);
        let dir = config.weekly_dir();

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            debug!(dir = %dir.display(), "created weekly journal directory");
        }

        let path = dir.join(format!("{}.md", key));
        if !path.exists() {
            fs::write(&path, weekly_template(&key))?;
            info!(path = %path.display(), "provisioned weekly checklist document");
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_key_mid_year() {
        assert_eq!(week_key(date(2025, 6, 15)), "2025-W25");
    }

    #[test]
    fn test_week_key_first_week_is_zero_padded() {
        assert_eq!(week_key(date(2025, 1, 1)), "2025-W01");
    }

    #[test]
    fn test_week_key_uses_iso_year_at_boundary() {
        // Tuesday 2024-12-31 belongs to ISO week 1 of 2025.
        assert_eq!(week_key(date(2024, 12, 31)), "2025-W01");
    }

    #[test]
    fn test_same_date_resolves_identically() {
        assert_eq!(week_key(date(2025, 3, 3)), week_key(date(2025, 3, 3)));
    }

    #[test]
    fn test_resolve_provisions_template_once() {
        let temp = TempDir::new().unwrap();
        let config = VaultConfig::new(temp.path());
        let day = date(2025, 6, 15);

        let path = WeeklyLocator::resolve_for(&config, day).unwrap();
        assert_eq!(path, config.weekly_dir().join("2025-W25.md"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# 2025-W25\n\n## Weekly Checklist\n\n"
        );

        // A second resolve must not clobber existing content.
        fs::write(&path, "# 2025-W25\n\n## Weekly Checklist\n\n- [ ] keep me\n").unwrap();
        let again = WeeklyLocator::resolve_for(&config, day).unwrap();
        assert_eq!(again, path);
        assert!(fs::read_to_string(&path).unwrap().contains("keep me"));
    }
}
