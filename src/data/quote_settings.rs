use crate::calc::DEFAULT_VAT_RATE;
use crate::data::persistence::{get_data_dir, Persistable};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Whether the quote collects a work-day count (and shows a work period)
/// or always bills a fixed seven-day week.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteVariant {
    #[default]
    Scheduled,
    FixedWeek,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuoteSettings {
    pub vat_rate: u32,
    pub currency_unit: String,
    pub organization_name: String,
    pub bank_account: String,
    pub default_traffic_unit_cost: u64,
    pub default_storage_unit_cost: u64,
    pub default_work_days: u32,
    /// Offset used to decide what "today" is. +9 is Asia/Seoul.
    pub utc_offset_hours: i32,
    pub variant: QuoteVariant,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        QuoteSettings {
            vat_rate: DEFAULT_VAT_RATE,
            currency_unit: "원".to_string(),
            organization_name: "주식회사 다인기획".to_string(),
            bank_account: "국민은행: 900901-01-688580".to_string(),
            default_traffic_unit_cost: 50,
            default_storage_unit_cost: 50,
            default_work_days: 7,
            utc_offset_hours: 9,
            variant: QuoteVariant::Scheduled,
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: QuoteSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl QuoteSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let wrapper = SettingsWrapper {
            settings: self.clone(),
        };
        wrapper.save_to(dir)
    }
}
