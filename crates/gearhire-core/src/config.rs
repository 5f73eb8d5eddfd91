//! Site configuration.
//!
//! Each region keeps its own popover footprint and action menu, so the
//! wording and contact targets can differ between the hero, the navbar,
//! product cards and so on. Stored as JSON.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::actions::{ActionSpec, ActionTarget};
use crate::deeplink::normalize_phone;
use crate::error::{CoreResult, GearError};
use crate::types::{Region, Size};

pub const DEFAULT_PHONE: &str = "+52 55 1234 5678";
pub const DEFAULT_PORTAL_URL: &str = "https://portal.gearhire.example/quote";

/// Maximum entries in one popover menu.
pub const MAX_ACTIONS: usize = 2;

/// Popover settings for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSettings {
    /// Estimated rendered size of the popover panel
    pub popover: Size,
    /// Menu entries, in display order
    pub actions: Vec<ActionSpec>,
}

impl RegionSettings {
    /// Built-in settings for `region`.
    pub fn defaults_for(region: Region) -> Self {
        let (message_label, template, portal_label) = match region {
            Region::Hero => (
                "Get a quote on WhatsApp",
                "Hi! I'd like a quote for my event.",
                "Book online",
            ),
            Region::Navbar => (
                "Chat with us",
                "Hi, I have a question about renting equipment.",
                "Customer portal",
            ),
            Region::Footer => (
                "Message us",
                "Hello, I'd like more information about your services.",
                "Customer portal",
            ),
            Region::EventGrid => (
                "Plan on WhatsApp",
                "Hi, I'm planning a {title} and need equipment.",
                "See packages",
            ),
            Region::ProductGrid => (
                "Ask availability",
                "Hi, is the {title} available?",
                "Reserve online",
            ),
            Region::CatalogDetail => (
                "Rent via WhatsApp",
                "Hi, I'd like to rent the {title}. What are the rates?",
                "Reserve online",
            ),
        };

        Self {
            popover: region.default_popover_size(),
            actions: vec![
                ActionSpec::messaging(message_label, DEFAULT_PHONE, template),
                ActionSpec::portal(portal_label, DEFAULT_PORTAL_URL),
            ],
        }
    }
}

/// Whole-site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub business_name: String,
    pub regions: BTreeMap<Region, RegionSettings>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "GearHire Event Rentals".to_string(),
            regions: Region::ALL
                .into_iter()
                .map(|region| (region, RegionSettings::defaults_for(region)))
                .collect(),
        }
    }
}

impl SiteConfig {
    /// Settings for `region`, falling back to the built-in ones.
    pub fn region(&self, region: Region) -> RegionSettings {
        self.regions
            .get(&region)
            .cloned()
            .unwrap_or_else(|| RegionSettings::defaults_for(region))
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), regions = config.regions.len(), "Loaded site config");
        Ok(config)
    }

    /// [`load`](Self::load) if `path` exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No site config, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> CoreResult<()> {
        for (region, settings) in &self.regions {
            let invalid = |msg: String| GearError::InvalidConfig(format!("{}: {}", region, msg));

            let Size { width, height } = settings.popover;
            if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
                return Err(invalid(format!("popover size {} must be positive", settings.popover)));
            }

            if settings.actions.is_empty() || settings.actions.len() > MAX_ACTIONS {
                return Err(invalid(format!(
                    "expected 1-{} actions, found {}",
                    MAX_ACTIONS,
                    settings.actions.len()
                )));
            }

            for action in &settings.actions {
                match &action.target {
                    ActionTarget::Messaging { phone, .. } => {
                        if normalize_phone(phone).is_empty() {
                            return Err(invalid(format!("action '{}' has no phone digits", action.label)));
                        }
                    }
                    ActionTarget::Portal { url } => {
                        url::Url::parse(url)
                            .map_err(|e| invalid(format!("action '{}' url: {}", action.label, e)))?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.regions.len(), Region::ALL.len());
    }

    #[test]
    fn regions_keep_distinct_wording() {
        let config = SiteConfig::default();
        let hero = config.region(Region::Hero);
        let footer = config.region(Region::Footer);
        assert_ne!(hero.actions[0], footer.actions[0]);
    }

    #[test]
    fn missing_region_falls_back_to_defaults() {
        let config = SiteConfig {
            business_name: "Test".into(),
            regions: BTreeMap::new(),
        };
        assert_eq!(
            config.region(Region::Navbar),
            RegionSettings::defaults_for(Region::Navbar)
        );
    }

    #[test]
    fn save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("site.json");

        let mut config = SiteConfig::default();
        config.business_name = "Party Supply Co".into();
        config.save(&path).unwrap();

        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::load_or_default(temp.path().join("absent.json")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{ "business_name": "Tents R Us" }"#).unwrap();
        assert_eq!(config.business_name, "Tents R Us");
        assert_eq!(config.regions.len(), Region::ALL.len());
    }

    #[test]
    fn rejects_too_many_actions() {
        let mut config = SiteConfig::default();
        let settings = config.regions.get_mut(&Region::Hero).unwrap();
        settings.actions.push(ActionSpec::portal("Third", DEFAULT_PORTAL_URL));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("hero"));
    }

    #[test]
    fn rejects_non_positive_popover() {
        let mut config = SiteConfig::default();
        config.regions.get_mut(&Region::Footer).unwrap().popover = Size::new(0.0, 90.0);
        assert!(matches!(config.validate(), Err(GearError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_phone_without_digits() {
        let mut config = SiteConfig::default();
        config.regions.get_mut(&Region::Navbar).unwrap().actions[0] =
            ActionSpec::messaging("Chat", "n/a", "Hi");
        assert!(matches!(config.validate(), Err(GearError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_bad_portal_url() {
        let mut config = SiteConfig::default();
        config.regions.get_mut(&Region::Hero).unwrap().actions[0] = ActionSpec::portal("Quote", "not a url");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GearError::InvalidConfig(_)));
        assert!(err.to_string().contains("'Quote' url"));
    }

    #[test]
    fn rejects_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(SiteConfig::load(&path), Err(GearError::Json(_))));
    }
}
