use std::sync::OnceLock;

use log::Level;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const SITE_JSON: &str = include_str!("../static/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Contact {
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct WhatsApp {
    pub number: String,
    pub message: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CarouselSettings {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Facility {
    pub image: String,
    pub caption: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteConfig {
    pub clinic_name: String,
    pub tagline: String,
    pub footer_blurb: String,
    pub legal: String,
    pub contact: Contact,
    pub whatsapp: WhatsApp,
    pub carousel: CarouselSettings,
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u32,
    #[serde(default = "default_stagger_delay_ms")]
    pub stagger_delay_ms: u32,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub facilities: Vec<Facility>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

fn default_interval_ms() -> u32 {
    8000
}

fn default_counter_duration_ms() -> u32 {
    2000
}

fn default_stagger_delay_ms() -> u32 {
    100
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            clinic_name: "PetCare Clinic".to_string(),
            tagline: String::new(),
            footer_blurb: String::new(),
            legal: String::new(),
            contact: Contact {
                address: Vec::new(),
                phone: String::new(),
                email: String::new(),
            },
            whatsapp: WhatsApp {
                number: String::new(),
                message: String::new(),
            },
            carousel: CarouselSettings {
                interval_ms: default_interval_ms(),
            },
            counter_duration_ms: default_counter_duration_ms(),
            stagger_delay_ms: default_stagger_delay_ms(),
            highlights: Vec::new(),
            services: Vec::new(),
            facilities: Vec::new(),
            stats: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Prefilled chat link for the floating contact button.
    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp.number,
            urlencoding::encode(&self.whatsapp.message)
        )
    }
}

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Site content embedded at build time.
pub fn site() -> &'static SiteConfig {
    SITE.get_or_init(|| match SiteConfig::parse(SITE_JSON) {
        Ok(site) => site,
        Err(err) => {
            log::error!("Failed to parse site.json: {}", err);
            SiteConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_site_config_parses() {
        let site = SiteConfig::parse(SITE_JSON).expect("site.json should parse");
        assert_eq!(site.clinic_name, "PetCare Clinic");
        assert_eq!(site.carousel.interval_ms, 8000);
        assert_eq!(site.services.len(), 6);
        assert_eq!(site.facilities.len(), 6);
        assert!(site.stats.iter().any(|s| s.value == 2000));
    }

    #[test]
    fn missing_tunables_fall_back_to_defaults() {
        let raw = r#"{
            "clinic_name": "X",
            "tagline": "",
            "footer_blurb": "",
            "legal": "",
            "contact": { "address": [], "phone": "", "email": "" },
            "whatsapp": { "number": "1", "message": "hi" },
            "carousel": {}
        }"#;
        let site = SiteConfig::parse(raw).unwrap();
        assert_eq!(site.carousel.interval_ms, 8000);
        assert_eq!(site.counter_duration_ms, 2000);
        assert_eq!(site.stagger_delay_ms, 100);
        assert!(site.services.is_empty());
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        let mut site = SiteConfig::default();
        site.whatsapp = WhatsApp {
            number: "5511999998888".to_string(),
            message: "Olá! Quero agendar.".to_string(),
        };
        assert_eq!(
            site.whatsapp_link(),
            "https://wa.me/5511999998888?text=Ol%C3%A1%21%20Quero%20agendar."
        );
    }
}
