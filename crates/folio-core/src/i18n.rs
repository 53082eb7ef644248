//! Site languages and the fallback strings shown when the backend has no data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language {:?} (expected \"en\" or \"id\")", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "id" => Ok(Language::Id),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.skills", "Skills"),
    ("nav.resume", "Resume"),
    ("nav.projects", "Projects"),
    ("nav.news", "News"),
    ("nav.services", "Services"),
    ("nav.contact", "Contact"),
    ("contact.location", "Location"),
    ("contact.locationValue", "Jakarta, Indonesia"),
    ("contact.emailLabel", "Email"),
    ("contact.emailValue", "hello@example.com"),
    ("contact.phone", "Phone"),
    ("contact.phoneValue", "-"),
    ("contact.sending", "Sending..."),
    ("contact.success", "Message sent successfully!"),
    ("news.backToNews", "Back to News"),
    ("status.unavailable", "Content is currently unavailable."),
];

const ID: &[(&str, &str)] = &[
    ("nav.home", "Beranda"),
    ("nav.about", "Tentang"),
    ("nav.skills", "Keahlian"),
    ("nav.resume", "Resume"),
    ("nav.projects", "Proyek"),
    ("nav.news", "Berita"),
    ("nav.services", "Layanan"),
    ("nav.contact", "Kontak"),
    ("contact.location", "Lokasi"),
    ("contact.locationValue", "Jakarta, Indonesia"),
    ("contact.emailLabel", "Email"),
    ("contact.emailValue", "hello@example.com"),
    ("contact.phone", "Telepon"),
    ("contact.phoneValue", "-"),
    ("contact.sending", "Mengirim..."),
    ("contact.success", "Pesan berhasil dikirim!"),
    ("news.backToNews", "Kembali ke Berita"),
    ("status.unavailable", "Konten sedang tidak tersedia."),
];

/// Looks `key` up for `lang`; a missing key is returned as-is.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    let table = match lang {
        Language::En => EN,
        Language::Id => ID,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
