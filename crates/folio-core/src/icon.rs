//! Icon names from content payloads mapped onto a closed set of tags.

use serde::Serialize;
use std::fmt;

/// Icons the site knows how to draw. Anything else becomes [`IconTag::HelpCircle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconTag {
    Code,
    Database,
    Brain,
    Server,
    Cloud,
    Smartphone,
    Globe,
    BarChart,
    Cpu,
    Layers,
    Palette,
    Shield,
    Terminal,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    HelpCircle,
}

impl IconTag {
    pub const FALLBACK: IconTag = IconTag::HelpCircle;

    pub const ALL: [IconTag; 19] = [
        IconTag::Code,
        IconTag::Database,
        IconTag::Brain,
        IconTag::Server,
        IconTag::Cloud,
        IconTag::Smartphone,
        IconTag::Globe,
        IconTag::BarChart,
        IconTag::Cpu,
        IconTag::Layers,
        IconTag::Palette,
        IconTag::Shield,
        IconTag::Terminal,
        IconTag::Mail,
        IconTag::Phone,
        IconTag::MapPin,
        IconTag::Github,
        IconTag::Linkedin,
        IconTag::HelpCircle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IconTag::Code => "Code",
            IconTag::Database => "Database",
            IconTag::Brain => "Brain",
            IconTag::Server => "Server",
            IconTag::Cloud => "Cloud",
            IconTag::Smartphone => "Smartphone",
            IconTag::Globe => "Globe",
            IconTag::BarChart => "BarChart",
            IconTag::Cpu => "Cpu",
            IconTag::Layers => "Layers",
            IconTag::Palette => "Palette",
            IconTag::Shield => "Shield",
            IconTag::Terminal => "Terminal",
            IconTag::Mail => "Mail",
            IconTag::Phone => "Phone",
            IconTag::MapPin => "MapPin",
            IconTag::Github => "Github",
            IconTag::Linkedin => "Linkedin",
            IconTag::HelpCircle => "HelpCircle",
        }
    }

    /// Looks up a name such as `bar-chart`, `map_pin`, `help circle` or `Cpu`.
    /// Case is ignored once the words are joined, so `CODE` and `BAR-CHART` match.
    pub fn from_name(name: Option<&str>) -> IconTag {
        let pascal = match name.map(to_pascal_case) {
            Some(p) if !p.is_empty() => p,
            _ => return IconTag::FALLBACK,
        };
        IconTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(&pascal))
            .unwrap_or(IconTag::FALLBACK)
    }
}

impl fmt::Display for IconTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits on any non-alphanumeric char and upper-cases the first char of each word.
fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_conversion() {
        assert_eq!(to_pascal_case("bar-chart"), "BarChart");
        assert_eq!(to_pascal_case("map_pin"), "MapPin");
        assert_eq!(to_pascal_case("help  circle"), "HelpCircle");
        assert_eq!(to_pascal_case("Cpu"), "Cpu");
        assert_eq!(to_pascal_case("bar.chart"), "BarChart");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn known_names_map() {
        assert_eq!(IconTag::from_name(Some("code")), IconTag::Code);
        assert_eq!(IconTag::from_name(Some("bar-chart")), IconTag::BarChart);
        assert_eq!(IconTag::from_name(Some("MapPin")), IconTag::MapPin);
        assert_eq!(IconTag::from_name(Some("map-pin")), IconTag::MapPin);
    }

    #[test]
    fn names_match_regardless_of_case_and_separator() {
        assert_eq!(IconTag::from_name(Some("CODE")), IconTag::Code);
        assert_eq!(IconTag::from_name(Some("Brain")), IconTag::Brain);
        assert_eq!(IconTag::from_name(Some("brain")), IconTag::Brain);
        assert_eq!(IconTag::from_name(Some("BAR-CHART")), IconTag::BarChart);
        assert_eq!(IconTag::from_name(Some("bar.chart")), IconTag::BarChart);
        assert_eq!(IconTag::from_name(Some("Help/Circle")), IconTag::HelpCircle);
        assert_eq!(IconTag::from_name(Some("  github ")), IconTag::Github);
    }

    #[test]
    fn unknown_or_absent_falls_back() {
        assert_eq!(IconTag::from_name(None), IconTag::HelpCircle);
        assert_eq!(IconTag::from_name(Some("")), IconTag::HelpCircle);
        assert_eq!(IconTag::from_name(Some("--")), IconTag::HelpCircle);
        assert_eq!(IconTag::from_name(Some("rocket-ship")), IconTag::HelpCircle);
    }

    #[test]
    fn every_tag_roundtrips_through_its_name() {
        for tag in IconTag::ALL {
            assert_eq!(IconTag::from_name(Some(tag.as_str())), tag);
        }
    }
}
