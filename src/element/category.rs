//! Category → style tag mapping.
//!
//! Datasets spell categories inconsistently ("Alkali Metal", "alkali-metal",
//! "Lanthanoid", "Reactive nonmetal", ...). Parsing folds case and drops
//! spaces, hyphens and underscores before matching; anything unrecognised
//! maps to [`CategoryStyle::Unknown`].

use crate::render::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryStyle {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl CategoryStyle {
    pub const ALL: [CategoryStyle; 11] = [
        CategoryStyle::AlkaliMetal,
        CategoryStyle::AlkalineEarthMetal,
        CategoryStyle::TransitionMetal,
        CategoryStyle::PostTransitionMetal,
        CategoryStyle::Metalloid,
        CategoryStyle::Nonmetal,
        CategoryStyle::Halogen,
        CategoryStyle::NobleGas,
        CategoryStyle::Lanthanide,
        CategoryStyle::Actinide,
        CategoryStyle::Unknown,
    ];

    pub fn parse(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "alkalimetal" | "alkalimetals" => CategoryStyle::AlkaliMetal,
            "alkalineearthmetal" | "alkalineearthmetals" | "alkalineearth" => {
                CategoryStyle::AlkalineEarthMetal
            }
            "transitionmetal" | "transitionmetals" => CategoryStyle::TransitionMetal,
            "posttransitionmetal" | "posttransitionmetals" | "basicmetal" | "poormetal"
            | "metal" => CategoryStyle::PostTransitionMetal,
            "metalloid" | "metalloids" | "semimetal" => CategoryStyle::Metalloid,
            "nonmetal" | "nonmetals" | "reactivenonmetal" | "diatomicnonmetal"
            | "polyatomicnonmetal" | "othernonmetal" => CategoryStyle::Nonmetal,
            "halogen" | "halogens" => CategoryStyle::Halogen,
            "noblegas" | "noblegases" => CategoryStyle::NobleGas,
            "lanthanide" | "lanthanides" | "lanthanoid" | "lanthanoids" => {
                CategoryStyle::Lanthanide
            }
            "actinide" | "actinides" | "actinoid" | "actinoids" => CategoryStyle::Actinide,
            _ => CategoryStyle::Unknown,
        }
    }

    /// Stable style tag, also the key for colour overrides in the settings.
    pub const fn tag(self) -> &'static str {
        match self {
            CategoryStyle::AlkaliMetal => "alkali-metal",
            CategoryStyle::AlkalineEarthMetal => "alkaline-earth-metal",
            CategoryStyle::TransitionMetal => "transition-metal",
            CategoryStyle::PostTransitionMetal => "post-transition-metal",
            CategoryStyle::Metalloid => "metalloid",
            CategoryStyle::Nonmetal => "nonmetal",
            CategoryStyle::Halogen => "halogen",
            CategoryStyle::NobleGas => "noble-gas",
            CategoryStyle::Lanthanide => "lanthanide",
            CategoryStyle::Actinide => "actinide",
            CategoryStyle::Unknown => "unknown",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            CategoryStyle::AlkaliMetal => "Alkali metal",
            CategoryStyle::AlkalineEarthMetal => "Alkaline earth metal",
            CategoryStyle::TransitionMetal => "Transition metal",
            CategoryStyle::PostTransitionMetal => "Post-transition metal",
            CategoryStyle::Metalloid => "Metalloid",
            CategoryStyle::Nonmetal => "Nonmetal",
            CategoryStyle::Halogen => "Halogen",
            CategoryStyle::NobleGas => "Noble gas",
            CategoryStyle::Lanthanide => "Lanthanide",
            CategoryStyle::Actinide => "Actinide",
            CategoryStyle::Unknown => "Unknown",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }

    pub const fn default_fill(self) -> Rgba {
        match self {
            CategoryStyle::AlkaliMetal => Rgba::rgb(0xff, 0x8a, 0x80),
            CategoryStyle::AlkalineEarthMetal => Rgba::rgb(0xff, 0xde, 0xad),
            CategoryStyle::TransitionMetal => Rgba::rgb(0xff, 0xc0, 0xc0),
            CategoryStyle::PostTransitionMetal => Rgba::rgb(0xcc, 0xcc, 0xcc),
            CategoryStyle::Metalloid => Rgba::rgb(0xcc, 0xcc, 0x99),
            CategoryStyle::Nonmetal => Rgba::rgb(0xa0, 0xff, 0xa0),
            CategoryStyle::Halogen => Rgba::rgb(0xff, 0xff, 0x99),
            CategoryStyle::NobleGas => Rgba::rgb(0xc0, 0xff, 0xff),
            CategoryStyle::Lanthanide => Rgba::rgb(0xff, 0xbf, 0xff),
            CategoryStyle::Actinide => Rgba::rgb(0xff, 0x99, 0xcc),
            CategoryStyle::Unknown => Rgba::rgb(0xe8, 0xe8, 0xe8),
        }
    }
}
