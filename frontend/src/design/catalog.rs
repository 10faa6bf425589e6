// Setting keys and the catalog of legal values for each of them.
//
// Values are stored by name and resolved here at apply time, so a catalog can
// change without invalidating names users already persisted.

use std::fmt;
use std::str::FromStr;

use super::error::DesignError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    TitleFont,
    BodyFont,
    Spacing,
    Radius,
    AnimationSpeed,
    Blur,
}

/// What a catalog value name resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    /// A font stack written to a single variable.
    Font(&'static str),
    /// A named scale, one variable per size label.
    Scale(&'static [(&'static str, &'static str)]),
    /// A single dimension.
    Dimension(&'static str),
}

#[derive(Debug)]
pub struct Setting {
    pub key: SettingKey,
    pub default: &'static str,
    pub catalog: &'static [(&'static str, Payload)],
}

impl Setting {
    pub fn lookup(&self, value: &str) -> Option<Payload> {
        self.catalog
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, payload)| *payload)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }

    /// Legal value names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.catalog.iter().map(|(name, _)| *name)
    }
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::TitleFont,
        SettingKey::BodyFont,
        SettingKey::Spacing,
        SettingKey::Radius,
        SettingKey::AnimationSpeed,
        SettingKey::Blur,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TitleFont => "title-font",
            Self::BodyFont => "body-font",
            Self::Spacing => "spacing",
            Self::Radius => "radius",
            Self::AnimationSpeed => "animation-speed",
            Self::Blur => "blur",
        }
    }

    /// Durable storage slot of the override.
    pub fn storage_key(&self) -> String {
        format!("design-{}", self.as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TitleFont => "Title font",
            Self::BodyFont => "Body font",
            Self::Spacing => "Spacing",
            Self::Radius => "Corner radius",
            Self::AnimationSpeed => "Animation speed",
            Self::Blur => "Blur",
        }
    }

    pub fn setting(&self) -> &'static Setting {
        match self {
            Self::TitleFont => &TITLE_FONT,
            Self::BodyFont => &BODY_FONT,
            Self::Spacing => &SPACING,
            Self::Radius => &RADIUS,
            Self::AnimationSpeed => &ANIMATION_SPEED,
            Self::Blur => &BLUR,
        }
    }

    pub fn default_value(&self) -> &'static str {
        self.setting().default
    }

    /// Style variable a scalar payload is written to, or the prefix of the
    /// per-label variables of a scale.
    pub(crate) fn property(&self) -> &'static str {
        match self {
            Self::TitleFont => "--font-title",
            Self::BodyFont => "--font-mono",
            Self::Spacing => "--space",
            Self::Radius => "--radius",
            Self::AnimationSpeed => "--transition",
            Self::Blur => "--blur-amount",
        }
    }

    /// Value written for one entry of this key's payload.
    pub(crate) fn property_value(&self, raw: &str) -> String {
        match self {
            Self::AnimationSpeed => format!("{raw} var(--ease-out-expo)"),
            _ => raw.to_owned(),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DesignError::UnknownKey(s.to_owned()))
    }
}

static TITLE_FONT: Setting = Setting {
    key: SettingKey::TitleFont,
    default: "roca",
    catalog: &[
        (
            "roca",
            Payload::Font("'roca', 'Space Grotesk', system-ui, sans-serif"),
        ),
        (
            "space-grotesk",
            Payload::Font("'Space Grotesk', system-ui, sans-serif"),
        ),
        ("inter", Payload::Font("'Inter', system-ui, sans-serif")),
        ("system", Payload::Font("system-ui, -apple-system, sans-serif")),
    ],
};

static BODY_FONT: Setting = Setting {
    key: SettingKey::BodyFont,
    default: "jetbrains",
    catalog: &[
        (
            "jetbrains",
            Payload::Font("'JetBrains Mono', 'SF Mono', monospace"),
        ),
        ("fira", Payload::Font("'Fira Code', monospace")),
        ("sf-mono", Payload::Font("'SF Mono', 'Monaco', monospace")),
        ("system-mono", Payload::Font("ui-monospace, monospace")),
    ],
};

static SPACING: Setting = Setting {
    key: SettingKey::Spacing,
    default: "default",
    catalog: &[
        (
            "compact",
            Payload::Scale(&[
                ("xs", "2px"),
                ("sm", "4px"),
                ("md", "12px"),
                ("lg", "16px"),
                ("xl", "24px"),
            ]),
        ),
        (
            "default",
            Payload::Scale(&[
                ("xs", "4px"),
                ("sm", "8px"),
                ("md", "16px"),
                ("lg", "24px"),
                ("xl", "32px"),
            ]),
        ),
        (
            "relaxed",
            Payload::Scale(&[
                ("xs", "6px"),
                ("sm", "12px"),
                ("md", "20px"),
                ("lg", "32px"),
                ("xl", "48px"),
            ]),
        ),
    ],
};

static RADIUS: Setting = Setting {
    key: SettingKey::Radius,
    default: "default",
    catalog: &[
        (
            "sharp",
            Payload::Scale(&[
                ("sm", "2px"),
                ("md", "4px"),
                ("lg", "8px"),
                ("xl", "12px"),
                ("full", "100px"),
            ]),
        ),
        (
            "default",
            Payload::Scale(&[
                ("sm", "8px"),
                ("md", "12px"),
                ("lg", "20px"),
                ("xl", "24px"),
                ("full", "100px"),
            ]),
        ),
        (
            "rounded",
            Payload::Scale(&[
                ("sm", "12px"),
                ("md", "16px"),
                ("lg", "28px"),
                ("xl", "32px"),
                ("full", "100px"),
            ]),
        ),
        (
            "pill",
            Payload::Scale(&[
                ("sm", "100px"),
                ("md", "100px"),
                ("lg", "100px"),
                ("xl", "100px"),
                ("full", "100px"),
            ]),
        ),
    ],
};

static ANIMATION_SPEED: Setting = Setting {
    key: SettingKey::AnimationSpeed,
    default: "default",
    catalog: &[
        (
            "off",
            Payload::Scale(&[("fast", "0s"), ("normal", "0s"), ("slow", "0s")]),
        ),
        (
            "reduced",
            Payload::Scale(&[("fast", "0.05s"), ("normal", "0.15s"), ("slow", "0.25s")]),
        ),
        (
            "default",
            Payload::Scale(&[("fast", "0.15s"), ("normal", "0.3s"), ("slow", "0.5s")]),
        ),
        (
            "fast",
            Payload::Scale(&[("fast", "0.1s"), ("normal", "0.2s"), ("slow", "0.35s")]),
        ),
    ],
};

static BLUR: Setting = Setting {
    key: SettingKey::Blur,
    default: "default",
    catalog: &[
        ("off", Payload::Dimension("0px")),
        ("default", Payload::Dimension("20px")),
        ("intense", Payload::Dimension("40px")),
    ],
};
