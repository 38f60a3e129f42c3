use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The two languages compared on every entry, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Java,
}

impl Language {
    /// Display order of the snippet sections on a card
    pub const ALL: [Language; 2] = [Language::Cpp, Language::Java];

    /// Identifier used as the snippet key and as the highlighter language
    pub fn identifier(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }

    /// Human-readable label shown above a snippet
    pub fn label(&self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source text for both languages. An empty string means there is no snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snippets {
    pub cpp: String,
    pub java: String,
}

impl Snippets {
    pub fn new(cpp: impl Into<String>, java: impl Into<String>) -> Self {
        Self {
            cpp: cpp.into(),
            java: java.into(),
        }
    }

    /// No snippet for either language
    pub fn none() -> Self {
        Self::default()
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Cpp => &self.cpp,
            Language::Java => &self.java,
        }
    }

    pub fn has(&self, language: Language) -> bool {
        !self.get(language).is_empty()
    }

    /// Snippets in display order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

/// Notes that only apply to one of the two languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java: Option<String>,
}

impl LanguageNotes {
    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::Cpp => self.cpp.as_deref(),
            Language::Java => self.java.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cpp.is_none() && self.java.is_none()
    }
}

/// Icon drawn in the badge next to an entry title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Clock,
    Users,
    Cash,
    ReceiptRefund,
    #[default]
    AcademicCap,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Clock => "clock",
            Icon::Users => "users",
            Icon::Cash => "cash",
            Icon::ReceiptRefund => "receipt-refund",
            Icon::AcademicCap => "academic-cap",
        }
    }
}

/// Colour family of the icon badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Teal,
    Sky,
    Yellow,
    Rose,
    #[default]
    Indigo,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Teal => "teal",
            Tone::Sky => "sky",
            Tone::Yellow => "yellow",
            Tone::Rose => "rose",
            Tone::Indigo => "indigo",
        }
    }
}

/// Presentation tag of an entry. Has no effect on content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub tone: Tone,
}

impl Style {
    pub const fn new(icon: Icon, tone: Tone) -> Self {
        Self { icon, tone }
    }
}

/// One row of the comparison catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "LanguageNotes::is_empty")]
    pub language_notes: LanguageNotes,
    #[serde(default)]
    pub style: Style,
    pub snippets: Snippets,
}

impl Entry {
    pub fn new(title: impl Into<String>, snippets: Snippets) -> Self {
        Self {
            title: title.into(),
            notes: None,
            language_notes: LanguageNotes::default(),
            style: Style::default(),
            snippets,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_language_note(mut self, language: Language, note: impl Into<String>) -> Self {
        let note = Some(note.into());
        match language {
            Language::Cpp => self.language_notes.cpp = note,
            Language::Java => self.language_notes.java = note,
        }
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// True when neither language has a snippet
    pub fn is_notes_only(&self) -> bool {
        Language::ALL.iter().all(|lang| !self.snippets.has(*lang))
    }
}
