use nutype::nutype;

pub const MAX_LANGUAGE_CODE_LENGTH: usize = 16;

/// Language code as written in the catalog (`en`, `pt-br`, ... or the `none` placeholder).
///
/// ASCII letters, digits, `-` and `_`, so regional tags such as `pt-BR` load.
#[nutype(
    sanitize(trim, lowercase),
    validate(
        not_empty,
        len_char_max = MAX_LANGUAGE_CODE_LENGTH,
        predicate = |code: &str| code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct LanguageCode(String);

/// Display labels for a language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageLabel {
    pub code: &'static str,
    pub emoji: &'static str,
    pub native_name: &'static str,
    pub english_name: &'static str,
}

const LABELS: &[LanguageLabel] = &[
    label("en", "🇺🇸", "English", "English"),
    label("pt", "🇵🇹", "Português", "Portuguese"),
    label("ja", "🇯🇵", "日本語", "Japanese"),
    label("es", "🇪🇸", "Español", "Spanish"),
    label("fr", "🇫🇷", "Français", "French"),
    label("ko", "🇰🇷", "한국어", "Korean"),
    label("ru", "🇷🇺", "Русский", "Russian"),
    label("zh", "🇨🇳", "中文", "Chinese"),
    label("de", "🇩🇪", "Deutsch", "German"),
    label("sv", "🇸🇪", "Svenska", "Swedish"),
    label("th", "🇹🇭", "ไทย", "Thai"),
    label("cn", "🇨🇳", "中文", "Chinese"),
    label("vn", "🇻🇳", "Tiếng Việt", "Vietnamese"),
    label("none", "💭", "None", "No specific language"),
];

const fn label(
    code: &'static str,
    emoji: &'static str,
    native_name: &'static str,
    english_name: &'static str,
) -> LanguageLabel {
    LanguageLabel {
        code,
        emoji,
        native_name,
        english_name,
    }
}

/// Looks up the display labels for a code, case-insensitively.
pub fn language_label(code: &str) -> Option<&'static LanguageLabel> {
    let code = code.trim();
    LABELS
        .iter()
        .find(|label| label.code.eq_ignore_ascii_case(code))
}

impl LanguageLabel {
    /// Tooltip text, e.g. `🇵🇹 Português (Portuguese) (pt)`.
    ///
    /// English is shown once since both names are the same.
    pub fn describe(&self) -> String {
        if self.native_name == self.english_name {
            format!("{} {} ({})", self.emoji, self.native_name, self.code)
        } else {
            format!(
                "{} {} ({}) ({})",
                self.emoji, self.native_name, self.english_name, self.code
            )
        }
    }

    /// Short badge text, e.g. `pt🇵🇹`.
    pub fn badge(&self) -> String {
        format!("{}{}", self.code, self.emoji)
    }
}
