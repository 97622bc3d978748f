//! Wiki language editions and their locale-specific literals.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A supported Wikipedia language edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    De,
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::Zh];

    /// Short code as used in dump file names (`enwiki`, `dewiki`).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Zh => "zh",
        }
    }

    /// Section headings that start the trailing footer, in the order they
    /// conventionally appear.
    pub fn footer_markers(self) -> &'static [&'static str] {
        match self {
            Language::En => &[
                "See also",
                "Notes",
                "References",
                "Further reading",
                "External links",
                "Related pages",
            ],
            Language::De => &[
                "Siehe auch",
                "Literatur",
                "Weblinks",
                "Einzelnachweise",
                "Anmerkungen",
                "Quellen",
            ],
            Language::Zh => &[
                "参见",
                "參見",
                "注释",
                "参考文献",
                "參考文獻",
                "参考资料",
                "參考資料",
                "延伸阅读",
                "外部链接",
                "外部連結",
            ],
        }
    }

    /// Namespace names that introduce an embedded image or file.
    pub fn caption_prefixes(self) -> &'static [&'static str] {
        match self {
            Language::En => &["File", "Image", "file", "image"],
            Language::De => &["Datei", "Bild", "File", "Image", "datei", "bild"],
            Language::Zh => &["File", "Image", "文件", "檔案", "图像", "圖像"],
        }
    }

    /// Namespace names for category links.
    pub fn category_namespaces(self) -> &'static [&'static str] {
        match self {
            Language::En => &["Category"],
            Language::De => &["Kategorie", "Category"],
            Language::Zh => &["Category", "分类", "分類"],
        }
    }

    /// Leading tokens that mark a redirect page.
    pub fn redirect_markers(self) -> &'static [&'static str] {
        match self {
            Language::En => &["#REDIRECT"],
            Language::De => &["#WEITERLEITUNG", "#REDIRECT"],
            Language::Zh => &["#重定向", "#REDIRECT"],
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "enwiki" => Ok(Language::En),
            "de" | "dewiki" => Ok(Language::De),
            "zh" | "zhwiki" => Ok(Language::Zh),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert_eq!(" zhwiki ".parse::<Language>().unwrap(), Language::Zh);
    }

    #[test]
    fn test_unsupported_language() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(ref code) if code == "xx"));
        assert_eq!(err.to_string(), "unsupported language: xx");
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_every_language_has_locale_data() {
        for lang in Language::ALL {
            assert!(!lang.footer_markers().is_empty());
            assert!(!lang.caption_prefixes().is_empty());
            assert!(!lang.category_namespaces().is_empty());
            assert!(!lang.redirect_markers().is_empty());
        }
    }
}
