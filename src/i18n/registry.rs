//! Language registry: Single source of truth for all destination languages.
//!
//! This module provides a centralized registry of every language the relay can
//! hand to a backend. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains the names a caller may use for the language and the codes each
/// backend expects for it.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Registry key: ISO 639 code, with a region or script subtag for
    /// variants (e.g., "fr", "ceb", "pt-BR", "zh-TW")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Code understood by Google Cloud Translation (e.g., "zh-CN")
    pub google_code: &'static str,

    /// DeepL target code, `None` when DeepL cannot translate into it
    pub deepl_code: Option<&'static str>,
}

impl LanguageConfig {
    /// DeepL source codes drop the regional variant ("EN-US" -> "EN").
    pub fn deepl_source_code(&self) -> Option<&'static str> {
        self.deepl_code
            .map(|code| code.split('-').next().unwrap_or(code))
    }
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its registry code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Find a language by registry code, backend code, English name or native
    /// name, ignoring case. `_` is accepted in place of `-` in tags.
    ///
    /// Registry codes are checked first, then backend codes, then names, so
    /// "pt-PT" picks the Portugal entry even though plain "pt" shares its
    /// DeepL code.
    pub fn find_exact(&self, input: &str) -> Option<&LanguageConfig> {
        let needle = input.trim().replace('_', "-").to_lowercase();
        let matches = |value: &str| value.to_lowercase() == needle;

        self.languages
            .iter()
            .find(|lang| matches(lang.code))
            .or_else(|| {
                self.languages.iter().find(|lang| {
                    matches(lang.google_code) || lang.deepl_code.is_some_and(|code| matches(code))
                })
            })
            .or_else(|| {
                self.languages
                    .iter()
                    .find(|lang| matches(lang.name) || matches(lang.native_name))
            })
    }

    /// Get all languages.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    google_code: &'static str,
    deepl_code: Option<&'static str>,
) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        google_code,
        deepl_code,
    }
}

/// Default language configurations.
///
/// Covers the Google Cloud Translation v2 language list plus the regional
/// and script variants DeepL distinguishes.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        // DeepL-supported
        lang("en", "English", "English", "en", Some("EN-US")),
        lang("en-US", "English (United States)", "English (US)", "en", Some("EN-US")),
        lang("en-GB", "English (United Kingdom)", "English (UK)", "en", Some("EN-GB")),
        lang("fr", "French", "Français", "fr", Some("FR")),
        lang("de", "German", "Deutsch", "de", Some("DE")),
        lang("es", "Spanish", "Español", "es", Some("ES")),
        lang("it", "Italian", "Italiano", "it", Some("IT")),
        lang("pt", "Portuguese", "Português", "pt", Some("PT-PT")),
        lang("pt-BR", "Portuguese (Brazil)", "Português (Brasil)", "pt", Some("PT-BR")),
        lang("pt-PT", "Portuguese (Portugal)", "Português (Portugal)", "pt-PT", Some("PT-PT")),
        lang("nl", "Dutch", "Nederlands", "nl", Some("NL")),
        lang("pl", "Polish", "Polski", "pl", Some("PL")),
        lang("ru", "Russian", "Русский", "ru", Some("RU")),
        lang("uk", "Ukrainian", "Українська", "uk", Some("UK")),
        lang("ja", "Japanese", "日本語", "ja", Some("JA")),
        lang("zh", "Chinese", "中文", "zh-CN", Some("ZH-HANS")),
        lang("zh-TW", "Chinese (Traditional)", "繁體中文", "zh-TW", Some("ZH-HANT")),
        lang("ko", "Korean", "한국어", "ko", Some("KO")),
        lang("sv", "Swedish", "Svenska", "sv", Some("SV")),
        lang("da", "Danish", "Dansk", "da", Some("DA")),
        lang("fi", "Finnish", "Suomi", "fi", Some("FI")),
        lang("nb", "Norwegian", "Norsk bokmål", "no", Some("NB")),
        lang("el", "Greek", "Ελληνικά", "el", Some("EL")),
        lang("cs", "Czech", "Čeština", "cs", Some("CS")),
        lang("sk", "Slovak", "Slovenčina", "sk", Some("SK")),
        lang("sl", "Slovenian", "Slovenščina", "sl", Some("SL")),
        lang("ro", "Romanian", "Română", "ro", Some("RO")),
        lang("hu", "Hungarian", "Magyar", "hu", Some("HU")),
        lang("bg", "Bulgarian", "Български", "bg", Some("BG")),
        lang("et", "Estonian", "Eesti", "et", Some("ET")),
        lang("lv", "Latvian", "Latviešu", "lv", Some("LV")),
        lang("lt", "Lithuanian", "Lietuvių", "lt", Some("LT")),
        lang("tr", "Turkish", "Türkçe", "tr", Some("TR")),
        lang("id", "Indonesian", "Bahasa Indonesia", "id", Some("ID")),
        lang("ar", "Arabic", "العربية", "ar", Some("AR")),
        // Google only
        lang("af", "Afrikaans", "Afrikaans", "af", None),
        lang("sq", "Albanian", "Shqip", "sq", None),
        lang("am", "Amharic", "አማርኛ", "am", None),
        lang("hy", "Armenian", "Հայերեն", "hy", None),
        lang("as", "Assamese", "অসমীয়া", "as", None),
        lang("ay", "Aymara", "Aymar aru", "ay", None),
        lang("az", "Azerbaijani", "Azərbaycanca", "az", None),
        lang("bm", "Bambara", "Bamanankan", "bm", None),
        lang("eu", "Basque", "Euskara", "eu", None),
        lang("be", "Belarusian", "Беларуская", "be", None),
        lang("bn", "Bengali", "বাংলা", "bn", None),
        lang("bho", "Bhojpuri", "भोजपुरी", "bho", None),
        lang("bs", "Bosnian", "Bosanski", "bs", None),
        lang("my", "Burmese", "မြန်မာ", "my", None),
        lang("ca", "Catalan", "Català", "ca", None),
        lang("ceb", "Cebuano", "Cebuano", "ceb", None),
        lang("ny", "Chichewa", "Chichewa", "ny", None),
        lang("co", "Corsican", "Corsu", "co", None),
        lang("hr", "Croatian", "Hrvatski", "hr", None),
        lang("dv", "Dhivehi", "ދިވެހި", "dv", None),
        lang("doi", "Dogri", "डोगरी", "doi", None),
        lang("eo", "Esperanto", "Esperanto", "eo", None),
        lang("ee", "Ewe", "Eʋegbe", "ee", None),
        lang("fil", "Filipino", "Filipino", "fil", None),
        lang("fy", "Frisian", "Frysk", "fy", None),
        lang("gl", "Galician", "Galego", "gl", None),
        lang("ka", "Georgian", "ქართული", "ka", None),
        lang("gn", "Guarani", "Avañe'ẽ", "gn", None),
        lang("gu", "Gujarati", "ગુજરાતી", "gu", None),
        lang("ht", "Haitian Creole", "Kreyòl ayisyen", "ht", None),
        lang("ha", "Hausa", "Hausa", "ha", None),
        lang("haw", "Hawaiian", "ʻŌlelo Hawaiʻi", "haw", None),
        lang("he", "Hebrew", "עברית", "he", None),
        lang("hi", "Hindi", "हिन्दी", "hi", None),
        lang("hmn", "Hmong", "Hmoob", "hmn", None),
        lang("is", "Icelandic", "Íslenska", "is", None),
        lang("ig", "Igbo", "Igbo", "ig", None),
        lang("ilo", "Ilocano", "Ilokano", "ilo", None),
        lang("ga", "Irish", "Gaeilge", "ga", None),
        lang("jv", "Javanese", "Basa Jawa", "jv", None),
        lang("kn", "Kannada", "ಕನ್ನಡ", "kn", None),
        lang("kk", "Kazakh", "Қазақ тілі", "kk", None),
        lang("km", "Khmer", "ខ្មែរ", "km", None),
        lang("rw", "Kinyarwanda", "Ikinyarwanda", "rw", None),
        lang("gom", "Konkani", "कोंकणी", "gom", None),
        lang("kri", "Krio", "Krio", "kri", None),
        lang("ku", "Kurdish", "Kurdî", "ku", None),
        lang("ckb", "Kurdish (Sorani)", "کوردی", "ckb", None),
        lang("ky", "Kyrgyz", "Кыргызча", "ky", None),
        lang("lo", "Lao", "ລາວ", "lo", None),
        lang("la", "Latin", "Latina", "la", None),
        lang("ln", "Lingala", "Lingála", "ln", None),
        lang("lg", "Luganda", "Luganda", "lg", None),
        lang("lb", "Luxembourgish", "Lëtzebuergesch", "lb", None),
        lang("mk", "Macedonian", "Македонски", "mk", None),
        lang("mai", "Maithili", "मैथिली", "mai", None),
        lang("mg", "Malagasy", "Malagasy", "mg", None),
        lang("ms", "Malay", "Bahasa Melayu", "ms", None),
        lang("ml", "Malayalam", "മലയാളം", "ml", None),
        lang("mt", "Maltese", "Malti", "mt", None),
        lang("mni-Mtei", "Manipuri", "ꯃꯤꯇꯩꯂꯣꯟ", "mni-Mtei", None),
        lang("mi", "Maori", "Te reo Māori", "mi", None),
        lang("mr", "Marathi", "मराठी", "mr", None),
        lang("lus", "Mizo", "Mizo ṭawng", "lus", None),
        lang("mn", "Mongolian", "Монгол", "mn", None),
        lang("ne", "Nepali", "नेपाली", "ne", None),
        lang("or", "Odia", "ଓଡ଼ିଆ", "or", None),
        lang("om", "Oromo", "Afaan Oromoo", "om", None),
        lang("ps", "Pashto", "پښتو", "ps", None),
        lang("fa", "Persian", "فارسی", "fa", None),
        lang("pa", "Punjabi", "ਪੰਜਾਬੀ", "pa", None),
        lang("qu", "Quechua", "Runa Simi", "qu", None),
        lang("sm", "Samoan", "Gagana Sāmoa", "sm", None),
        lang("sa", "Sanskrit", "संस्कृतम्", "sa", None),
        lang("gd", "Scots Gaelic", "Gàidhlig", "gd", None),
        lang("nso", "Sepedi", "Sesotho sa Leboa", "nso", None),
        lang("sr", "Serbian", "Српски", "sr", None),
        lang("st", "Sesotho", "Sesotho", "st", None),
        lang("sn", "Shona", "ChiShona", "sn", None),
        lang("sd", "Sindhi", "سنڌي", "sd", None),
        lang("si", "Sinhala", "සිංහල", "si", None),
        lang("so", "Somali", "Soomaali", "so", None),
        lang("su", "Sundanese", "Basa Sunda", "su", None),
        lang("sw", "Swahili", "Kiswahili", "sw", None),
        lang("tl", "Tagalog", "Tagalog", "tl", None),
        lang("tg", "Tajik", "Тоҷикӣ", "tg", None),
        lang("ta", "Tamil", "தமிழ்", "ta", None),
        lang("tt", "Tatar", "Татарча", "tt", None),
        lang("te", "Telugu", "తెలుగు", "te", None),
        lang("th", "Thai", "ไทย", "th", None),
        lang("ti", "Tigrinya", "ትግርኛ", "ti", None),
        lang("ts", "Tsonga", "Xitsonga", "ts", None),
        lang("tk", "Turkmen", "Türkmençe", "tk", None),
        lang("ak", "Twi", "Twi", "ak", None),
        lang("ur", "Urdu", "اردو", "ur", None),
        lang("ug", "Uyghur", "ئۇيغۇرچە", "ug", None),
        lang("uz", "Uzbek", "Oʻzbekcha", "uz", None),
        lang("vi", "Vietnamese", "Tiếng Việt", "vi", None),
        lang("cy", "Welsh", "Cymraeg", "cy", None),
        lang("xh", "Xhosa", "isiXhosa", "xh", None),
        lang("yi", "Yiddish", "ייִדיש", "yi", None),
        lang("yo", "Yoruba", "Yorùbá", "yo", None),
        lang("zu", "Zulu", "isiZulu", "zu", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code() {
        let french = LanguageRegistry::get().get_by_code("fr").expect("French exists");
        assert_eq!(french.name, "French");
        assert_eq!(french.deepl_code, Some("FR"));
        assert!(LanguageRegistry::get().get_by_code("xx").is_none());
    }

    #[test]
    fn test_find_exact_matches_names_case_insensitively() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.find_exact("FRENCH").map(|l| l.code), Some("fr"));
        assert_eq!(registry.find_exact("français").map(|l| l.code), Some("fr"));
        assert_eq!(registry.find_exact("De").map(|l| l.code), Some("de"));
        assert_eq!(registry.find_exact("zh-cn").map(|l| l.code), Some("zh"));
        assert!(registry.find_exact("klingon").is_none());
    }

    #[test]
    fn test_find_exact_regional_tags() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.find_exact("pt-BR").map(|l| l.code), Some("pt-BR"));
        assert_eq!(registry.find_exact("pt_br").map(|l| l.code), Some("pt-BR"));
        assert_eq!(registry.find_exact("PT-PT").map(|l| l.code), Some("pt-PT"));
        assert_eq!(registry.find_exact("en-GB").map(|l| l.code), Some("en-GB"));
        assert_eq!(registry.find_exact("zh-Hant").map(|l| l.code), Some("zh-TW"));
        assert_eq!(registry.find_exact("no").map(|l| l.code), Some("nb"));
    }

    #[test]
    fn test_registry_covers_google_only_languages() {
        let registry = LanguageRegistry::get();
        let inputs = ["Catalan", "ca", "Swahili", "hr", "Croatian", "zh-TW", "Persian", "Malay"];
        for input in inputs {
            assert!(registry.find_exact(input).is_some(), "{} should be known", input);
        }
        let catalan = registry.get_by_code("ca").expect("Catalan exists");
        assert_eq!(catalan.google_code, "ca");
        assert!(catalan.deepl_code.is_none());
    }

    #[test]
    fn test_deepl_regional_targets() {
        let registry = LanguageRegistry::get();
        let deepl = |code: &str| registry.get_by_code(code).and_then(|l| l.deepl_code);
        assert_eq!(deepl("en-GB"), Some("EN-GB"));
        assert_eq!(deepl("en-US"), Some("EN-US"));
        assert_eq!(deepl("pt-BR"), Some("PT-BR"));
        assert_eq!(deepl("pt-PT"), Some("PT-PT"));
        assert_eq!(deepl("zh"), Some("ZH-HANS"));
        assert_eq!(deepl("zh-TW"), Some("ZH-HANT"));
    }

    #[test]
    fn test_codes_and_names_are_unique() {
        let all = LanguageRegistry::get().list_all();
        let codes: HashSet<_> = all.iter().map(|l| l.code.to_lowercase()).collect();
        assert_eq!(codes.len(), all.len());
        let names: HashSet<_> = all.iter().map(|l| l.name).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_deepl_source_code_drops_region() {
        let registry = LanguageRegistry::get();
        assert_eq!(
            registry.get_by_code("en").and_then(|l| l.deepl_source_code()),
            Some("EN")
        );
        assert_eq!(
            registry.get_by_code("pt").and_then(|l| l.deepl_source_code()),
            Some("PT")
        );
        assert_eq!(
            registry.get_by_code("zh-TW").and_then(|l| l.deepl_source_code()),
            Some("ZH")
        );
        assert_eq!(
            registry.get_by_code("hi").and_then(|l| l.deepl_source_code()),
            None
        );
    }
}
