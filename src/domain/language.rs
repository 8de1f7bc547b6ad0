// Translation language table
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> Language {
    Language {
        code,
        name,
        native_name,
    }
}

pub const LANGUAGES: &[Language] = &[
    lang("af", "Afrikaans", "Afrikaans"),
    lang("am", "Amharic", "አማርኛ"),
    lang("ar", "Arabic", "العربية"),
    lang("as", "Assamese", "অসমীয়া"),
    lang("az", "Azerbaijani", "Azərbaycan"),
    lang("ba", "Bashkir", "Bashkir"),
    lang("bg", "Bulgarian", "Български"),
    lang("bn", "Bangla", "বাংলা"),
    lang("bo", "Tibetan", "བོད་སྐད་"),
    lang("bs", "Bosnian", "Bosanski"),
    lang("ca", "Catalan", "Català"),
    lang("cs", "Czech", "Čeština"),
    lang("cy", "Welsh", "Cymraeg"),
    lang("da", "Danish", "Dansk"),
    lang("de", "German", "Deutsch"),
    lang("dv", "Divehi", "ދިވެހިބަސް"),
    lang("el", "Greek", "Ελληνικά"),
    lang("en", "English", "English"),
    lang("es", "Spanish", "Español"),
    lang("et", "Estonian", "Eesti"),
    lang("eu", "Basque", "Euskara"),
    lang("fa", "Persian", "فارسی"),
    lang("fi", "Finnish", "Suomi"),
    lang("fil", "Filipino", "Filipino"),
    lang("fj", "Fijian", "Na Vosa Vakaviti"),
    lang("fo", "Faroese", "Føroyskt"),
    lang("fr", "French", "Français"),
    lang("fr-CA", "French (Canada)", "Français (Canada)"),
    lang("ga", "Irish", "Gaeilge"),
    lang("gl", "Galician", "Galego"),
    lang("gu", "Gujarati", "ગુજરાતી"),
    lang("he", "Hebrew", "עברית"),
    lang("hi", "Hindi", "हिन्दी"),
    lang("hr", "Croatian", "Hrvatski"),
    lang("ht", "Haitian Creole", "Haitian Creole"),
    lang("hu", "Hungarian", "Magyar"),
    lang("hy", "Armenian", "Հայերեն"),
    lang("id", "Indonesian", "Indonesia"),
    lang("ikt", "Inuinnaqtun", "Inuinnaqtun"),
    lang("is", "Icelandic", "Íslenska"),
    lang("it", "Italian", "Italiano"),
    lang("iu", "Inuktitut", "ᐃᓄᒃᑎᑐᑦ"),
    lang("iu-Latn", "Inuktitut (Latin)", "Inuktitut (Latin)"),
    lang("ja", "Japanese", "日本語"),
    lang("ka", "Georgian", "ქართული"),
    lang("kk", "Kazakh", "Қазақ Тілі"),
    lang("km", "Khmer", "ខ្មែរ"),
    lang("kmr", "Kurdish (Northern)", "Kurdî (Bakur)"),
    lang("kn", "Kannada", "ಕನ್ನಡ"),
    lang("ko", "Korean", "한국어"),
    lang("ku", "Kurdish (Central)", "Kurdî (Navîn)"),
    lang("ky", "Kyrgyz", "Kyrgyz"),
    lang("lo", "Lao", "ລາວ"),
    lang("lt", "Lithuanian", "Lietuvių"),
    lang("lv", "Latvian", "Latviešu"),
    lang("lzh", "Chinese (Literary)", "中文 (文言文)"),
    lang("mg", "Malagasy", "Malagasy"),
    lang("mi", "Māori", "Te Reo Māori"),
    lang("mk", "Macedonian", "Македонски"),
    lang("ml", "Malayalam", "മലയാളം"),
    lang("mn-Cyrl", "Mongolian (Cyrillic)", "Mongolian (Cyrillic)"),
    lang("mn-Mong", "Mongolian (Traditional)", "ᠮᠣᠩᠭᠣᠯ ᠬᠡᠯᠡ"),
    lang("mr", "Marathi", "मराठी"),
    lang("ms", "Malay", "Melayu"),
    lang("mt", "Maltese", "Malti"),
    lang("mww", "Hmong Daw", "Hmong Daw"),
    lang("my", "Myanmar (Burmese)", "မြန်မာ"),
    lang("nb", "Norwegian", "Norsk Bokmål"),
    lang("ne", "Nepali", "नेपाली"),
    lang("nl", "Dutch", "Nederlands"),
    lang("or", "Odia", "ଓଡ଼ିଆ"),
    lang("otq", "Querétaro Otomi", "Hñähñu"),
    lang("pa", "Punjabi", "ਪੰਜਾਬੀ"),
    lang("pl", "Polish", "Polski"),
    lang("prs", "Dari", "دری"),
    lang("ps", "Pashto", "پښتو"),
    lang("pt", "Portuguese (Brazil)", "Português (Brasil)"),
    lang("pt-PT", "Portuguese (Portugal)", "Português (Portugal)"),
    lang("ro", "Romanian", "Română"),
    lang("ru", "Russian", "Русский"),
    lang("sk", "Slovak", "Slovenčina"),
    lang("sl", "Slovenian", "Slovenščina"),
    lang("sm", "Samoan", "Gagana Sāmoa"),
    lang("so", "Somali", "Af Soomaali"),
    lang("sq", "Albanian", "Shqip"),
    lang("sr-Cyrl", "Serbian (Cyrillic)", "Српски (ћирилица)"),
    lang("sr-Latn", "Serbian (Latin)", "Srpski (latinica)"),
    lang("sv", "Swedish", "Svenska"),
    lang("sw", "Swahili", "Kiswahili"),
    lang("ta", "Tamil", "தமிழ்"),
    lang("te", "Telugu", "తెలుగు"),
    lang("th", "Thai", "ไทย"),
    lang("ti", "Tigrinya", "ትግር"),
    lang("tk", "Turkmen", "Türkmen Dili"),
    lang("tlh-Latn", "Klingon (Latin)", "Klingon (Latin)"),
    lang("to", "Tongan", "Lea Fakatonga"),
    lang("tr", "Turkish", "Türkçe"),
    lang("tt", "Tatar", "Татар"),
    lang("ty", "Tahitian", "Reo Tahiti"),
    lang("ug", "Uyghur", "ئۇيغۇرچە"),
    lang("uk", "Ukrainian", "Українська"),
    lang("ur", "Urdu", "اردو"),
    lang("uz", "Uzbek (Latin)", "Uzbek (Latin)"),
    lang("vi", "Vietnamese", "Tiếng Việt"),
    lang("yua", "Yucatec Maya", "Yucatec Maya"),
    lang("yue", "Cantonese (Traditional)", "粵語 (繁體)"),
    lang("zh-Hans", "Chinese Simplified", "中文 (简体)"),
    lang("zh-Hant", "Chinese Traditional", "繁體中文 (繁體)"),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Language>> =
    Lazy::new(|| LANGUAGES.iter().map(|l| (l.code, l)).collect());

/// Look up a language by its code
pub fn find_language(code: &str) -> Option<&'static Language> {
    BY_CODE.get(code).copied()
}

/// Display name used in the model prompt. Unknown codes pass through as-is.
pub fn language_name(code: &str) -> &str {
    match find_language(code) {
        Some(lang) => lang.name,
        None => code,
    }
}

impl Language {
    /// Label shown in the selection list, e.g. `German / Deutsch`
    pub fn label(&self) -> String {
        if self.name == self.native_name {
            self.name.to_string()
        } else {
            format!("{} / {}", self.name, self.native_name)
        }
    }
}

/// Parallel lists for a selection control: `names[i]` labels `codes[i]`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageList {
    pub names: Vec<String>,
    pub codes: Vec<String>,
}

/// Collation key: accents folded, case ignored, so `Māori` sorts with `Maori`
pub fn sort_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// All languages ordered by English name
pub fn language_list() -> LanguageList {
    let mut entries: Vec<(String, &Language)> =
        LANGUAGES.iter().map(|l| (sort_key(l.name), l)).collect();
    entries.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| a.name.cmp(b.name)));

    let mut list = LanguageList {
        names: Vec::with_capacity(entries.len()),
        codes: Vec::with_capacity(entries.len()),
    };
    for (_, lang) in entries {
        list.names.push(lang.label());
        list.codes.push(lang.code.to_string());
    }
    list
}
