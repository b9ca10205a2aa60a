//! Locale-aware rendering of plain decimal text
//!
//! Input is the fixed-point text of an already rounded number ("-1234.5").
//! Only separators, grouping and digit shapes change; digits are never added
//! or dropped.

use phf::phf_map;

/// How integer digits are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Standard,
    /// Three, then twos (lakh/crore): 12,34,567
    Indian,
}

/// Digit shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digits {
    Latin,
    /// U+0660..U+0669
    ArabicIndic,
}

/// Separators and digit conventions of one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub group: &'static str,
    pub decimal: &'static str,
    pub grouping: Grouping,
    pub digits: Digits,
}

const fn latin(group: &'static str, decimal: &'static str) -> NumberFormat {
    NumberFormat { group, decimal, grouping: Grouping::Standard, digits: Digits::Latin }
}

const EN: NumberFormat = latin(",", ".");
const DOT_COMMA: NumberFormat = latin(".", ",");
const NBSP_COMMA: NumberFormat = latin("\u{a0}", ",");
const NARROW_NBSP_COMMA: NumberFormat = latin("\u{202f}", ",");
const SWISS: NumberFormat = latin("\u{2019}", ".");
const INDIAN: NumberFormat = NumberFormat {
    group: ",",
    decimal: ".",
    grouping: Grouping::Indian,
    digits: Digits::Latin,
};
const EASTERN_ARABIC: NumberFormat = NumberFormat {
    group: "\u{66c}",
    decimal: "\u{66b}",
    grouping: Grouping::Standard,
    digits: Digits::ArabicIndic,
};

/// Keys are lower-case BCP-47 tags or bare language subtags
static LOCALES: phf::Map<&'static str, NumberFormat> = phf_map! {
    "en" => EN,
    "en-us" => EN,
    "en-gb" => EN,
    "en-in" => INDIAN,
    "de" => DOT_COMMA,
    "de-de" => DOT_COMMA,
    "de-ch" => SWISS,
    "fr" => NARROW_NBSP_COMMA,
    "fr-fr" => NARROW_NBSP_COMMA,
    "it" => DOT_COMMA,
    "it-it" => DOT_COMMA,
    "nl" => DOT_COMMA,
    "nl-nl" => DOT_COMMA,
    "pt" => DOT_COMMA,
    "pt-br" => DOT_COMMA,
    "ru" => NBSP_COMMA,
    "ru-ru" => NBSP_COMMA,
    "sv" => NBSP_COMMA,
    "sv-se" => NBSP_COMMA,
    "hi" => INDIAN,
    "hi-in" => INDIAN,
    "ar-eg" => EASTERN_ARABIC,
    "ja" => EN,
    "ja-jp" => EN,
    "zh" => EN,
    "zh-cn" => EN,
};

impl Default for NumberFormat {
    fn default() -> Self {
        EN
    }
}

impl NumberFormat {
    /// Resolve a locale tag: exact tag, then its language, then en-US.
    pub fn for_locale(tag: &str) -> NumberFormat {
        let tag = tag.trim().replace('_', "-").to_lowercase();
        if let Some(format) = LOCALES.get(tag.as_str()) {
            return *format;
        }
        let language = tag.split('-').next().unwrap_or_default();
        LOCALES.get(language).copied().unwrap_or(EN)
    }

    /// Whether `tag` (or its language) has its own entry
    pub fn is_supported(tag: &str) -> bool {
        let tag = tag.trim().replace('_', "-").to_lowercase();
        let language = tag.split('-').next().unwrap_or_default();
        LOCALES.contains_key(tag.as_str()) || LOCALES.contains_key(language)
    }

    /// Render plain decimal text ("1234567.89") in this format
    pub fn format(&self, plain: &str) -> String {
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(plain.len() + 8);
        out.push_str(sign);
        out.push_str(&self.group_digits(int_part));
        if let Some(frac) = frac_part {
            out.push_str(self.decimal);
            out.push_str(frac);
        }
        self.shape_digits(&out)
    }

    fn group_digits(&self, int_part: &str) -> String {
        let digits: Vec<char> = int_part.chars().collect();
        let mut groups: Vec<String> = Vec::new();
        let mut end = digits.len();
        let mut size = 3;
        while end > 0 {
            let start = end.saturating_sub(size);
            groups.push(digits[start..end].iter().collect());
            end = start;
            if self.grouping == Grouping::Indian {
                size = 2;
            }
        }
        groups.reverse();
        groups.join(self.group)
    }

    fn shape_digits(&self, text: &str) -> String {
        match self.digits {
            Digits::Latin => text.to_string(),
            Digits::ArabicIndic => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}

/// Format plain decimal text for a locale tag
pub fn format_for_locale(plain: &str, tag: &str) -> String {
    NumberFormat::for_locale(tag).format(plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_us() {
        assert_eq!(format_for_locale("1234567.89", "en-US"), "1,234,567.89");
        assert_eq!(format_for_locale("999", "en-US"), "999");
        assert_eq!(format_for_locale("1000", "en-US"), "1,000");
    }

    #[test]
    fn test_german() {
        assert_eq!(format_for_locale("1234567.89", "de-DE"), "1.234.567,89");
        assert_eq!(format_for_locale("-0.5", "de-DE"), "-0,5");
    }

    #[test]
    fn test_french_uses_narrow_no_break_space() {
        assert_eq!(format_for_locale("1234567.89", "fr-FR"), "1\u{202f}234\u{202f}567,89");
    }

    #[test]
    fn test_russian_uses_no_break_space() {
        assert_eq!(format_for_locale("1234567.89", "ru-RU"), "1\u{a0}234\u{a0}567,89");
    }

    #[test]
    fn test_swiss_german() {
        assert_eq!(format_for_locale("1234567.89", "de-CH"), "1\u{2019}234\u{2019}567.89");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_for_locale("1234567.89", "hi-IN"), "12,34,567.89");
        assert_eq!(format_for_locale("123456789", "en-IN"), "12,34,56,789");
        assert_eq!(format_for_locale("123", "hi-IN"), "123");
    }

    #[test]
    fn test_arabic_egypt() {
        assert_eq!(format_for_locale("1234567.89", "ar-EG"), "١٬٢٣٤٬٥٦٧٫٨٩");
    }

    #[test]
    fn test_language_fallback() {
        assert_eq!(NumberFormat::for_locale("de-AT"), DOT_COMMA);
        assert_eq!(NumberFormat::for_locale("pt_BR"), DOT_COMMA);
        assert_eq!(NumberFormat::for_locale("EN-gb"), EN);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_en_us() {
        assert_eq!(NumberFormat::for_locale("xx-YY"), EN);
        assert_eq!(NumberFormat::for_locale(""), EN);
        assert!(!NumberFormat::is_supported("xx-YY"));
        assert!(NumberFormat::is_supported("fr-CA"));
    }
}
