//! # Catalog Module Unit Tests / Catalog 模块单元测试
//!
//! Tests for the language catalog: code parsing and the direction table.
//!
//! 语言目录的测试：代码解析和方向表。

use locale_switch::core::catalog::direction_of;
use locale_switch::{LanguageCode, LayoutDirection, UnsupportedLanguage};

#[cfg(test)]
mod direction_tests {
    use super::*;

    #[test]
    fn test_direction_table() {
        assert_eq!(LanguageCode::English.direction(), LayoutDirection::LeftToRight);
        assert_eq!(LanguageCode::Arabic.direction(), LayoutDirection::RightToLeft);
    }

    #[test]
    fn test_direction_is_stable_across_calls() {
        for code in LanguageCode::ALL {
            let first = code.direction();
            for _ in 0..10 {
                assert_eq!(code.direction(), first);
            }
        }
    }

    #[test]
    fn test_direction_of_supported_codes() {
        assert_eq!(direction_of("en"), Ok(LayoutDirection::LeftToRight));
        assert_eq!(direction_of("ar"), Ok(LayoutDirection::RightToLeft));
    }

    #[test]
    fn test_direction_of_unsupported_code_is_rejected() {
        assert_eq!(direction_of("xx"), Err(UnsupportedLanguage("xx".to_string())));
        assert_eq!(direction_of("").unwrap_or_default(), LayoutDirection::LeftToRight);
    }

    #[test]
    fn test_default_direction_is_left_to_right() {
        assert_eq!(LayoutDirection::default(), LayoutDirection::LeftToRight);
        assert!(!LayoutDirection::default().is_right_to_left());
    }
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("en".parse::<LanguageCode>(), Ok(LanguageCode::English));
        assert_eq!("ar".parse::<LanguageCode>(), Ok(LanguageCode::Arabic));
    }

    #[test]
    fn test_region_qualified_identifier_is_not_a_code() {
        assert!("ar-SA".parse::<LanguageCode>().is_err());
        assert!("EN".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_display_round_trips_as_str() {
        for code in LanguageCode::ALL {
            assert_eq!(code.to_string(), code.as_str());
        }
    }

    #[test]
    fn test_error_message_names_the_code() {
        let err = "fr".parse::<LanguageCode>().unwrap_err();
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn test_toggled_flips_between_languages() {
        assert_eq!(LanguageCode::English.toggled(), LanguageCode::Arabic);
        assert_eq!(LanguageCode::Arabic.toggled(), LanguageCode::English);
    }
}
