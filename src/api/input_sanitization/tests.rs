//! Tests for input sanitization modules

mod sanitizers_tests {
    use super::super::config::InputSanitizationConfig;
    use super::super::sanitizers::Sanitizer;

    #[test]
    fn test_control_character_removal() {
        let config = InputSanitizationConfig::default();

        let input = "test\x00\x01\x1fstring\n\t\r";
        let sanitized = Sanitizer::sanitize_text(input, &config);
        assert_eq!(sanitized, "teststring");
    }

    #[test]
    fn test_c1_and_delete_removal() {
        let config = InputSanitizationConfig::default();

        let input = "a\u{7f}b\u{80}c\u{9f}d\u{a0}e";
        let sanitized = Sanitizer::sanitize_text(input, &config);
        // U+00A0 sits just past the C1 range and survives
        assert_eq!(sanitized, "abcd\u{a0}e");
    }

    #[test]
    fn test_markup_is_left_alone() {
        let config = InputSanitizationConfig::default();

        let input = "<b>\"quoted\" & 'single'</b>";
        assert_eq!(Sanitizer::sanitize_text(input, &config), input);
    }

    #[test]
    fn test_max_length_truncation() {
        let config = InputSanitizationConfig::default();
        let long_input = "a".repeat(20000);
        let sanitized = Sanitizer::sanitize_text(&long_input, &config);
        assert_eq!(sanitized.chars().count(), config.max_string_length);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let config = InputSanitizationConfig::new().with_max_string_length(3);
        let sanitized = Sanitizer::sanitize_text("ééééé", &config);
        assert_eq!(sanitized, "ééé");
    }

    #[test]
    fn test_truncation_applies_after_removal() {
        let config = InputSanitizationConfig::new().with_max_string_length(4);
        let sanitized = Sanitizer::sanitize_text("\x00\x00ab\x01cd", &config);
        assert_eq!(sanitized, "abcd");
    }

    #[test]
    fn test_empty_input() {
        let config = InputSanitizationConfig::default();
        assert_eq!(Sanitizer::sanitize_text("", &config), "");
    }
}

mod object_tests {
    use super::super::config::InputSanitizationConfig;
    use super::super::sanitizers::Sanitizer;
    use serde_json::{json, Value};

    #[test]
    fn test_rejects_non_objects() {
        let config = InputSanitizationConfig::default();

        for input in [json!(null), json!([1, 2]), json!("text"), json!(42)] {
            let err = Sanitizer::sanitize_object(&input, &config).unwrap_err();
            assert_eq!(err.field(), Some("object"));
            assert_eq!(err.to_string(), "Expected an object");
        }
    }

    #[test]
    fn test_string_leaves_are_sanitized() {
        let config = InputSanitizationConfig::default();
        let input = json!({"name": "Test\u{0}Item", "price": 29.99, "active": true});

        let sanitized = Sanitizer::sanitize_object(&input, &config).unwrap();
        assert_eq!(sanitized["name"], json!("TestItem"));
        assert_eq!(sanitized["price"], json!(29.99));
        assert_eq!(sanitized["active"], json!(true));
    }

    #[test]
    fn test_nested_objects_are_sanitized() {
        let config = InputSanitizationConfig::default();
        let input = json!({"outer": {"inner": {"text": "a\u{1}b"}}});

        let sanitized = Sanitizer::sanitize_object(&input, &config).unwrap();
        assert_eq!(sanitized["outer"]["inner"]["text"], json!("ab"));
    }

    #[test]
    fn test_arrays_pass_through_unchanged() {
        let config = InputSanitizationConfig::default();
        let input = json!({"tags": ["a\u{1}", {"k\u{2}": "v\u{3}"}], "none": null});

        let sanitized = Sanitizer::sanitize_object(&input, &config).unwrap();
        assert_eq!(sanitized["tags"], input["tags"]);
        assert_eq!(sanitized["none"], Value::Null);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let config = InputSanitizationConfig::default();
        let input = json!({"": "value"});

        let err = Sanitizer::sanitize_object(&input, &config).unwrap_err();
        assert_eq!(err.field(), Some("key"));
        assert_eq!(err.name(), "ValidationError");
    }

    #[test]
    fn test_long_key_is_rejected() {
        let config = InputSanitizationConfig::default();
        let key = "k".repeat(101);
        let input = json!({ key.clone(): "value" });

        let err = Sanitizer::sanitize_object(&input, &config).unwrap_err();
        assert_eq!(err.field(), Some("key"));
        assert_eq!(err.value(), Some(key.as_str()));
        assert!(err.to_string().contains(&key));
    }

    #[test]
    fn test_key_at_limit_is_accepted() {
        let config = InputSanitizationConfig::default();
        let input = json!({ "k".repeat(100): "value" });
        assert!(Sanitizer::sanitize_object(&input, &config).is_ok());
    }

    #[test]
    fn test_nested_bad_key_is_rejected() {
        let config = InputSanitizationConfig::default();
        let input = json!({"outer": {"": 1}});
        assert!(Sanitizer::sanitize_object(&input, &config).is_err());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let config = InputSanitizationConfig::default();
        let input = json!({"name": "x\u{0}y"});
        let before = input.clone();

        let _ = Sanitizer::sanitize_object(&input, &config).unwrap();
        assert_eq!(input, before);
    }
}

mod config_tests {
    use super::super::config::InputSanitizationConfig;

    #[test]
    fn test_config_defaults() {
        let config = InputSanitizationConfig::default();

        assert_eq!(config.max_string_length, 10000);
        assert_eq!(config.max_key_length, 100);
        assert_eq!(*InputSanitizationConfig::default_cached(), config);
    }

    #[test]
    fn test_config_builder() {
        let config = InputSanitizationConfig::new()
            .with_max_string_length(5000)
            .with_max_key_length(20);

        assert_eq!(config.max_string_length, 5000);
        assert_eq!(config.max_key_length, 20);
    }
}

mod default_helpers_tests {
    use super::super::{sanitize_object, sanitize_text};
    use serde_json::json;

    #[test]
    fn test_free_functions_use_default_limits() {
        assert_eq!(sanitize_text(&"b".repeat(10001)).len(), 10000);

        let sanitized = sanitize_object(&json!({"a": "\u{7f}ok"})).unwrap();
        assert_eq!(sanitized["a"], json!("ok"));
    }
}
