use crosswind_tw_parse::{classify, parse_class, PropertyCategory};
use pretty_assertions::assert_eq;

#[test]
fn test_classify_generated_classes() {
    // 转换器可能产出的每一种形态
    let cases = vec![
        ("text-[#272727]", Some(PropertyCategory::Color)),
        ("text-base", Some(PropertyCategory::FontSize)),
        ("text-left", None),
        ("underline", Some(PropertyCategory::TextDecoration)),
        ("decoration-[#333]", Some(PropertyCategory::TextDecoration)),
        ("font-['Inter',sans-serif]", None),
        ("font-heading", None),
        ("font-normal", Some(PropertyCategory::FontWeight)),
        ("italic", Some(PropertyCategory::FontStyle)),
        ("leading-[24px]", Some(PropertyCategory::LineHeight)),
        ("tracking-[0.5px]", Some(PropertyCategory::LetterSpacing)),
        ("mt-[8px]", Some(PropertyCategory::Spacing)),
        ("w-[100%]", Some(PropertyCategory::Width)),
        ("h-[48px]", Some(PropertyCategory::Height)),
        ("rounded", Some(PropertyCategory::BorderRadius)),
        ("border-b", Some(PropertyCategory::Border)),
        ("border-b-[#e5e5e5]", Some(PropertyCategory::Border)),
        ("bg-[#ffffff]", Some(PropertyCategory::BackgroundColor)),
        ("opacity-[0.8]", Some(PropertyCategory::Opacity)),
        ("shadow-[0_2px_4px_#0000001a]", Some(PropertyCategory::BoxShadow)),
    ];

    for (class, expected) in cases {
        assert_eq!(
            classify(class),
            expected,
            "category mismatch for '{}'",
            class
        );
    }
}

#[test]
fn test_prefixed_classes_round_trip_utility() {
    for class in ["lg:text-sm", "hover:border-t-[2px]", "md:hover:[font-style:oblique]"] {
        let parsed =
            parse_class(class).unwrap_or_else(|e| panic!("Failed to parse {}: {}", class, e));
        assert!(parsed.has_variant(), "{} should carry a variant", class);
        assert_eq!(parsed.to_normalized_string(), class);
    }
}

#[test]
fn test_category_serializes_kebab_case() {
    let json = serde_json::to_string(&PropertyCategory::BackgroundColor).unwrap();
    assert_eq!(json, "\"background-color\"");
}
