//! 间距与尺寸：值原样放进方括号，不做刻度换算

use super::utility;
use crate::plugin_map::get_property_plugin;
use crosswind_core::ResolvedValue;

pub(super) const SPACING_PROPERTIES: &[&str] = &[
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "gap",
    "row-gap",
    "column-gap",
];

pub(super) const SIZE_PROPERTIES: &[&str] = &[
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
];

pub(super) fn map_spacing(property: &str, value: &ResolvedValue) -> Vec<String> {
    passthrough(property, value)
}

pub(super) fn map_size(property: &str, value: &ResolvedValue) -> Vec<String> {
    passthrough(property, value)
}

fn passthrough(property: &str, value: &ResolvedValue) -> Vec<String> {
    get_property_plugin(property)
        .map(|plugin| utility(plugin, value))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_is_bracketed() {
        let value = ResolvedValue::literal("16px");
        assert_eq!(map_spacing("padding", &value), vec!["p-[16px]"]);
        assert_eq!(map_spacing("margin-top", &value), vec!["mt-[16px]"]);
        assert_eq!(map_spacing("column-gap", &value), vec!["gap-x-[16px]"]);
    }

    #[test]
    fn test_multi_value_spacing() {
        let value = ResolvedValue::literal("8px 16px");
        assert_eq!(map_spacing("padding", &value), vec!["p-[8px_16px]"]);
    }

    #[test]
    fn test_negative_margin() {
        let value = ResolvedValue::literal("-4px");
        assert_eq!(map_spacing("margin-left", &value), vec!["ml-[-4px]"]);
    }

    #[test]
    fn test_size() {
        assert_eq!(
            map_size("width", &ResolvedValue::literal("100%")),
            vec!["w-[100%]"]
        );
        assert_eq!(
            map_size("max-height", &ResolvedValue::literal("calc(100vh - 64px)")),
            vec!["max-h-[calc(100vh_-_64px)]"]
        );
        assert_eq!(
            map_size("height", &ResolvedValue::from_dictionary("12")),
            vec!["h-12"]
        );
    }
}
