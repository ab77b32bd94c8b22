use super::utility;
use crate::plugin_map::get_property_plugin;
use crosswind_core::ResolvedValue;

pub(super) const BACKGROUND_PROPERTIES: &[&str] = &["background-color", "background", "opacity"];

pub(super) const SHADOW_PROPERTIES: &[&str] = &["box-shadow"];

pub(super) fn map_background(property: &str, value: &ResolvedValue) -> Vec<String> {
    get_property_plugin(property)
        .map(|plugin| utility(plugin, value))
        .into_iter()
        .collect()
}

pub(super) fn map_shadow(property: &str, value: &ResolvedValue) -> Vec<String> {
    get_property_plugin(property)
        .map(|plugin| utility(plugin, value))
        .into_iter()
        .collect()
}
