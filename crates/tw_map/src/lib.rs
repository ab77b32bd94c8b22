//! CSS 声明 → Tailwind utility class 映射

pub mod mapper;
pub mod plugin_map;
pub mod value_map;

pub use mapper::{
    arbitrary_property, arbitrary_utility, format_arbitrary, is_supported_property,
    map_declarations, supported_properties, MappedClasses,
};
