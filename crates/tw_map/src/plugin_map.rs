use phf::phf_map;

/// CSS 属性到 Tailwind 插件前缀的映射
///
/// 只收录"值可直接放进 `prefix-[...]`"的属性；
/// 需要拆分 token 或查关键字表的属性（border、text-decoration 等）由映射器单独处理
static PROPERTY_PLUGIN_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Spacing (间距)
    "margin" => "m",
    "margin-top" => "mt",
    "margin-right" => "mr",
    "margin-bottom" => "mb",
    "margin-left" => "ml",
    "padding" => "p",
    "padding-top" => "pt",
    "padding-right" => "pr",
    "padding-bottom" => "pb",
    "padding-left" => "pl",
    "gap" => "gap",
    "row-gap" => "gap-y",
    "column-gap" => "gap-x",

    // Sizing (尺寸)
    "width" => "w",
    "min-width" => "min-w",
    "max-width" => "max-w",
    "height" => "h",
    "min-height" => "min-h",
    "max-height" => "max-h",

    // Typography (排版)
    // text 是语义重载的（color / font-size / text-align），按属性区分
    "color" => "text",
    "font-size" => "text",
    "font-family" => "font",
    "font-weight" => "font",
    "line-height" => "leading",
    "letter-spacing" => "tracking",

    // Border radius (圆角)
    "border-radius" => "rounded",
    "border-top-left-radius" => "rounded-tl",
    "border-top-right-radius" => "rounded-tr",
    "border-bottom-right-radius" => "rounded-br",
    "border-bottom-left-radius" => "rounded-bl",

    // Border (边框)
    "border" => "border",
    "border-top" => "border-t",
    "border-right" => "border-r",
    "border-bottom" => "border-b",
    "border-left" => "border-l",
    "border-width" => "border",
    "border-color" => "border",

    // Background / effects
    "background" => "bg",
    "background-color" => "bg",
    "opacity" => "opacity",
    "box-shadow" => "shadow",

    // Text decoration (装饰线)
    "text-decoration-color" => "decoration",
    "text-decoration-thickness" => "decoration",
    "text-underline-offset" => "underline-offset",
};

/// 获取 CSS 属性对应的插件前缀
pub fn get_property_plugin(property: &str) -> Option<&'static str> {
    PROPERTY_PLUGIN_MAP.get(property).copied()
}
