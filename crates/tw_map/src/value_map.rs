use phf::phf_map;

/// 字号（px）→ class
///
/// 只做精确匹配，不取最近值
static FONT_SIZE_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "12px" => "text-xs",
    "14px" => "text-sm",
    "16px" => "text-base",
    "18px" => "text-lg",
    "20px" => "text-xl",
    "24px" => "text-2xl",
    "30px" => "text-3xl",
    "36px" => "text-4xl",
    "48px" => "text-5xl",
    "60px" => "text-6xl",
    "72px" => "text-7xl",
    "96px" => "text-8xl",
    "128px" => "text-9xl",
};

/// 字重 → class
static FONT_WEIGHT_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "100" => "font-thin",
    "200" => "font-extralight",
    "300" => "font-light",
    "400" => "font-normal",
    "500" => "font-medium",
    "600" => "font-semibold",
    "700" => "font-bold",
    "800" => "font-extrabold",
    "900" => "font-black",
    "normal" => "font-normal",
    "bold" => "font-bold",
};

/// 行高 → class（无单位倍数、百分比、px 固定值）
static LINE_HEIGHT_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "1" => "leading-none",
    "1.25" => "leading-tight",
    "1.375" => "leading-snug",
    "1.5" => "leading-normal",
    "1.625" => "leading-relaxed",
    "2" => "leading-loose",

    "100%" => "leading-none",
    "125%" => "leading-tight",
    "137.5%" => "leading-snug",
    "150%" => "leading-normal",
    "162.5%" => "leading-relaxed",
    "200%" => "leading-loose",

    "12px" => "leading-3",
    "16px" => "leading-4",
    "20px" => "leading-5",
    "24px" => "leading-6",
    "28px" => "leading-7",
    "32px" => "leading-8",
    "36px" => "leading-9",
    "40px" => "leading-10",
};

/// 字间距 → class
static LETTER_SPACING_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "-0.05em" => "tracking-tighter",
    "-0.025em" => "tracking-tight",
    "0" => "tracking-normal",
    "0em" => "tracking-normal",
    "0px" => "tracking-normal",
    "0.025em" => "tracking-wide",
    "0.05em" => "tracking-wider",
    "0.1em" => "tracking-widest",
};

/// 关键字映射中，空字符串表示与 Tailwind 默认值相同、不输出 class
pub const SUPPRESSED: &str = "";

static TEXT_ALIGN_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "left" => "text-left",
    "center" => "text-center",
    "right" => "text-right",
    "justify" => "text-justify",
    "start" => "text-start",
    "end" => "text-end",
};

static TEXT_TRANSFORM_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "uppercase" => "uppercase",
    "lowercase" => "lowercase",
    "capitalize" => "capitalize",
    "none" => "normal-case",
};

static FONT_STYLE_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "italic" => "italic",
    "normal" => "not-italic",
};

static DECORATION_LINE_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "underline" => "underline",
    "overline" => "overline",
    "line-through" => "line-through",
    "none" => "no-underline",
};

static DECORATION_STYLE_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "solid" => "",
    "double" => "decoration-double",
    "dotted" => "decoration-dotted",
    "dashed" => "decoration-dashed",
    "wavy" => "decoration-wavy",
};

static DECORATION_THICKNESS_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "decoration-auto",
    "from-font" => "decoration-from-font",
    "0" => "decoration-0",
    "0px" => "decoration-0",
    "1px" => "decoration-1",
    "2px" => "decoration-2",
    "4px" => "decoration-4",
    "8px" => "decoration-8",
};

static DECORATION_SKIP_INK_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "",
};

static UNDERLINE_OFFSET_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "",
    "0" => "underline-offset-0",
    "0px" => "underline-offset-0",
    "1px" => "underline-offset-1",
    "2px" => "underline-offset-2",
    "4px" => "underline-offset-4",
    "8px" => "underline-offset-8",
};

static UNDERLINE_POSITION_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "from-font" => "",
};

/// 边框样式，`none` 不输出
static BORDER_STYLE_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "",
    "solid" => "border-solid",
    "dashed" => "border-dashed",
    "dotted" => "border-dotted",
    "double" => "border-double",
    "hidden" => "border-hidden",
};

/// 圆角：只有 Tailwind 默认的 4px 有无值形式
///
/// 各角共用此表，命中时输出各自前缀本身（`rounded-tl`）
static RADIUS_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "4px" => "rounded",
    "0.25rem" => "rounded",
};

/// 关键字表的种类
///
/// 映射器按属性选择表，再用 [`lookup`] 做精确查询
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    TextAlign,
    TextTransform,
    FontStyle,
    DecorationLine,
    DecorationStyle,
    DecorationThickness,
    DecorationSkipInk,
    UnderlineOffset,
    UnderlinePosition,
    BorderStyle,
    Radius,
}

impl Table {
    fn map(self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            Table::FontSize => &FONT_SIZE_MAP,
            Table::FontWeight => &FONT_WEIGHT_MAP,
            Table::LineHeight => &LINE_HEIGHT_MAP,
            Table::LetterSpacing => &LETTER_SPACING_MAP,
            Table::TextAlign => &TEXT_ALIGN_MAP,
            Table::TextTransform => &TEXT_TRANSFORM_MAP,
            Table::FontStyle => &FONT_STYLE_MAP,
            Table::DecorationLine => &DECORATION_LINE_MAP,
            Table::DecorationStyle => &DECORATION_STYLE_MAP,
            Table::DecorationThickness => &DECORATION_THICKNESS_MAP,
            Table::DecorationSkipInk => &DECORATION_SKIP_INK_MAP,
            Table::UnderlineOffset => &UNDERLINE_OFFSET_MAP,
            Table::UnderlinePosition => &UNDERLINE_POSITION_MAP,
            Table::BorderStyle => &BORDER_STYLE_MAP,
            Table::Radius => &RADIUS_MAP,
        }
    }
}

/// 精确查表（关键字大小写不敏感）
///
/// 返回 `Some("")` 表示命中但无需输出 class
pub fn lookup(table: Table, value: &str) -> Option<&'static str> {
    let key = value.trim().to_ascii_lowercase();
    table.map().get(key.as_str()).copied()
}

/// 是否为边框样式关键字（含 `none`）
pub fn is_border_style(value: &str) -> bool {
    lookup(Table::BorderStyle, value).is_some()
        || matches!(
            value.to_ascii_lowercase().as_str(),
            "groove" | "ridge" | "inset" | "outset"
        )
}

/// 是否看起来像长度（数字开头或宽度关键字）
pub fn looks_like_length(value: &str) -> bool {
    value
        .trim_start_matches(['-', '+'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || matches!(value, "thin" | "medium" | "thick")
        || value.starts_with("calc(")
}

/// 是否为零值（`0`, `0px`, `0rem` ...）
pub fn is_zero(value: &str) -> bool {
    let number = value.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    !number.is_empty() && number.parse::<f64>().is_ok_and(|n| n == 0.0)
}
