use crate::value_map::{lookup, Table, SUPPRESSED};
use crosswind_core::{DeclarationSet, Diagnostic, ResolvedValue, ValuePart};

mod arbitrary;
mod border;
mod effects;
mod layout;
mod typography;

pub use arbitrary::{arbitrary_property, arbitrary_utility, escape_arbitrary, format_arbitrary};

/// 映射结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedClasses {
    /// 按固定分组顺序输出的 class，不含重复
    pub classes: Vec<String>,
    /// 未支持的属性
    pub diagnostics: Vec<Diagnostic>,
}

impl MappedClasses {
    /// 追加 class，重复的只保留第一次
    fn push(&mut self, class: String) {
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }
}

/// 一个输出分组：属性按列出的顺序处理
struct Group {
    properties: &'static [&'static str],
    map: fn(&str, &ResolvedValue) -> Vec<String>,
}

/// 分组顺序即 class 的输出顺序，与输入中声明的顺序无关
const GROUPS: &[Group] = &[
    Group {
        properties: typography::TEXT_PROPERTIES,
        map: typography::map_text,
    },
    Group {
        properties: typography::FONT_PROPERTIES,
        map: typography::map_font,
    },
    Group {
        properties: layout::SPACING_PROPERTIES,
        map: layout::map_spacing,
    },
    Group {
        properties: layout::SIZE_PROPERTIES,
        map: layout::map_size,
    },
    Group {
        properties: border::RADIUS_PROPERTIES,
        map: border::map_radius,
    },
    Group {
        properties: border::BORDER_PROPERTIES,
        map: border::map_border,
    },
    Group {
        properties: effects::BACKGROUND_PROPERTIES,
        map: effects::map_background,
    },
    Group {
        properties: effects::SHADOW_PROPERTIES,
        map: effects::map_shadow,
    },
];

/// 属性是否有对应的 utility
pub fn is_supported_property(property: &str) -> bool {
    GROUPS.iter().any(|g| g.properties.contains(&property))
}

/// 全部支持的属性，按输出顺序
pub fn supported_properties() -> impl Iterator<Item = &'static str> {
    GROUPS.iter().flat_map(|g| g.properties.iter().copied())
}

/// 把解析后的声明映射为 Tailwind class
///
/// - 每个属性产生零个或多个 class（border 简写可拆出多个）
/// - 字典命中的值输出 `<prefix>-<token>`
/// - 查表命中输出刻度 class，否则输出 `<prefix>-[value]`
/// - 未支持的属性记录诊断，不输出 class
pub fn map_declarations(declarations: &DeclarationSet) -> MappedClasses {
    let mut result = MappedClasses::default();

    for group in GROUPS {
        for property in group.properties {
            if let Some(value) = declarations.get(property) {
                let classes = (group.map)(property, value);
                if has_bracketed_token(value, &classes) {
                    result.diagnostics.push(Diagnostic::info(format!(
                        "Dictionary token inside arbitrary value: {}",
                        property
                    )));
                }
                for class in classes {
                    result.push(class);
                }
            }
        }
    }

    for property in declarations.properties() {
        if !is_supported_property(property) {
            tracing::debug!("No utility for property: {}", property);
            result
                .diagnostics
                .push(Diagnostic::info(format!("Unsupported property: {}", property)));
        }
    }

    tracing::debug!(
        "Mapped {} declarations to {} classes",
        declarations.len(),
        result.classes.len()
    );
    result
}

/// 字典 token 是否被拼进了方括号（如 `p-[2_4]`），此时方括号里不是合法 CSS
fn has_bracketed_token(value: &ResolvedValue, classes: &[String]) -> bool {
    if value.as_dictionary().is_some() {
        return false;
    }
    let tokens: Vec<&str> = value
        .parts()
        .iter()
        .filter(|p| p.is_from_dictionary())
        .map(ValuePart::text)
        .collect();
    if tokens.is_empty() {
        return false;
    }

    classes
        .iter()
        .filter_map(|class| class.split_once('[').map(|(_, bracket)| bracket))
        .flat_map(|bracket| bracket.split(['_', ',', '(', ')', ']', ':']))
        .any(|word| tokens.contains(&word))
}

/// 直接放进 `prefix-[...]` 的值（字典命中时用 token）
pub(crate) fn utility(prefix: &str, value: &ResolvedValue) -> String {
    match value.as_dictionary() {
        Some(token) => format!("{}-{}", prefix, token),
        None => arbitrary_utility(prefix, &value.to_css_string()),
    }
}

/// 先查刻度表，未命中时回退到任意值
///
/// 表中的空字符串表示默认值，不输出
pub(crate) fn scaled(prefix: &str, value: &ResolvedValue, table: Table) -> Option<String> {
    if let Some(token) = value.as_dictionary() {
        return Some(format!("{}-{}", prefix, token));
    }

    let css = value.to_css_string();
    match lookup(table, &css) {
        Some(SUPPRESSED) => None,
        Some(class) => Some(class.to_string()),
        None => Some(arbitrary_utility(prefix, &css)),
    }
}

/// 关键字属性：查表，未知关键字输出 `[property:value]`
///
/// `prefix` 为 `None` 时 utility 本身就是关键字（如 `uppercase`）
pub(crate) fn keyword(
    property: &str,
    prefix: Option<&str>,
    value: &ResolvedValue,
    table: Table,
) -> Option<String> {
    if let Some(token) = value.as_dictionary() {
        return Some(match prefix {
            Some(prefix) => format!("{}-{}", prefix, token),
            None => token.to_string(),
        });
    }

    let css = value.to_css_string();
    match lookup(table, &css) {
        Some(SUPPRESSED) => None,
        Some(class) => Some(class.to_string()),
        None => Some(arbitrary_property(property, &css)),
    }
}
