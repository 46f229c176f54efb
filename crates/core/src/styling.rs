use crate::scale::{
    DEFAULT_GLASS_RADIUS, DEFAULT_PADDING, DEFAULT_RADIUS, DEFAULT_SHADOW, RADIUS, SHADOW,
    SPACING, VARIANT,
};
use crate::types::{ClassList, Spacing, StyleConfig, Variant};

/// 将样式配置解析为有序的类名列表
///
/// 输出顺序：
/// 1. 变体基础类
/// 2. 默认内边距 / 圆角 / 阴影（按变体和是否显式设置决定）
/// 3. 外边距（m, mt, mb, ml, mr, mx, my）
/// 4. 显式内边距（p, pt, pb, pl, pr, px, py）
/// 5. 显式圆角、显式阴影
///
/// 纯函数：相同输入总是得到相同输出，从不失败。
///
/// # 示例
///
/// ```
/// use plcl_core::{resolve, Spacing, StyleConfig};
///
/// let classes = resolve(&StyleConfig::new().style("outline").p(Spacing::Lg));
/// assert_eq!(classes.to_string(), "variant-outline rounded-xl p-6");
/// ```
pub fn resolve(config: &StyleConfig) -> ClassList {
    let mut classes = ClassList::new();

    let variant = config.resolved_variant();
    if let Some(base) = VARIANT.get(variant.as_str()) {
        classes.push(*base);
    }

    let explicit_padding = config.has_explicit_padding();

    // 默认值：只在对应类别未显式设置时输出
    if !explicit_padding && variant.is_glass() {
        classes.push(DEFAULT_PADDING);
    }
    if !config.has_explicit_radius() && variant != Variant::Unstyled {
        if variant.is_glass() {
            classes.push(DEFAULT_GLASS_RADIUS);
        } else {
            classes.push(DEFAULT_RADIUS);
        }
    }
    if !config.has_explicit_shadow() && variant.is_glass() {
        classes.push(DEFAULT_SHADOW);
    }

    for (prefix, value) in config.margins() {
        if let Some(class) = value.and_then(|v| spacing_class(prefix, v)) {
            classes.push(class);
        }
    }

    if explicit_padding {
        for (prefix, value) in config.paddings() {
            if let Some(class) = value.and_then(|v| spacing_class(prefix, v)) {
                classes.push(class);
            }
        }
    }

    // 显式值排在默认值之后，靠位置覆盖
    if let Some(class) = config.radius.and_then(|r| RADIUS.get(r.as_str())) {
        classes.push(*class);
    }
    if let Some(class) = config.shadow.and_then(|s| SHADOW.get(s.as_str())) {
        classes.push(*class);
    }

    classes
}

/// flex/grid 间距类名
///
/// 未设置或 `none` 时为 `gap-0`。
pub fn gap_class(gap: Option<Spacing>) -> String {
    gap.and_then(|g| spacing_class("gap", g))
        .unwrap_or_else(|| "gap-0".to_string())
}

/// `none` → `<prefix>-0`，其余经 [`SPACING`] 映射
fn spacing_class(prefix: &str, value: Spacing) -> Option<String> {
    match value.size() {
        None => Some(format!("{}-0", prefix)),
        Some(size) => SPACING
            .get(size.as_str())
            .map(|unit| format!("{}-{}", prefix, unit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Radius, Shadow, Size, Unresolved};
    use pretty_assertions::assert_eq;

    fn tokens(config: &StyleConfig) -> Vec<String> {
        resolve(config).into_vec()
    }

    #[test]
    fn test_glass_defaults() {
        let config = StyleConfig::new().style("glass");
        assert_eq!(
            tokens(&config),
            vec!["variant-glass", "p-4", "rounded-2xl", "shadow-xl"]
        );
    }

    #[test]
    fn test_no_style_is_glass() {
        assert_eq!(
            tokens(&StyleConfig::new()),
            tokens(&StyleConfig::new().style("glass"))
        );
    }

    #[test]
    fn test_glass_highlight_defaults() {
        let config = StyleConfig::new().variant(Variant::GlassHighlight);
        assert_eq!(
            tokens(&config),
            vec!["variant-glass-highlight", "p-4", "rounded-2xl", "shadow-xl"]
        );
    }

    #[test]
    fn test_outline_with_padding() {
        let config = StyleConfig::new().style("outline").p(Spacing::Lg);
        assert_eq!(tokens(&config), vec!["variant-outline", "rounded-xl", "p-6"]);
    }

    #[test]
    fn test_non_glass_variants_get_small_radius_only() {
        for variant in [Variant::Flat, Variant::Outline, Variant::Transparent] {
            let config = StyleConfig::new().variant(variant);
            assert_eq!(
                tokens(&config),
                vec![format!("variant-{}", variant.as_str()), "rounded-xl".to_string()]
            );
        }
    }

    #[test]
    fn test_unknown_style_falls_back_to_glass() {
        for style in ["filled", "icon", "text", "GLASS"] {
            let list = resolve(&StyleConfig::new().style(style));
            assert_eq!(list.first(), Some("variant-glass"));
            assert!(list.contains("p-4"));
        }
    }

    #[test]
    fn test_single_padding_field_suppresses_default() {
        let list = resolve(&StyleConfig::new().style("glass").pt(Spacing::Md));
        assert!(list.contains("pt-4"));
        assert!(!list.contains("p-4"));
        for prefix in ["pb-", "pl-", "pr-", "px-", "py-"] {
            assert!(!list.iter().any(|c| c.starts_with(prefix)), "{}", prefix);
        }
        assert_eq!(
            list.into_vec(),
            vec!["variant-glass", "rounded-2xl", "shadow-xl", "pt-4"]
        );
    }

    #[test]
    fn test_padding_none_still_counts_as_explicit() {
        let list = tokens(&StyleConfig::new().p(Spacing::None));
        assert_eq!(list, vec!["variant-glass", "rounded-2xl", "shadow-xl", "p-0"]);
    }

    #[test]
    fn test_unstyled_has_no_defaults() {
        assert_eq!(
            tokens(&StyleConfig::new().variant(Variant::Unstyled)),
            vec!["variant-unstyled"]
        );

        let list = tokens(
            &StyleConfig::new()
                .variant(Variant::Unstyled)
                .m(Spacing::Sm)
                .size(Size::Lg),
        );
        assert_eq!(list, vec!["variant-unstyled", "m-2"]);
    }

    #[test]
    fn test_unstyled_keeps_explicit_values() {
        let list = tokens(
            &StyleConfig::new()
                .variant(Variant::Unstyled)
                .px(Spacing::Xs)
                .radius(Radius::Full)
                .shadow(Shadow::Md),
        );
        assert_eq!(
            list,
            vec!["variant-unstyled", "px-0.5", "rounded-full", "shadow-md"]
        );
    }

    #[test]
    fn test_explicit_radius_none_on_glass() {
        let list = tokens(&StyleConfig::new().radius(Radius::None));
        assert_eq!(list, vec!["variant-glass", "p-4", "shadow-xl", "rounded-none"]);
    }

    #[test]
    fn test_explicit_shadow_replaces_default() {
        let list = tokens(&StyleConfig::new().shadow(Shadow::Xxxl));
        assert_eq!(
            list,
            vec!["variant-glass", "p-4", "rounded-2xl", "shadow-inner"]
        );
    }

    #[test]
    fn test_margin_order_and_scale() {
        let config = StyleConfig::new()
            .style("flat")
            .my(Spacing::Xxxl)
            .m(Spacing::None)
            .mt(Spacing::Xs)
            .mb(Spacing::Sm)
            .ml(Spacing::Md)
            .mr(Spacing::Lg)
            .mx(Spacing::Xxl);
        assert_eq!(
            tokens(&config),
            vec![
                "variant-flat",
                "rounded-xl",
                "m-0",
                "mt-0.5",
                "mb-2",
                "ml-4",
                "mr-6",
                "mx-12",
                "my-16",
            ]
        );
    }

    #[test]
    fn test_full_ordering() {
        let config = StyleConfig::new()
            .style("outline")
            .shadow(Shadow::Sm)
            .radius(Radius::Lg)
            .py(Spacing::Xl)
            .p(Spacing::Sm)
            .m(Spacing::Md);
        assert_eq!(
            tokens(&config),
            vec!["variant-outline", "m-4", "p-2", "py-8", "rounded-lg", "shadow"]
        );
    }

    #[test]
    fn test_resolve_is_pure() {
        let config = StyleConfig::new()
            .style("glass-highlight")
            .pt(Spacing::Md)
            .mx(Spacing::Lg)
            .radius(Radius::Xs);
        assert_eq!(resolve(&config), resolve(&config));
        assert_eq!(resolve(&config.clone()).to_string(), resolve(&config).to_string());
    }

    #[test]
    fn test_unresolved_categories_suppress_defaults_without_tokens() {
        let mut config = StyleConfig::new();
        config.unresolved = Unresolved {
            padding: true,
            radius: true,
            shadow: true,
        };
        assert_eq!(tokens(&config), vec!["variant-glass"]);

        config.unresolved.shadow = false;
        assert_eq!(tokens(&config), vec!["variant-glass", "shadow-xl"]);
    }

    #[test]
    fn test_gap_class() {
        assert_eq!(gap_class(None), "gap-0");
        assert_eq!(gap_class(Some(Spacing::None)), "gap-0");
        assert_eq!(gap_class(Some(Spacing::Xs)), "gap-0.5");
        assert_eq!(gap_class(Some(Spacing::Xxl)), "gap-12");
    }
}
