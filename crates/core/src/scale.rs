//! 样式刻度表
//!
//! 语义值 → Tailwind 类名片段的静态映射，进程内只读。
//! 查不到的键不会产生任何类名。

use phf::phf_map;

/// 尺寸 → Tailwind 间距单位（用于 `m-*` / `p-*` / `gap-*`）
pub static SPACING: phf::Map<&'static str, &'static str> = phf_map! {
    "xs" => "0.5",
    "sm" => "2",
    "md" => "4",
    "lg" => "6",
    "xl" => "8",
    "2xl" => "12",
    "3xl" => "16",
};

/// 圆角 → 类名
pub static RADIUS: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "rounded-none",
    "xs" => "rounded-sm",
    "sm" => "rounded",
    "md" => "rounded-md",
    "lg" => "rounded-lg",
    "xl" => "rounded-xl",
    "2xl" => "rounded-2xl",
    "3xl" => "rounded-3xl",
    "full" => "rounded-full",
};

/// 阴影 → 类名
///
/// Tailwind 默认没有 3xl 阴影，用 `shadow-inner` 代替。
pub static SHADOW: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "shadow-none",
    "xs" => "shadow-sm",
    "sm" => "shadow",
    "md" => "shadow-md",
    "lg" => "shadow-lg",
    "xl" => "shadow-xl",
    "2xl" => "shadow-2xl",
    "3xl" => "shadow-inner",
};

/// 变体 → 基础类名（定义在组件库的 styles.css 中）
pub static VARIANT: phf::Map<&'static str, &'static str> = phf_map! {
    "glass" => "variant-glass",
    "glass-highlight" => "variant-glass-highlight",
    "flat" => "variant-flat",
    "outline" => "variant-outline",
    "transparent" => "variant-transparent",
    "unstyled" => "variant-unstyled",
};

pub const DEFAULT_PADDING: &str = "p-4";
pub const DEFAULT_GLASS_RADIUS: &str = "rounded-2xl";
pub const DEFAULT_RADIUS: &str = "rounded-xl";
pub const DEFAULT_SHADOW: &str = "shadow-xl";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Radius, Shadow, Size, Variant};

    #[test]
    fn test_tables_cover_enums() {
        for size in Size::ALL {
            assert!(SPACING.contains_key(size.as_str()), "{}", size);
        }
        for radius in Radius::ALL {
            assert!(RADIUS.contains_key(radius.as_str()), "{}", radius);
        }
        for shadow in Shadow::ALL {
            assert!(SHADOW.contains_key(shadow.as_str()), "{}", shadow);
        }
        for variant in Variant::ALL {
            assert!(VARIANT.contains_key(variant.as_str()), "{}", variant);
        }
    }

    #[test]
    fn test_spacing_has_no_none() {
        // none 由调用方映射为 `-0`
        assert!(SPACING.get("none").is_none());
    }
}
