use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 语义尺寸（xs..3xl）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    #[serde(rename = "3xl")]
    Xxxl,
}

impl Size {
    pub const ALL: [Size; 7] = [
        Size::Xs,
        Size::Sm,
        Size::Md,
        Size::Lg,
        Size::Xl,
        Size::Xxl,
        Size::Xxxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
            Size::Xxl => "2xl",
            Size::Xxxl => "3xl",
        }
    }
}

/// 间距：`none` 或任一 [`Size`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    #[serde(rename = "3xl")]
    Xxxl,
}

impl Spacing {
    pub const ALL: [Spacing; 8] = [
        Spacing::None,
        Spacing::Xs,
        Spacing::Sm,
        Spacing::Md,
        Spacing::Lg,
        Spacing::Xl,
        Spacing::Xxl,
        Spacing::Xxxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self.size() {
            Some(size) => size.as_str(),
            None => "none",
        }
    }

    /// `none` 返回 None，其余返回对应尺寸
    pub fn size(self) -> Option<Size> {
        match self {
            Spacing::None => None,
            Spacing::Xs => Some(Size::Xs),
            Spacing::Sm => Some(Size::Sm),
            Spacing::Md => Some(Size::Md),
            Spacing::Lg => Some(Size::Lg),
            Spacing::Xl => Some(Size::Xl),
            Spacing::Xxl => Some(Size::Xxl),
            Spacing::Xxxl => Some(Size::Xxxl),
        }
    }
}

impl From<Size> for Spacing {
    fn from(size: Size) -> Self {
        match size {
            Size::Xs => Spacing::Xs,
            Size::Sm => Spacing::Sm,
            Size::Md => Spacing::Md,
            Size::Lg => Spacing::Lg,
            Size::Xl => Spacing::Xl,
            Size::Xxl => Spacing::Xxl,
            Size::Xxxl => Spacing::Xxxl,
        }
    }
}

/// 圆角：`none`、任一 [`Size`] 或 `full`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    #[serde(rename = "3xl")]
    Xxxl,
    Full,
}

impl Radius {
    pub const ALL: [Radius; 9] = [
        Radius::None,
        Radius::Xs,
        Radius::Sm,
        Radius::Md,
        Radius::Lg,
        Radius::Xl,
        Radius::Xxl,
        Radius::Xxxl,
        Radius::Full,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Radius::None => "none",
            Radius::Xs => "xs",
            Radius::Sm => "sm",
            Radius::Md => "md",
            Radius::Lg => "lg",
            Radius::Xl => "xl",
            Radius::Xxl => "2xl",
            Radius::Xxxl => "3xl",
            Radius::Full => "full",
        }
    }
}

/// 阴影：`none` 或任一 [`Size`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    #[serde(rename = "3xl")]
    Xxxl,
}

impl Shadow {
    pub const ALL: [Shadow; 8] = [
        Shadow::None,
        Shadow::Xs,
        Shadow::Sm,
        Shadow::Md,
        Shadow::Lg,
        Shadow::Xl,
        Shadow::Xxl,
        Shadow::Xxxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Xs => "xs",
            Shadow::Sm => "sm",
            Shadow::Md => "md",
            Shadow::Lg => "lg",
            Shadow::Xl => "xl",
            Shadow::Xxl => "2xl",
            Shadow::Xxxl => "3xl",
        }
    }
}

/// 视觉家族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Glass,
    GlassHighlight,
    Flat,
    Outline,
    Transparent,
    Unstyled,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Glass,
        Variant::GlassHighlight,
        Variant::Flat,
        Variant::Outline,
        Variant::Transparent,
        Variant::Unstyled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Glass => "glass",
            Variant::GlassHighlight => "glass-highlight",
            Variant::Flat => "flat",
            Variant::Outline => "outline",
            Variant::Transparent => "transparent",
            Variant::Unstyled => "unstyled",
        }
    }

    /// 从组件的 `style` 字符串推导基础变体
    ///
    /// 六个已知标签映射到自身；组件自定义的样式名（如 "filled"、"icon"）
    /// 以及缺省值都回落到 `glass`。
    pub fn from_style(style: Option<&str>) -> Variant {
        style
            .and_then(|s| Variant::ALL.into_iter().find(|v| v.as_str() == s))
            .unwrap_or(Variant::Glass)
    }

    /// glass 与 glass-highlight
    pub fn is_glass(self) -> bool {
        matches!(self, Variant::Glass | Variant::GlassHighlight)
    }
}

macro_rules! impl_token_traits {
    ($ty:ty, $err:ident) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| Error::$err(s.to_string()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_token_traits!(Size, UnknownSize);
impl_token_traits!(Spacing, UnknownSpacing);
impl_token_traits!(Radius, UnknownRadius);
impl_token_traits!(Shadow, UnknownShadow);
impl_token_traits!(Variant, UnknownVariant);

/// 组件的样式配置
///
/// 所有字段都是可选的，缺省值由 [`crate::styling::resolve`] 决定。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// 变体标签，允许组件自定义的字符串（按 glass 处理）
    pub style: Option<String>,

    pub m: Option<Spacing>,
    pub mt: Option<Spacing>,
    pub mb: Option<Spacing>,
    pub ml: Option<Spacing>,
    pub mr: Option<Spacing>,
    pub mx: Option<Spacing>,
    pub my: Option<Spacing>,

    pub p: Option<Spacing>,
    pub pt: Option<Spacing>,
    pub pb: Option<Spacing>,
    pub pl: Option<Spacing>,
    pub pr: Option<Spacing>,
    pub px: Option<Spacing>,
    pub py: Option<Spacing>,

    pub radius: Option<Radius>,
    pub shadow: Option<Shadow>,

    /// 组件尺寸；不参与类名解析，由各组件自行解释
    pub size: Option<Size>,

    /// 传入了但无法识别的类别
    ///
    /// 这些类别仍视为显式设置：抑制默认值，但不输出任何类名。
    #[serde(skip)]
    pub unresolved: Unresolved,
}

/// 值被丢弃、但仍算作显式设置的类别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unresolved {
    pub padding: bool,
    pub radius: bool,
    pub shadow: bool,
}

macro_rules! spacing_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: Spacing) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置变体标签
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn variant(self, variant: Variant) -> Self {
        self.style(variant.as_str())
    }

    spacing_setters!(m, mt, mb, ml, mr, mx, my, p, pt, pb, pl, pr, px, py);

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// 解析后的基础变体
    pub fn resolved_variant(&self) -> Variant {
        Variant::from_style(self.style.as_deref())
    }

    /// 外边距字段（固定顺序）
    pub fn margins(&self) -> [(&'static str, Option<Spacing>); 7] {
        [
            ("m", self.m),
            ("mt", self.mt),
            ("mb", self.mb),
            ("ml", self.ml),
            ("mr", self.mr),
            ("mx", self.mx),
            ("my", self.my),
        ]
    }

    /// 内边距字段（固定顺序）
    pub fn paddings(&self) -> [(&'static str, Option<Spacing>); 7] {
        [
            ("p", self.p),
            ("pt", self.pt),
            ("pb", self.pb),
            ("pl", self.pl),
            ("pr", self.pr),
            ("px", self.px),
            ("py", self.py),
        ]
    }

    /// 任一内边距字段被显式设置
    ///
    /// 只要设置了其中一个（例如只设 `pt`），整个内边距就视为显式管理，
    /// 默认的 `p-4` 不再输出。
    pub fn has_explicit_padding(&self) -> bool {
        self.unresolved.padding || self.paddings().iter().any(|(_, v)| v.is_some())
    }

    pub fn has_explicit_radius(&self) -> bool {
        self.unresolved.radius || self.radius.is_some()
    }

    pub fn has_explicit_shadow(&self) -> bool {
        self.unresolved.shadow || self.shadow.is_some()
    }
}

/// 解析输出：有序的类名列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, class: impl Into<String>) {
        self.0.push(class.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// 以单个空格连接，即最终的 class 属性字符串
impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl IntoIterator for ClassList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClassList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<String>> for ClassList {
    fn from(classes: Vec<String>) -> Self {
        Self(classes)
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}
