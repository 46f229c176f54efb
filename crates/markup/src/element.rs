use crate::attrs::Attributes;
use plcl_core::{compose_classes, resolve, StyleConfig};

/// 不带内容、不输出闭合标签的元素
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// 组件根元素
///
/// 把样式配置、组件固定类、调用方 class 和透传属性组装成一段 HTML。
///
/// # 示例
///
/// ```
/// use plcl_markup::Element;
/// use plcl_core::{Spacing, StyleConfig};
///
/// let html = Element::new("div", "Card")
///     .styling(StyleConfig::new().style("outline").p(Spacing::Lg))
///     .literal("flex flex-col")
///     .text("Hello")
///     .render();
///
/// assert_eq!(
///     html,
///     r#"<div id="Card" class="variant-outline rounded-xl p-6 flex flex-col">Hello</div>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    /// 组件名，未指定 id 时用作 id
    component: String,
    id: Option<String>,
    styling: Option<StyleConfig>,
    literal: String,
    class_name: String,
    attrs: Attributes,
    content: String,
}

impl Element {
    pub fn new(tag: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            component: component.into(),
            id: None,
            styling: None,
            literal: String::new(),
            class_name: String::new(),
            attrs: Attributes::new(),
            content: String::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.id = if id.is_empty() { None } else { Some(id) };
        self
    }

    /// 样式配置；不设置时不参与类名解析
    pub fn styling(mut self, styling: StyleConfig) -> Self {
        self.styling = Some(styling);
        self
    }

    /// 组件自身的固定类
    pub fn literal(mut self, classes: impl AsRef<str>) -> Self {
        self.literal = compose_classes([self.literal.as_str(), classes.as_ref()]);
        self
    }

    /// 调用方传入的 class
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// 追加文本内容（会转义）
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.content.push_str(&escape_attr(text.as_ref()));
        self
    }

    /// 追加原始 HTML
    pub fn html(mut self, html: impl AsRef<str>) -> Self {
        self.content.push_str(html.as_ref());
        self
    }

    /// 追加子元素
    pub fn child(mut self, child: Element) -> Self {
        self.content.push_str(&child.render());
        self
    }

    /// 最终的 class 属性值
    ///
    /// 顺序：解析出的样式类、组件固定类、调用方 class、透传的 class。
    pub fn class_attr(&self) -> String {
        let resolved = self
            .styling
            .as_ref()
            .map(|s| resolve(s).to_string())
            .unwrap_or_default();

        compose_classes([
            resolved.as_str(),
            self.literal.as_str(),
            self.class_name.as_str(),
            self.attrs.extra_class(),
        ])
    }

    pub fn render(&self) -> String {
        let class = self.class_attr();
        let id = self.id.as_deref().unwrap_or(&self.component);

        let mut out = String::with_capacity(64 + self.content.len());
        out.push('<');
        out.push_str(&self.tag);

        if !id.is_empty() {
            push_attr(&mut out, "id", id);
        }
        if !class.is_empty() {
            push_attr(&mut out, "class", &class);
        }
        for (name, value) in self.attrs.iter() {
            push_attr(&mut out, name, value);
        }

        tracing::trace!(
            tag = %self.tag,
            component = %self.component,
            classes = class.split_whitespace().count(),
            "Rendered element"
        );

        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push_str(" />");
            return out;
        }

        out.push('>');
        out.push_str(&self.content);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        out
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// HTML 转义（属性值和文本通用）
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
