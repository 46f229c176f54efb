use indexmap::IndexMap;

/// 透传属性 —— 组件不认识的 props，原样写到根元素上。
///
/// 按插入顺序输出。`class` 是保留键：写入时追加到调用方 class，
/// 不会覆盖解析出的样式类。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    map: IndexMap<String, String>,
    /// 通过 `class` 键传入的额外类
    class: String,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入属性，同名属性后者覆盖前者（保持首次插入的位置）
    ///
    /// 不合法的属性名（空、含空白、引号、`=`、`<`、`>`、`/`）会被忽略。
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if !is_valid_name(&name) {
            tracing::debug!(name = %name, "Skipping invalid attribute name");
            return;
        }

        if name == "class" || name == "className" {
            if !self.class.is_empty() {
                self.class.push(' ');
            }
            self.class.push_str(value.trim());
            return;
        }

        self.map.insert(name, value);
    }

    /// builder 风格的 insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(|v| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.shift_remove(name)
    }

    /// 经 `class` 键传入的额外类
    pub fn extra_class(&self) -> &str {
        &self.class
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// HTML 属性名校验
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/' | '`')
        })
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}
