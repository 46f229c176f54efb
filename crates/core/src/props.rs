//! 宽松的 props 加载
//!
//! 组件（尤其是 JS 侧）传入的是任意 props 对象。这里把它们转换为强类型的
//! [`StyleConfig`]：认识的值映射为枚举，不认识的值丢弃并记录诊断，
//! 不会让整次解析失败。
//!
//! 判断“是否设置”沿用 JS 的真值语义：`null`、`false`、`0`、`""` 视为未设置。
//! 其余无法识别的值仍算作显式设置，只是不输出类名。

use crate::error::Error;
use crate::types::{Diagnostic, Radius, Shadow, Size, Spacing, StyleConfig, Unresolved};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// 原始样式 props
///
/// 每个字段接受任意 JSON 值；多余的键会被忽略，因此可以直接传入组件的完整 props 对象。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawStyleProps {
    pub style: Option<Value>,
    pub m: Option<Value>,
    pub mt: Option<Value>,
    pub mb: Option<Value>,
    pub ml: Option<Value>,
    pub mr: Option<Value>,
    pub mx: Option<Value>,
    pub my: Option<Value>,
    pub p: Option<Value>,
    pub pt: Option<Value>,
    pub pb: Option<Value>,
    pub pl: Option<Value>,
    pub pr: Option<Value>,
    pub px: Option<Value>,
    pub py: Option<Value>,
    pub radius: Option<Value>,
    pub shadow: Option<Value>,
    pub size: Option<Value>,
}

/// 加载结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedStyle {
    pub config: StyleConfig,
    /// 被丢弃的值
    pub diagnostics: Vec<Diagnostic>,
}

/// 单个字段的加载结果
struct Field<T> {
    value: Option<T>,
    /// 传入了真值，但无法识别
    dropped: bool,
}

impl StyleConfig {
    /// 从原始 props 宽松地构造配置
    pub fn from_raw(raw: &RawStyleProps) -> LoadedStyle {
        let mut diagnostics = Vec::new();

        let style = match text("style", &raw.style, &mut diagnostics) {
            Some(Ok(style)) => Some(style.to_string()),
            _ => None,
        };

        let mut spacing =
            |field: &str, value: &Option<Value>| lenient::<Spacing>(field, value, &mut diagnostics);

        let [m, mt, mb, ml, mr, mx, my] = [
            spacing("m", &raw.m),
            spacing("mt", &raw.mt),
            spacing("mb", &raw.mb),
            spacing("ml", &raw.ml),
            spacing("mr", &raw.mr),
            spacing("mx", &raw.mx),
            spacing("my", &raw.my),
        ];
        let paddings = [
            spacing("p", &raw.p),
            spacing("pt", &raw.pt),
            spacing("pb", &raw.pb),
            spacing("pl", &raw.pl),
            spacing("pr", &raw.pr),
            spacing("px", &raw.px),
            spacing("py", &raw.py),
        ];
        let radius = lenient::<Radius>("radius", &raw.radius, &mut diagnostics);
        let shadow = lenient::<Shadow>("shadow", &raw.shadow, &mut diagnostics);
        let size = lenient::<Size>("size", &raw.size, &mut diagnostics);

        let unresolved = Unresolved {
            padding: paddings.iter().any(|f| f.dropped),
            radius: radius.dropped,
            shadow: shadow.dropped,
        };
        let [p, pt, pb, pl, pr, px, py] = paddings;

        let config = StyleConfig {
            style,
            m: m.value,
            mt: mt.value,
            mb: mb.value,
            ml: ml.value,
            mr: mr.value,
            mx: mx.value,
            my: my.value,
            p: p.value,
            pt: pt.value,
            pb: pb.value,
            pl: pl.value,
            pr: pr.value,
            px: px.value,
            py: py.value,
            radius: radius.value,
            shadow: shadow.value,
            size: size.value,
            unresolved,
        };

        LoadedStyle {
            config,
            diagnostics,
        }
    }
}

/// 从 JSON 字符串加载样式 props
///
/// JSON 格式示例：
/// ```json
/// { "style": "outline", "p": "lg", "radius": "full", "onClick": null }
/// ```
///
/// 只有 JSON 本身无法解析（或顶层不是对象）时才返回错误。
pub fn load_from_json(json_str: &str) -> Result<LoadedStyle, Error> {
    let raw: RawStyleProps = serde_json::from_str(json_str)?;
    Ok(StyleConfig::from_raw(&raw))
}

/// JS 假值
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// 取出字符串值
///
/// 假值返回 None；非字符串的真值返回 `Some(Err(()))` 并记录类型错误。
fn text<'a>(
    field: &str,
    value: &'a Option<Value>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Result<&'a str, ()>> {
    let value = value.as_ref().filter(|v| !is_falsy(v))?;
    match value {
        Value::String(s) => Some(Ok(s.as_str())),
        other => {
            tracing::debug!(field, value = %other, "Ignoring non-string style value");
            diagnostics.push(Diagnostic::error(format!(
                "Invalid {} value: expected a string, got {}",
                field, other
            )));
            Some(Err(()))
        }
    }
}

fn lenient<T: FromStr>(
    field: &str,
    value: &Option<Value>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Field<T> {
    match text(field, value, diagnostics) {
        None => Field {
            value: None,
            dropped: false,
        },
        Some(Ok(s)) => match s.parse::<T>() {
            Ok(parsed) => Field {
                value: Some(parsed),
                dropped: false,
            },
            Err(_) => {
                tracing::debug!(field, value = s, "Dropping unknown style value");
                diagnostics.push(Diagnostic::warning(format!(
                    "Unknown {} value: {}",
                    field, s
                )));
                Field {
                    value: None,
                    dropped: true,
                }
            }
        },
        Some(Err(())) => Field {
            value: None,
            dropped: true,
        },
    }
}
