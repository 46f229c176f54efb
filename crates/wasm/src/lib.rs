use serde::Serialize;
use wasm_bindgen::prelude::*;

use plcl_core::{
    gap_class, resolve, Diagnostic, DiagnosticLevel, RawStyleProps, Spacing, StyleConfig,
};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsResolveResult {
    classes: Vec<String>,
    diagnostics: Vec<JsDiagnostic>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    level: &'static str,
    message: String,
}

impl From<Diagnostic> for JsDiagnostic {
    fn from(d: Diagnostic) -> Self {
        let level = match d.level {
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        };
        JsDiagnostic {
            level,
            message: d.message,
        }
    }
}

// ── 类型转换 ──────────────────────────────────────────────────

/// 解析 props 对象
///
/// 无法反序列化时退回空 props 并记录诊断，调用方永远拿到类名。
fn parse_props(props: JsValue, diagnostics: &mut Vec<Diagnostic>) -> RawStyleProps {
    if props.is_undefined() || props.is_null() {
        return RawStyleProps::default();
    }
    serde_wasm_bindgen::from_value(props).unwrap_or_else(|e| {
        diagnostics.push(Diagnostic::error(format!("Invalid props: {}", e)));
        RawStyleProps::default()
    })
}

fn resolve_props(props: JsValue) -> JsResolveResult {
    let mut diagnostics = Vec::new();
    let raw = parse_props(props, &mut diagnostics);
    let loaded = StyleConfig::from_raw(&raw);
    diagnostics.extend(loaded.diagnostics);
    JsResolveResult {
        classes: resolve(&loaded.config).into_vec(),
        diagnostics: diagnostics.into_iter().map(Into::into).collect(),
    }
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 解析样式 props，返回 class 字符串
///
/// @param props - 组件 props 对象（多余字段会被忽略），可选
/// @returns 以空格分隔的类名；畸形输入按 glass 默认值处理，不会抛错
#[wasm_bindgen(js_name = "getStylingClasses")]
pub fn get_styling_classes(props: JsValue) -> String {
    resolve_props(props).classes.join(" ")
}

/// 解析样式 props，返回类名数组和诊断信息
///
/// @param props - 组件 props 对象，可选
/// @returns `{ classes, diagnostics }`
#[wasm_bindgen(js_name = "resolveStyle")]
pub fn resolve_style(props: JsValue) -> Result<JsValue, JsError> {
    let result = resolve_props(props);
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// flex/grid 间距类名
///
/// @param gap - 间距值（"none" | "xs" | … | "3xl"），可选；无法识别时按 `gap-0`
#[wasm_bindgen(js_name = "getGapClass")]
pub fn get_gap_class(gap: JsValue) -> String {
    let spacing = gap.as_string().and_then(|g| g.parse::<Spacing>().ok());
    gap_class(spacing)
}
