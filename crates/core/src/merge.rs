/// 拼接多段类名字符串
///
/// 功能：
/// - 按空白拆分每一段，丢弃空片段
/// - 保持原始顺序（后出现的类可以靠位置覆盖前面的）
/// - 不去重
///
/// 组件用它把解析结果、组件自身的固定类和调用方传入的 class 合成最终属性值。
pub fn compose_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();

    for part in parts {
        for token in part.as_ref().split_whitespace() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(token);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styling::resolve;
    use crate::types::StyleConfig;

    #[test]
    fn test_compose_basic() {
        let result = compose_classes(["variant-flat rounded-xl", "flex flex-col", "my-card"]);
        assert_eq!(result, "variant-flat rounded-xl flex flex-col my-card");
    }

    #[test]
    fn test_compose_skips_empty_parts() {
        let result = compose_classes(["", "  p-4  ", "", "m-2"]);
        assert_eq!(result, "p-4 m-2");
    }

    #[test]
    fn test_compose_keeps_duplicates_in_order() {
        let result = compose_classes(["p-4", "p-8", "p-4"]);
        assert_eq!(result, "p-4 p-8 p-4");
    }

    #[test]
    fn test_compose_with_resolved_list() {
        let resolved = resolve(&StyleConfig::new().style("outline"));
        let result = compose_classes([resolved.to_string(), "extra".to_string()]);
        assert_eq!(result, "variant-outline rounded-xl extra");
    }

    #[test]
    fn test_compose_nothing() {
        let parts: Vec<&str> = vec![];
        assert_eq!(compose_classes(parts), "");
    }
}
