// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和土耳其文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 计算引擎只使用带显式 locale 的接口, 不依赖全局 locale
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 支持的语言
pub const SUPPORTED_LOCALES: &[&str] = &["en", "tr"];

/// 是否为支持的语言
pub fn is_supported_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "tr"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（当前全局语言）
///
/// # 示例
/// ```no_run
/// use elektrik_backend::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（显式语言, 不读取全局状态）
///
/// 不支持的语言退回默认语言
pub fn t_in(locale: &str, key: &str) -> String {
    let locale = if is_supported_locale(locale) {
        locale
    } else {
        DEFAULT_LOCALE
    };
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（显式语言 + 参数）
///
/// # 示例
/// ```no_run
/// use elektrik_backend::i18n::t_with_args;
/// let msg = t_with_args("tr", "common.not_found", &[("entity", "service"), ("id", "x")]);
/// ```
pub fn t_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t_in(locale, key);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 涉及全局 locale 的测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("tr");
        assert_eq!(current_locale(), "tr");

        set_locale("en");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_translate_global() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(t("common.success"), "Operation successful");

        set_locale("tr");
        assert_eq!(t("common.success"), "İşlem başarılı");

        // 恢复默认语言
        set_locale(DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_explicit_locale() {
        assert_eq!(
            t_in("en", "safety.fire_risk"),
            "Overheating/fire risk present"
        );
        assert_eq!(
            t_in("tr", "safety.fire_risk"),
            "Aşırı ısınma ve yangın riski mevcut"
        );
        // 不支持的语言退回英文
        assert_eq!(t_in("de", "common.success"), "Operation successful");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_with_args("en", "common.not_found", &[("entity", "service"), ("id", "x1")]);
        assert_eq!(msg, "service not found: x1");

        let msg = t_with_args("tr", "common.not_found", &[("entity", "hizmet"), ("id", "x1")]);
        assert!(msg.contains("bulunamadı"));
        assert!(msg.contains("x1"));
    }
}
