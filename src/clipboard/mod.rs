//! 剪贴板读写模块
//!
//! # 设计思路
//!
//! 只提供一次性的读、写、判空三种能力，不做监控：
//! - **`TextClipboard`**：读写接口，业务编排只依赖该 trait
//! - **`SystemClipboard`**：基于 `arboard` 的系统剪贴板实现
//! - **`MemoryClipboard`**：内存实现，用于测试与无图形环境
//! - **`paste_transformed`**：读取 → 转换 → 可选写回
//!
//! # 实现思路
//!
//! - `arboard` 的错误统一映射为 `AppError::Clipboard`，
//!   无文本内容映射为 `AppError::EmptyClipboard`。
//! - 转换本身永不失败，错误只来自剪贴板访问。

use crate::actions::Action;
use crate::error::AppError;
use crate::literal::LiteralType;

/// 文本剪贴板的最小读写接口
pub trait TextClipboard {
    /// 剪贴板中是否有文本
    fn has_text(&mut self) -> Result<bool, AppError>;

    /// 读取文本；没有文本时返回 `AppError::EmptyClipboard`
    fn get_text(&mut self) -> Result<String, AppError>;

    /// 写入文本
    fn set_text(&mut self, text: &str) -> Result<(), AppError>;
}

// ============================================================================
// 系统剪贴板
// ============================================================================

/// 基于 `arboard` 的系统剪贴板
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// 打开系统剪贴板
    ///
    /// 无图形环境（如无 X11/Wayland 会话）时返回 `AppError::Clipboard`。
    pub fn new() -> Result<Self, AppError> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("打开剪贴板失败: {}", e)))?;
        Ok(Self { inner })
    }
}

impl TextClipboard for SystemClipboard {
    fn has_text(&mut self) -> Result<bool, AppError> {
        match self.inner.get_text() {
            Ok(_) => Ok(true),
            Err(arboard::Error::ContentNotAvailable) => Ok(false),
            Err(e) => Err(AppError::Clipboard(e.to_string())),
        }
    }

    fn get_text(&mut self) -> Result<String, AppError> {
        self.inner.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => AppError::EmptyClipboard,
            other => AppError::Clipboard(other.to_string()),
        })
    }

    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        self.inner
            .set_text(text)
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

// ============================================================================
// 内存剪贴板
// ============================================================================

/// 内存中的剪贴板
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl TextClipboard for MemoryClipboard {
    fn has_text(&mut self) -> Result<bool, AppError> {
        Ok(self.text.is_some())
    }

    fn get_text(&mut self) -> Result<String, AppError> {
        self.text.clone().ok_or(AppError::EmptyClipboard)
    }

    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

// ============================================================================
// 读取 → 转换 → 写回
// ============================================================================

/// 读取剪贴板文本，执行动作，按需写回，并返回转换结果
///
/// # 参数
/// * `clipboard`  - 剪贴板实现
/// * `action`     - 要执行的转换动作
/// * `literal`    - 转义类动作使用的字面量类型
/// * `write_back` - 是否把结果写回剪贴板
///
/// # 返回
/// - `Ok(String)` — 转换后的文本
/// - `Err(AppError::EmptyClipboard)` — 剪贴板中没有文本
/// - `Err(AppError::Clipboard)` — 剪贴板访问失败
pub fn paste_transformed<C: TextClipboard + ?Sized>(
    clipboard: &mut C,
    action: Action,
    literal: LiteralType,
    write_back: bool,
) -> Result<String, AppError> {
    if !clipboard.has_text()? {
        return Err(AppError::EmptyClipboard);
    }

    let text = clipboard.get_text()?;
    log::debug!("📋 读取剪贴板文本 {} 字符", text.chars().count());

    let result = action.apply(&text, literal);

    if write_back {
        clipboard.set_text(&result)?;
        log::info!("✅ 已将 {}（{}）结果写回剪贴板", action, literal);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_transformed_writes_result_back() {
        let mut clipboard = MemoryClipboard::with_text("a\tb");

        let result =
            paste_transformed(&mut clipboard, Action::Escape, LiteralType::Regular, true)
                .expect("transform should succeed");

        assert_eq!(result, "a\\tb");
        assert_eq!(clipboard.text(), Some("a\\tb"));
    }

    #[test]
    fn paste_transformed_without_write_back_leaves_clipboard() {
        let mut clipboard = MemoryClipboard::with_text("{\"a\":1}");

        let result =
            paste_transformed(&mut clipboard, Action::Prettify, LiteralType::Regular, false)
                .expect("transform should succeed");

        assert_eq!(result, "{\n  \"a\": 1\n}");
        assert_eq!(clipboard.text(), Some("{\"a\":1}"));
    }

    #[test]
    fn paste_transformed_on_empty_clipboard_fails() {
        let mut clipboard = MemoryClipboard::default();

        let err = paste_transformed(&mut clipboard, Action::Unescape, LiteralType::Regular, true)
            .unwrap_err();

        assert!(matches!(err, AppError::EmptyClipboard));
        assert!(clipboard.text().is_none());
    }
}
