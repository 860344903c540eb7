//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 字面量编解码本身是全函数，永不失败；只有外围的剪贴板、文件、
//! 设置与命令行参数会出错。这些错误统一收敛到 `AppError`，
//! 替代分散的 `.map_err(|e| e.to_string())` 与 `expect()`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - `std::io::Error` 通过 `From` 自动转换，调用侧直接 `?`。

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 剪贴板读写操作失败
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 剪贴板中没有文本
    #[error("剪贴板中没有文本内容")]
    EmptyClipboard,

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 设置文件读写失败
    #[error("设置错误: {0}")]
    Settings(String),

    /// 无法识别的动作名或字面量类型
    #[error("参数无效: {0}")]
    InvalidArgument(String),
}
