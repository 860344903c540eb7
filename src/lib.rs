//! # 剪贴板文本转换工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 命令行 (clap, main.rs)                    │
//! │   ACTION / --literal / --clipboard / --input / --config  │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<String, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓            库 (Rust)                             │
//! │                                                          │
//! │  ┌─ settings ─── JSON 设置文件 (回退默认值)               │
//! │  │                                                       │
//! │  ├─ clipboard ── TextClipboard (arboard / 内存)          │
//! │  │     └─ paste_transformed  读取 → 转换 → 写回          │
//! │  │                                                       │
//! │  ├─ actions ──── Prettify / Escape / Unescape / ...      │
//! │  │                                                       │
//! │  └─ literal ──── C# 字符串字面量编解码（核心）            │
//! │        ├─ escape     原始文本 → 字面量主体                │
//! │        └─ unescape   字面量主体 → 原始文本                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`literal`] | 四种字面量类型的转义与反转义，全函数、无状态 |
//! | [`actions`] | 面向用户的文本转换动作 |
//! | [`clipboard`] | 一次性剪贴板读写与“转换后写回” |
//! | [`settings`] | 默认动作、字面量类型等设置的持久化 |

pub mod actions;
pub mod clipboard;
pub mod error;
pub mod literal;
pub mod settings;
