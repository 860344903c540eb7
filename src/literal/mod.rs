//! # 字符串字面量编解码模块（literal）
//!
//! ## 设计思路
//!
//! 把剪贴板文本转换为 C# 字符串字面量的“主体”形式（escape），
//! 或从字面量主体还原原始文本（unescape）。共支持四种字面量：
//!
//! | 类型 | 规则组合 |
//! |------|----------|
//! | `Regular` | 反斜杠转义 |
//! | `Verbatim` | 双引号加倍 |
//! | `Interpolated` | 花括号加倍 → 反斜杠转义 |
//! | `InterpolatedVerbatim` | 花括号加倍 → 双引号加倍 |
//!
//! 两个方向共享同一个 `LiteralType`，保证规则集一致。
//!
//! ## 实现思路
//!
//! - 编解码以 UTF-16 码元为单位，与 `\uXXXX` 的 16 位语义对齐。
//! - 每种字面量类型展开为有序的 `Rule` 列表，逐条尝试，
//!   第一个返回 `Outcome::Claimed` 的规则生效；都不认领则原样复制。
//! - `escape` 无需前瞻；`unescape` 借助 `Stream` 的回退能力处理
//!   不完整或非法的转义序列，失败时一律原样透传，不报错。

mod escape;
mod stream;
mod unescape;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use escape::{escape, escape_utf16};
pub use unescape::{unescape, unescape_utf16};

pub(crate) const BACKSLASH: u16 = b'\\' as u16;
pub(crate) const QUOTE: u16 = b'"' as u16;
pub(crate) const OPEN_BRACE: u16 = b'{' as u16;
pub(crate) const CLOSE_BRACE: u16 = b'}' as u16;

/// C# 字符串字面量类型。
///
/// 不是层级关系，而是一个扁平标签：决定哪些规则集生效以及尝试顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralType {
    /// `"..."`
    #[default]
    Regular,
    /// `@"..."`
    Verbatim,
    /// `$"..."`
    Interpolated,
    /// `$@"..."`
    InterpolatedVerbatim,
}

/// 单个规则集。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `{` / `}` 加倍
    Interpolation,
    /// 反斜杠转义与 `\uXXXX`
    Regular,
    /// `"` 加倍
    Verbatim,
}

/// 规则对当前字符的处理结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// 规则已写出结果并推进了输入
    Claimed,
    /// 规则不处理该字符，输入位置保持不变
    NotClaimed,
}

impl Outcome {
    pub(crate) fn is_claimed(self) -> bool {
        self == Outcome::Claimed
    }
}

impl LiteralType {
    /// 全部字面量类型，按界面展示顺序排列。
    pub const ALL: [LiteralType; 4] = [
        LiteralType::Regular,
        LiteralType::Verbatim,
        LiteralType::Interpolated,
        LiteralType::InterpolatedVerbatim,
    ];

    /// 返回逐字符尝试的规则列表（有序）。
    pub fn rules(self) -> &'static [Rule] {
        match self {
            LiteralType::Regular => &[Rule::Regular],
            LiteralType::Verbatim => &[Rule::Verbatim],
            LiteralType::Interpolated => &[Rule::Interpolation, Rule::Regular],
            LiteralType::InterpolatedVerbatim => &[Rule::Interpolation, Rule::Verbatim],
        }
    }

    /// 字面量开引号前的前缀（`@`、`$`、`$@`）。
    pub fn prefix(self) -> &'static str {
        match self {
            LiteralType::Regular => "",
            LiteralType::Verbatim => "@",
            LiteralType::Interpolated => "$",
            LiteralType::InterpolatedVerbatim => "$@",
        }
    }

    /// 稳定的字符串名称，供命令行与设置文件使用。
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralType::Regular => "regular",
            LiteralType::Verbatim => "verbatim",
            LiteralType::Interpolated => "interpolated",
            LiteralType::InterpolatedVerbatim => "interpolated-verbatim",
        }
    }
}

impl FromStr for LiteralType {
    type Err = AppError;

    /// 忽略大小写与首尾空白，`_` 等价于 `-`。
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        LiteralType::ALL
            .into_iter()
            .find(|literal| literal.as_str() == normalized)
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "未知字面量类型：{}（可选：regular / verbatim / interpolated / interpolated-verbatim）",
                    name.trim()
                ))
            })
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
