//! 文本转换动作模块
//!
//! # 设计思路
//!
//! 用户在剪贴板文本上可以执行的转换是一个封闭集合：
//! JSON 美化、转义、反转义、转义并加引号、反转义并修剪。
//! 每个动作都是 `text -> text` 的全函数，失败时退化为原文返回。
//!
//! # 实现思路
//!
//! - 转义类动作直接委托给 [`crate::literal`]。
//! - JSON 美化委托给 `serde_json`（开启 `preserve_order`，保持键顺序）。
//! - 名称解析与输出沿用 `as_str` / `FromStr` 的稳定字符串约定。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::literal::{self, LiteralType};

/// `UnescapeTrim` 从两端去除的字符
const TRIM_CHARS: &[char] = &[' ', '\t', '\r', '\n', '"'];

/// 剪贴板文本转换动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// JSON 美化（缩进输出）
    Prettify,
    /// 转义为字面量主体
    #[default]
    Escape,
    /// 从字面量主体还原
    Unescape,
    /// 转义后包上引号，得到完整字面量
    EscapeQuotes,
    /// 反转义后去掉两端空白与引号
    UnescapeTrim,
}

impl Action {
    /// 全部动作，按列表展示顺序排列。
    pub const ALL: [Action; 5] = [
        Action::Prettify,
        Action::Escape,
        Action::Unescape,
        Action::EscapeQuotes,
        Action::UnescapeTrim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Prettify => "prettify",
            Action::Escape => "escape",
            Action::Unescape => "unescape",
            Action::EscapeQuotes => "escape-quotes",
            Action::UnescapeTrim => "unescape-trim",
        }
    }

    /// 对文本执行动作。
    ///
    /// `literal` 只影响转义类动作，`Prettify` 忽略它。
    ///
    /// # 示例
    /// ```rust
    /// use cool_paster::actions::Action;
    /// use cool_paster::literal::LiteralType;
    ///
    /// let quoted = Action::EscapeQuotes.apply("say \"hi\"", LiteralType::Regular);
    /// assert_eq!(quoted, "\"say \\\"hi\\\"\"");
    /// ```
    pub fn apply(self, text: &str, literal: LiteralType) -> String {
        match self {
            Action::Prettify => prettify(text),
            Action::Escape => literal::escape(text, literal),
            Action::Unescape => literal::unescape(text, literal),
            Action::EscapeQuotes => {
                format!("{}\"{}\"", literal.prefix(), literal::escape(text, literal))
            }
            Action::UnescapeTrim => literal::unescape(text, literal)
                .trim_matches(TRIM_CHARS)
                .to_string(),
        }
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "未知动作：{}（可选：prettify / escape / unescape / escape-quotes / unescape-trim）",
                    name.trim()
                ))
            })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON 美化；无法解析时原样返回。
fn prettify(text: &str) -> String {
    let value = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("JSON 解析失败，保留原文: {}", e);
            return text.to_string();
        }
    };
    match serde_json::to_string_pretty(&value) {
        Ok(pretty) => pretty,
        Err(e) => {
            log::debug!("JSON 序列化失败，保留原文: {}", e);
            text.to_string()
        }
    }
}
