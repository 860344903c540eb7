//! 转义：原始文本 → 字面量主体。
//!
//! 每个码元独立决定去向，不看前后文。

use super::{BACKSLASH, CLOSE_BRACE, LiteralType, OPEN_BRACE, Outcome, QUOTE, Rule};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// 按字面量类型转义文本。
///
/// 全函数，永不失败。BMP 之外的字符在 `Regular` 规则下输出为两个
/// `\uXXXX`（代理对）。
///
/// # 示例
/// ```rust
/// use cool_paster::literal::{escape, LiteralType};
///
/// assert_eq!(escape("a\"b", LiteralType::Verbatim), "a\"\"b");
/// assert_eq!(escape("\n\t☺", LiteralType::Regular), "\\n\\t\\u263A");
/// ```
pub fn escape(text: &str, literal: LiteralType) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    String::from_utf16_lossy(&escape_utf16(&units, literal))
}

/// 以 UTF-16 码元为输入输出的转义。
pub fn escape_utf16(input: &[u16], literal: LiteralType) -> Vec<u16> {
    let mut out = Vec::with_capacity(input.len() * 2);
    for &unit in input {
        let claimed = literal
            .rules()
            .iter()
            .any(|&rule| escape_unit(rule, unit, &mut out).is_claimed());
        if !claimed {
            out.push(unit);
        }
    }
    out
}

fn escape_unit(rule: Rule, unit: u16, out: &mut Vec<u16>) -> Outcome {
    match rule {
        Rule::Interpolation => escape_interpolated(unit, out),
        Rule::Regular => escape_regular(unit, out),
        Rule::Verbatim => escape_verbatim(unit, out),
    }
}

fn escape_regular(unit: u16, out: &mut Vec<u16>) -> Outcome {
    let marker = match unit {
        0x0000 => b'0',
        0x0007 => b'a',
        0x0008 => b'b',
        0x000C => b'f',
        0x000A => b'n',
        0x000D => b'r',
        0x0009 => b't',
        0x000B => b'v',
        QUOTE => b'"',
        u if u < 128 => return Outcome::NotClaimed,
        u => {
            out.push(BACKSLASH);
            out.push(u16::from(b'u'));
            for shift in [12, 8, 4, 0] {
                out.push(u16::from(HEX_DIGITS[usize::from((u >> shift) & 0x0F)]));
            }
            return Outcome::Claimed;
        }
    };
    out.push(BACKSLASH);
    out.push(u16::from(marker));
    Outcome::Claimed
}

fn escape_verbatim(unit: u16, out: &mut Vec<u16>) -> Outcome {
    if unit != QUOTE {
        return Outcome::NotClaimed;
    }
    out.extend([QUOTE, QUOTE]);
    Outcome::Claimed
}

fn escape_interpolated(unit: u16, out: &mut Vec<u16>) -> Outcome {
    if unit != OPEN_BRACE && unit != CLOSE_BRACE {
        return Outcome::NotClaimed;
    }
    out.extend([unit, unit]);
    Outcome::Claimed
}
