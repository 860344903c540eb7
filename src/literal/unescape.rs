//! 反转义：字面量主体 → 原始文本。
//!
//! # 实现思路
//!
//! - 与 `escape` 不同，这里需要前瞻：读到 `\`、`"`、`{`、`}` 后
//!   还要再读后续码元才能判断是否构成转义序列。
//! - 判断失败时把本次多读的码元全部退回 `Stream`，规则报告
//!   `Outcome::NotClaimed`，由调用方原样复制当前码元，
//!   后续码元从退回后的位置重新扫描。
//! - 任何畸形输入都只会退化为原样透传，不存在失败路径。

use super::stream::Stream;
use super::{BACKSLASH, CLOSE_BRACE, LiteralType, OPEN_BRACE, Outcome, QUOTE, Rule};

/// 按字面量类型反转义文本。
///
/// 转义出的 UTF-16 代理对会合并为一个字符；落单的代理项以 U+FFFD 代替，
/// 需要保留原始码元时使用 [`unescape_utf16`]。
///
/// # 示例
/// ```rust
/// use cool_paster::literal::{unescape, LiteralType};
///
/// assert_eq!(unescape("a\\tb", LiteralType::Regular), "a\tb");
/// assert_eq!(unescape("\\uZZZZ", LiteralType::Regular), "\\uZZZZ");
/// ```
pub fn unescape(text: &str, literal: LiteralType) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    String::from_utf16_lossy(&unescape_utf16(&units, literal))
}

/// 以 UTF-16 码元为输入输出的反转义。
pub fn unescape_utf16(units: &[u16], literal: LiteralType) -> Vec<u16> {
    let mut input = Stream::new(units);
    let mut out = Vec::with_capacity(units.len());

    while let Some(unit) = input.next() {
        let claimed = literal
            .rules()
            .iter()
            .any(|&rule| unescape_unit(rule, unit, &mut input, &mut out).is_claimed());
        if !claimed {
            out.push(unit);
        }
    }

    out
}

fn unescape_unit(rule: Rule, unit: u16, input: &mut Stream<'_>, out: &mut Vec<u16>) -> Outcome {
    match rule {
        Rule::Interpolation => unescape_interpolated(unit, input, out),
        Rule::Regular => unescape_regular(unit, input, out),
        Rule::Verbatim => unescape_verbatim(unit, input, out),
    }
}

fn unescape_regular(unit: u16, input: &mut Stream<'_>, out: &mut Vec<u16>) -> Outcome {
    if unit != BACKSLASH {
        return Outcome::NotClaimed;
    }
    let Some(marker) = input.next() else {
        return Outcome::NotClaimed;
    };

    let decoded = match u8::try_from(marker).unwrap_or(0xFF) {
        b'0' => 0x0000,
        b'a' => 0x0007,
        b'b' => 0x0008,
        b'f' => 0x000C,
        b'n' => 0x000A,
        b'r' => 0x000D,
        b't' => 0x0009,
        b'v' => 0x000B,
        b'\'' => u16::from(b'\''),
        b'"' => QUOTE,
        b'u' => match read_hex_quad(input) {
            Some(value) => value,
            None => {
                input.put_back(); // 'u'
                return Outcome::NotClaimed;
            }
        },
        _ => {
            input.put_back();
            return Outcome::NotClaimed;
        }
    };

    out.push(decoded);
    Outcome::Claimed
}

/// 读取恰好四位十六进制数字（大小写均可），高位在前。
///
/// 不足四位或遇到非法字符时，退回本函数读过的全部码元。
fn read_hex_quad(input: &mut Stream<'_>) -> Option<u16> {
    let mut value = 0u16;
    for read in 0..4 {
        let Some(unit) = input.next() else {
            rewind(input, read);
            return None;
        };
        match hex_value(unit) {
            Some(digit) => value = (value << 4) | digit,
            None => {
                rewind(input, read + 1);
                return None;
            }
        }
    }
    Some(value)
}

fn rewind(input: &mut Stream<'_>, count: usize) {
    for _ in 0..count {
        input.put_back();
    }
}

fn hex_value(unit: u16) -> Option<u16> {
    char::from_u32(u32::from(unit))
        .and_then(|c| c.to_digit(16))
        .map(|digit| digit as u16)
}

fn unescape_verbatim(unit: u16, input: &mut Stream<'_>, out: &mut Vec<u16>) -> Outcome {
    unescape_doubled(unit, unit == QUOTE, input, out)
}

fn unescape_interpolated(unit: u16, input: &mut Stream<'_>, out: &mut Vec<u16>) -> Outcome {
    unescape_doubled(unit, unit == OPEN_BRACE || unit == CLOSE_BRACE, input, out)
}

/// 加倍规则的公共部分：`xx` → `x`，否则退回。
fn unescape_doubled(unit: u16, special: bool, input: &mut Stream<'_>, out: &mut Vec<u16>) -> Outcome {
    if !special || !input.has_next() {
        return Outcome::NotClaimed;
    }
    match input.next() {
        Some(next) if next == unit => {
            out.push(unit);
            Outcome::Claimed
        }
        _ => {
            input.put_back();
            Outcome::NotClaimed
        }
    }
}
