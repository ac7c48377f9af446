//! pytest 透传参数拆分
//!
//! `--pytest` 接收单个字符串，按空白拆分为参数列表。
//! 单引号/双引号内的空白不拆分，引号本身会被去掉；反斜杠转义下一个字符（单引号内除外）。

use crate::error::{MayaTestError, Result};

/// 将透传字符串拆分为参数
pub fn split_args(input: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('\''), _) => current.push(c),
            (Some('"'), '"') => quote = None,
            (_, '\\') => match chars.next() {
                Some(next) => {
                    current.push(next);
                    in_arg = true;
                }
                None => {
                    return Err(MayaTestError::ArgParse(format!(
                        "末尾存在未转义的反斜杠: {}",
                        input
                    )));
                }
            },
            (Some(_), _) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_arg = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            (None, _) => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(MayaTestError::ArgParse(format!(
            "引号 {} 未闭合: {}",
            q, input
        )));
    }

    if in_arg {
        args.push(current);
    }

    Ok(args)
}
