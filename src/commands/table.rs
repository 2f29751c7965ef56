//! 列表输出：左对齐、以 " | " 分隔的文本表格

use chrono::{DateTime, Local, Utc};

/// 列表中的时间显示格式（本地时间）
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn display_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

/// 渲染表格，列宽取表头与内容的最大字符数
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header = format_row(headers);
    let rule_len = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);

    let mut lines = vec![header, "-".repeat(rule_len)];
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_row(&cells));
    }
    lines.join("\n")
}
