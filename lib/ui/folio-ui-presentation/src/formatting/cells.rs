use folio_domain::CellValue;

/// Placeholder shown for cells with no value.
const EMPTY_CELL: &str = "-";

/// Render a cell for display. Whole numbers get thousands separators and no
/// decimals; fractional numbers keep two decimal places.
pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(n) => format_number(*n),
        CellValue::Text(s) => s.clone(),
        CellValue::Empty => EMPTY_CELL.to_string(),
    }
}

fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        group_thousands(&format!("{:.0}", n))
    } else {
        group_thousands(&format!("{:.2}", n))
    }
}

/// Insert `,` separators into the integer part of an already formatted
/// decimal string. The sign and any fraction are preserved.
pub fn group_thousands(raw: &str) -> String {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (offset, ch) in int_part.chars().enumerate() {
        if offset > 0 && (int_part.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Truncate to `max` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Width needed to show a header and a column of cells, clamped to
/// `[min, max]`.
pub fn column_width<'a, I>(header: &str, cells: I, min: u16, max: u16) -> u16
where
    I: Iterator<Item = &'a CellValue>,
{
    let widest_cell = cells
        .map(|cell| format_cell(cell).chars().count())
        .max()
        .unwrap_or(0);
    let needed = widest_cell.max(header.chars().count()) as u16;
    needed.clamp(min, max)
}
