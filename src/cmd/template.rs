//! `yeartab template`: print an empty workbook.

use anyhow::Result;

use yeartab::workbook::{DocumentFormat, Workbook};

pub fn cmd_template(rows: &[usize], format: DocumentFormat) -> Result<()> {
    print!("{}", template_text(rows, format)?);
    Ok(())
}

fn template_text(rows: &[usize], format: DocumentFormat) -> Result<String> {
    if rows.is_empty() {
        anyhow::bail!("At least one table is required");
    }
    if let Some(pos) = rows.iter().position(|&count| count == 0) {
        anyhow::bail!("Table {} must have at least one row", pos);
    }

    let mut text = Workbook::blank(rows).render(format)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_round_trips_shape() {
        let text = template_text(&[2, 3], DocumentFormat::Yaml).unwrap();
        let workbook = Workbook::parse(&text, DocumentFormat::Yaml).unwrap();
        let (model, _) = workbook.into_parts().unwrap();
        assert_eq!(model.row_counts(), &[2, 3]);
    }

    #[test]
    fn test_template_json_ends_with_newline() {
        let text = template_text(&[1], DocumentFormat::Json).unwrap();
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_template_rejects_zero_rows() {
        assert!(template_text(&[1, 0], DocumentFormat::Yaml).is_err());
        assert!(template_text(&[], DocumentFormat::Yaml).is_err());
    }
}
