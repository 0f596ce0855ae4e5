//! Report records and Markdown rendering

use serde::{Deserialize, Serialize};

/// One documented definition in the final report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub name: String,
    pub signature: String,
    pub location: String,
    pub description: String,
}

/// Render the report document. Pure formatting: records appear exactly in
/// input order with no sorting or deduplication.
pub fn render(records: &[ReportRecord]) -> String {
    let mut document = String::from("# Auto-generated API report\n\n");

    for record in records {
        document.push_str(&format!("## {}\n", record.name));
        document.push_str(&format!("- **Signature**: `{}`\n", record.signature));
        document.push_str(&format!("- **Location**: `{}`\n", record.location));
        document.push_str(&format!("- **Description**: {}\n", record.description));
        document.push('\n');
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ReportRecord {
        ReportRecord {
            name: name.to_string(),
            signature: format!("def {}(x)", name),
            location: format!("src/app.py:{}", name.len()),
            description: format!("Does {}.", name),
        }
    }

    #[test]
    fn renders_fixed_section_shape() {
        let document = render(&[ReportRecord {
            name: "square".to_string(),
            signature: "def square(x)".to_string(),
            location: "src/app.py:2".to_string(),
            description: "Returns the square of x.".to_string(),
        }]);

        assert_eq!(
            document,
            "# Auto-generated API report\n\n\
             ## square\n\
             - **Signature**: `def square(x)`\n\
             - **Location**: `src/app.py:2`\n\
             - **Description**: Returns the square of x.\n\n"
        );
    }

    #[test]
    fn preserves_input_order() {
        let document = render(&[record("zeta"), record("alpha")]);
        let zeta = document.find("## zeta").unwrap();
        let alpha = document.find("## alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = vec![record("one"), record("two")];
        assert_eq!(render(&records), render(&records));
    }
}
