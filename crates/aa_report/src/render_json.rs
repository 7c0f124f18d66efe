//! JSON renderer for the preview model. Row order is the model's order;
//! field order follows struct layout.

use crate::structure::PreviewModel;
use crate::ReportError;

/// Serialize the preview as a JSON array of rows.
pub fn render_json(model: &PreviewModel) -> Result<String, ReportError> {
    serde_json::to_string(&model.rows).map_err(|e| ReportError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::PreviewRow;

    #[test]
    fn rows_serialize_with_wire_field_names() {
        let model = PreviewModel {
            rows: vec![PreviewRow {
                name: "Alice".into(),
                article_id: "A1".into(),
                pages: 4,
                month: "June".into(),
                date: "2025-06-01".into(),
            }],
        };
        let json = render_json(&model).unwrap();
        assert!(json.contains(r#""articleId":"A1""#));
        assert!(json.contains(r#""name":"Alice""#));
    }
}
