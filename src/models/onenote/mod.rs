//! OneNote models

pub mod base;
pub mod links;
pub mod page;

pub use base::{OnenoteEntityBaseModel, OnenoteEntitySchemaObjectModel};
pub use links::{ExternalLink, PageLinks};
pub use page::OnenotePage;

discriminated_family! {
    pub enum OnenoteEntityBaseModelKind {
        base BaseModel(OnenoteEntityBaseModel),
        "#microsoft.graph.onenoteEntitySchemaObjectModel" => SchemaObjectModel(OnenoteEntitySchemaObjectModel),
        "#microsoft.graph.onenotePage" => Page(OnenotePage),
    }
}

discriminated_family! {
    pub enum OnenoteEntitySchemaObjectModelKind {
        base SchemaObjectModel(OnenoteEntitySchemaObjectModel),
        "#microsoft.graph.onenotePage" => Page(OnenotePage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;
    use crate::serialization::json::{from_json_value, to_json_value};
    use crate::serialization::{FieldDeserializable, Parsable};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_page_table_composes_every_level() {
        let page: Vec<&str> = OnenotePage::field_deserializers().into_keys().collect();
        for inherited in [
            Entity::field_deserializers().into_keys().collect::<Vec<_>>(),
            OnenoteEntityBaseModel::field_deserializers()
                .into_keys()
                .collect(),
            OnenoteEntitySchemaObjectModel::field_deserializers()
                .into_keys()
                .collect(),
        ] {
            for key in inherited {
                assert!(page.contains(&key), "missing inherited key {key}");
            }
        }
        for own in ["content", "contentUrl", "level", "links", "order", "title", "userTags"] {
            assert!(page.contains(&own), "missing own key {own}");
        }
        assert_eq!(page.len(), 2 + 1 + 1 + 9);
    }

    #[test]
    fn test_page_decode_sets_fields_at_every_level() {
        let value = json!({
            "@odata.type": "#microsoft.graph.onenotePage",
            "id": "1-abc",
            "self": "https://graph.microsoft.com/v1.0/me/onenote/pages/1-abc",
            "createdDateTime": "2024-05-01T08:00:00Z",
            "title": "Standup",
            "level": 1,
            "links": {
                "oneNoteWebUrl": {"href": "https://onenote.example/page"}
            }
        });
        let page: OnenotePage = from_json_value(&value).unwrap();

        assert_eq!(page.id().unwrap().as_deref(), Some("1-abc"));
        assert!(page.self_link().unwrap().is_some());
        assert_eq!(
            page.created_date_time().unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap())
        );
        assert_eq!(page.level().unwrap(), Some(1));
        let web = page.links().unwrap().unwrap().one_note_web_url().unwrap().unwrap();
        assert_eq!(web.href().unwrap().as_deref(), Some("https://onenote.example/page"));
    }

    #[test]
    fn test_serialize_walks_base_first() {
        let mut page = OnenotePage::new();
        page.set_title(Some("Plan".to_string())).unwrap();
        page.set_created_date_time(Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()))
            .unwrap();
        page.set_id(Some("p".to_string())).unwrap();

        let keys: Vec<String> = to_json_value(&page)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["id", "@odata.type", "createdDateTime", "title"]);
    }

    #[test]
    fn test_schema_object_family_dispatch() {
        let value = json!({"@odata.type": "#microsoft.graph.onenotePage", "order": 3});
        let kind: OnenoteEntitySchemaObjectModelKind = from_json_value(&value).unwrap();
        let OnenoteEntitySchemaObjectModelKind::Page(page) = &kind else {
            panic!("expected page, got {}", kind.type_name());
        };
        assert_eq!(page.order().unwrap(), Some(3));

        let base: OnenoteEntityBaseModelKind =
            from_json_value(&json!({"self": "https://example"})).unwrap();
        assert!(matches!(base, OnenoteEntityBaseModelKind::BaseModel(_)));
        assert!(base.additional_data().unwrap().is_empty());
    }
}
