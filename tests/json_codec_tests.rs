//! Tests for the JSON codec against real models

use chrono::{TimeZone, Utc};
use graph_model_sdk::models::callrecords::MediaStream;
use graph_model_sdk::models::{
    EntityKind, LayoutTemplateType, LoginPageLayoutConfiguration, OnenotePage,
    OrganizationalBrandingProperties, SearchRequest, SortProperty,
};
use graph_model_sdk::{
    IsoDuration, Parsable, SerializationError, from_json_slice, from_json_str, from_json_value,
    to_json_string, to_json_value,
};
use serde_json::json;

mod additional_data_tests {
    use super::*;

    #[test]
    fn test_future_field_round_trips() {
        let page: OnenotePage =
            from_json_str(r#"{"title":"Notes","futureField":42}"#).unwrap();
        assert_eq!(page.title().unwrap().as_deref(), Some("Notes"));
        assert_eq!(page.additional_data().unwrap().get("futureField"), Some(&json!(42)));

        let value = to_json_value(&page).unwrap();
        assert_eq!(value["futureField"], json!(42));
        assert_eq!(value["title"], json!("Notes"));
    }

    #[test]
    fn test_nested_unknown_fields_stay_with_their_object() {
        let request: SearchRequest = from_json_str(
            r#"{"query":{"queryString":"q","boost":2},"trace":true}"#,
        )
        .unwrap();
        let query = request.query().unwrap().unwrap();
        assert_eq!(query.additional_data().unwrap().get("boost"), Some(&json!(2)));
        assert_eq!(request.additional_data().unwrap().get("trace"), Some(&json!(true)));
        assert!(request.additional_data().unwrap().get("boost").is_none());
    }

    #[test]
    fn test_additional_data_defaults_to_empty_map() {
        let fresh = SortProperty::new();
        assert!(fresh.additional_data().unwrap().is_empty());

        let decoded: SortProperty = from_json_str(r#"{"name":"title"}"#).unwrap();
        assert!(decoded.additional_data().unwrap().is_empty());
    }

    #[test]
    fn test_additional_data_is_written_last() {
        let mut sort = SortProperty::new();
        sort.set_name(Some("rank".to_string())).unwrap();
        let mut extra = serde_json::Map::new();
        extra.insert("aaa".to_string(), json!("first alphabetically"));
        sort.set_additional_data(Some(extra)).unwrap();

        assert_eq!(
            to_json_string(&sort, false).unwrap(),
            r#"{"name":"rank","aaa":"first alphabetically"}"#
        );
    }
}

mod discriminator_tests {
    use super::*;

    #[test]
    fn test_entity_family_dispatch() {
        let kind: EntityKind = from_json_value(&json!({
            "@odata.type": "#microsoft.graph.onenotePage",
            "id": "1-page",
            "title": "Roadmap"
        }))
        .unwrap();
        match &kind {
            EntityKind::OnenotePage(page) => {
                assert_eq!(page.title().unwrap().as_deref(), Some("Roadmap"));
                assert_eq!(page.id().unwrap().as_deref(), Some("1-page"));
            }
            other => panic!("expected OnenotePage, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_unknown_discriminator_decodes_as_base() {
        let kind: EntityKind = from_json_value(&json!({
            "@odata.type": "#microsoft.graph.hologram",
            "id": "h1",
            "depth": 3
        }))
        .unwrap();
        let EntityKind::Entity(entity) = &kind else {
            panic!("expected base entity, got {}", kind.type_name());
        };
        assert_eq!(entity.id().unwrap().as_deref(), Some("h1"));
        assert_eq!(entity.additional_data().unwrap().get("depth"), Some(&json!(3)));
        assert_eq!(
            entity.odata_type().unwrap().as_deref(),
            Some("#microsoft.graph.hologram")
        );
    }

    #[test]
    fn test_non_string_discriminator_selects_base() {
        assert!(matches!(EntityKind::from_discriminator(None), EntityKind::Entity(_)));

        // The base type then declares `@odata.type` as a string field.
        let err =
            from_json_value::<EntityKind>(&json!({"@odata.type": 7, "id": "x"})).unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { .. }));
    }

    #[test]
    fn test_entity_discriminators_are_listed() {
        assert!(EntityKind::DISCRIMINATORS.contains(&"#microsoft.graph.onenotePage"));
        assert!(!EntityKind::DISCRIMINATORS.contains(&"#microsoft.graph.entity"));
    }
}

mod scalar_tests {
    use super::*;

    #[test]
    fn test_wrong_json_kind_is_a_type_mismatch() {
        let err = from_json_str::<SearchRequest>(r#"{"size":"ten"}"#).unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { .. }));
    }

    #[test]
    fn test_int32_overflow_is_invalid() {
        let err = from_json_str::<SearchRequest>(r#"{"size":3000000000}"#).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "int32", .. }));
    }

    #[test]
    fn test_float32_overflow_is_invalid() {
        let err =
            from_json_str::<MediaStream>(r#"{"averagePacketLossRate":1e40}"#).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "float32", .. }));

        let stream: MediaStream =
            from_json_str(r#"{"averagePacketLossRate":0.25}"#).unwrap();
        assert_eq!(stream.average_packet_loss_rate().unwrap(), Some(0.25));
        assert!(to_json_value(&stream).is_ok());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = from_json_slice::<SearchRequest>(b"{\"size\":").unwrap_err();
        assert!(matches!(err, SerializationError::JsonParse(_)));
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        let err = from_json_str::<SearchRequest>("[]").unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { expected: "object", .. }));
    }

    #[test]
    fn test_bytes_are_base64() {
        let mut branding = OrganizationalBrandingProperties::new();
        branding.set_favicon(Some(b"ico".to_vec())).unwrap();
        let value = to_json_value(&branding).unwrap();
        assert_eq!(value, json!({"favicon": "aWNv"}));

        let err = from_json_value::<OrganizationalBrandingProperties>(&json!({"favicon": "%%"}))
            .unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "base64", .. }));
    }

    #[test]
    fn test_timestamps_and_durations() {
        let mut stream = MediaStream::new();
        stream
            .set_start_date_time(Some(Utc.with_ymd_and_hms(2024, 3, 4, 5, 6, 7).unwrap()))
            .unwrap();
        stream.set_max_jitter(Some(IsoDuration::from_hms(0, 1, 30))).unwrap();

        let value = to_json_value(&stream).unwrap();
        assert_eq!(value["startDateTime"], json!("2024-03-04T05:06:07Z"));
        assert_eq!(value["maxJitter"], json!("PT1M30S"));

        let decoded: MediaStream = from_json_value(&value).unwrap();
        assert_eq!(decoded, stream);
    }

    #[test]
    fn test_enum_values_use_wire_names() {
        let mut layout = LoginPageLayoutConfiguration::new();
        layout.set_layout_template_type(Some(LayoutTemplateType::VerticalSplit)).unwrap();
        let value = to_json_value(&layout).unwrap();
        assert_eq!(value, json!({"layoutTemplateType": "verticalSplit"}));
    }

    #[test]
    fn test_pretty_output() {
        let mut sort = SortProperty::new();
        sort.set_name(Some("rank".to_string())).unwrap();
        assert_eq!(
            to_json_string(&sort, true).unwrap(),
            "{\n  \"name\": \"rank\"\n}"
        );
    }
}
