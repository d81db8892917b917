//! Calendar sharing message actions

use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, field,
};
use crate::store::ModelStore;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CalendarSharingAction {
    Accept,
    AcceptAndViewCalendar,
    ViewCalendar,
    AddThisCalendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CalendarSharingActionType {
    Accept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CalendarSharingActionImportance {
    Primary,
    Secondary,
}

/// An action offered on a calendar sharing invitation
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSharingMessageAction {
    store: ModelStore,
}

impl CalendarSharingMessageAction {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        action / set_action: CalendarSharingAction = "action";
        action_type / set_action_type: CalendarSharingActionType = "actionType";
        importance / set_importance: CalendarSharingActionImportance = "importance";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_enum_value("action", self.action()?.map(|v| v.to_string()).as_deref())?;
        writer.write_enum_value(
            "actionType",
            self.action_type()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_enum_value(
            "importance",
            self.importance()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for CalendarSharingMessageAction {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "action",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<CalendarSharingAction>()? {
                    m.set_action(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(
            "actionType",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<CalendarSharingActionType>()? {
                    m.set_action_type(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(
            "importance",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<CalendarSharingActionImportance>()? {
                    m.set_importance(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(CalendarSharingMessageAction { store: store });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn test_action_round_trip() {
        let value = json!({
            "action": "acceptAndViewCalendar",
            "actionType": "accept",
            "importance": "primary",
            "@odata.type": "#microsoft.graph.calendarSharingMessageAction"
        });
        let action: CalendarSharingMessageAction = from_json_value(&value).unwrap();
        assert_eq!(action.action().unwrap(), Some(CalendarSharingAction::AcceptAndViewCalendar));
        assert_eq!(
            action.importance().unwrap(),
            Some(CalendarSharingActionImportance::Primary)
        );
        assert_eq!(to_json_value(&action).unwrap(), value);
    }

    #[test]
    fn test_unknown_importance_is_unset() {
        let action: CalendarSharingMessageAction =
            from_json_value(&json!({"action": "accept", "importance": "urgent"})).unwrap();
        assert_eq!(action.action().unwrap(), Some(CalendarSharingAction::Accept));
        assert_eq!(action.importance().unwrap(), None);
        assert!(action.additional_data().unwrap().is_empty());
    }
}
