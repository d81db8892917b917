//! A row of the PSTN call usage report

use super::PstnCallDurationSource;
use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, field,
};
use crate::store::ModelStore;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct PstnCallLogRow {
    store: ModelStore,
}

impl PstnCallLogRow {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        call_duration_source / set_call_duration_source: PstnCallDurationSource = "callDurationSource";
        /// Number dialed in E.164 format
        callee_number / set_callee_number: String = "calleeNumber";
        /// Number of the caller in E.164 format
        caller_number / set_caller_number: String = "callerNumber";
        call_id / set_call_id: String = "callId";
        /// e.g. `ucap_in`, `ucap_out`
        call_type / set_call_type: String = "callType";
        /// Amount charged to the account
        charge / set_charge: f64 = "charge";
        conference_id / set_conference_id: String = "conferenceId";
        connection_charge / set_connection_charge: f64 = "connectionCharge";
        /// ISO 4217 currency of the charges
        currency / set_currency: String = "currency";
        destination_context / set_destination_context: String = "destinationContext";
        destination_name / set_destination_name: String = "destinationName";
        /// Call duration in seconds
        duration / set_duration: i32 = "duration";
        end_date_time / set_end_date_time: DateTime<Utc> = "endDateTime";
        id / set_id: String = "id";
        inventory_type / set_inventory_type: String = "inventoryType";
        license_capability / set_license_capability: String = "licenseCapability";
        operator / set_operator: String = "operator";
        start_date_time / set_start_date_time: DateTime<Utc> = "startDateTime";
        tenant_country_code / set_tenant_country_code: String = "tenantCountryCode";
        usage_country_code / set_usage_country_code: String = "usageCountryCode";
        user_display_name / set_user_display_name: String = "userDisplayName";
        user_id / set_user_id: String = "userId";
        user_principal_name / set_user_principal_name: String = "userPrincipalName";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_enum_value(
            "callDurationSource",
            self.call_duration_source()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_string_value("calleeNumber", self.callee_number()?.as_deref())?;
        writer.write_string_value("callerNumber", self.caller_number()?.as_deref())?;
        writer.write_string_value("callId", self.call_id()?.as_deref())?;
        writer.write_string_value("callType", self.call_type()?.as_deref())?;
        writer.write_float64_value("charge", self.charge()?)?;
        writer.write_string_value("conferenceId", self.conference_id()?.as_deref())?;
        writer.write_float64_value("connectionCharge", self.connection_charge()?)?;
        writer.write_string_value("currency", self.currency()?.as_deref())?;
        writer.write_string_value("destinationContext", self.destination_context()?.as_deref())?;
        writer.write_string_value("destinationName", self.destination_name()?.as_deref())?;
        writer.write_int32_value("duration", self.duration()?)?;
        writer.write_time_value("endDateTime", self.end_date_time()?)?;
        writer.write_string_value("id", self.id()?.as_deref())?;
        writer.write_string_value("inventoryType", self.inventory_type()?.as_deref())?;
        writer.write_string_value("licenseCapability", self.license_capability()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_string_value("operator", self.operator()?.as_deref())?;
        writer.write_time_value("startDateTime", self.start_date_time()?)?;
        writer.write_string_value("tenantCountryCode", self.tenant_country_code()?.as_deref())?;
        writer.write_string_value("usageCountryCode", self.usage_country_code()?.as_deref())?;
        writer.write_string_value("userDisplayName", self.user_display_name()?.as_deref())?;
        writer.write_string_value("userId", self.user_id()?.as_deref())?;
        writer.write_string_value("userPrincipalName", self.user_principal_name()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for PstnCallLogRow {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "callDurationSource",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<PstnCallDurationSource>()? {
                    m.set_call_duration_source(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(
            "calleeNumber",
            field(|m: &mut Self, n| Ok(m.set_callee_number(n.get_string_value()?)?)),
        );
        fields.insert(
            "callerNumber",
            field(|m: &mut Self, n| Ok(m.set_caller_number(n.get_string_value()?)?)),
        );
        fields.insert(
            "callId",
            field(|m: &mut Self, n| Ok(m.set_call_id(n.get_string_value()?)?)),
        );
        fields.insert(
            "callType",
            field(|m: &mut Self, n| Ok(m.set_call_type(n.get_string_value()?)?)),
        );
        fields.insert(
            "charge",
            field(|m: &mut Self, n| Ok(m.set_charge(n.get_float64_value()?)?)),
        );
        fields.insert(
            "conferenceId",
            field(|m: &mut Self, n| Ok(m.set_conference_id(n.get_string_value()?)?)),
        );
        fields.insert(
            "connectionCharge",
            field(|m: &mut Self, n| Ok(m.set_connection_charge(n.get_float64_value()?)?)),
        );
        fields.insert(
            "currency",
            field(|m: &mut Self, n| Ok(m.set_currency(n.get_string_value()?)?)),
        );
        fields.insert(
            "destinationContext",
            field(|m: &mut Self, n| Ok(m.set_destination_context(n.get_string_value()?)?)),
        );
        fields.insert(
            "destinationName",
            field(|m: &mut Self, n| Ok(m.set_destination_name(n.get_string_value()?)?)),
        );
        fields.insert(
            "duration",
            field(|m: &mut Self, n| Ok(m.set_duration(n.get_int32_value()?)?)),
        );
        fields.insert(
            "endDateTime",
            field(|m: &mut Self, n| Ok(m.set_end_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "id",
            field(|m: &mut Self, n| Ok(m.set_id(n.get_string_value()?)?)),
        );
        fields.insert(
            "inventoryType",
            field(|m: &mut Self, n| Ok(m.set_inventory_type(n.get_string_value()?)?)),
        );
        fields.insert(
            "licenseCapability",
            field(|m: &mut Self, n| Ok(m.set_license_capability(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "operator",
            field(|m: &mut Self, n| Ok(m.set_operator(n.get_string_value()?)?)),
        );
        fields.insert(
            "startDateTime",
            field(|m: &mut Self, n| Ok(m.set_start_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "tenantCountryCode",
            field(|m: &mut Self, n| Ok(m.set_tenant_country_code(n.get_string_value()?)?)),
        );
        fields.insert(
            "usageCountryCode",
            field(|m: &mut Self, n| Ok(m.set_usage_country_code(n.get_string_value()?)?)),
        );
        fields.insert(
            "userDisplayName",
            field(|m: &mut Self, n| Ok(m.set_user_display_name(n.get_string_value()?)?)),
        );
        fields.insert(
            "userId",
            field(|m: &mut Self, n| Ok(m.set_user_id(n.get_string_value()?)?)),
        );
        fields.insert(
            "userPrincipalName",
            field(|m: &mut Self, n| Ok(m.set_user_principal_name(n.get_string_value()?)?)),
        );
        fields
    }
}

impl_parsable!(PstnCallLogRow { store: store });
