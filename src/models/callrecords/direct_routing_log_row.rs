//! A row of the Direct Routing call usage report

use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, SerializationError,
    SerializationWriter, field,
};
use crate::store::ModelStore;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct DirectRoutingLogRow {
    store: ModelStore,
}

impl DirectRoutingLogRow {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Number of the callee in E.164 format
        callee_number / set_callee_number: String = "calleeNumber";
        /// Microsoft subcode qualifying the final SIP code
        call_end_sub_reason / set_call_end_sub_reason: i32 = "callEndSubReason";
        caller_number / set_caller_number: String = "callerNumber";
        call_type / set_call_type: String = "callType";
        correlation_id / set_correlation_id: String = "correlationId";
        /// Call duration in seconds
        duration / set_duration: i32 = "duration";
        /// Only present for established calls
        end_date_time / set_end_date_time: DateTime<Utc> = "endDateTime";
        /// Only present for calls that were never established
        failure_date_time / set_failure_date_time: DateTime<Utc> = "failureDateTime";
        /// Final SIP response code (RFC 3261)
        final_sip_code / set_final_sip_code: i32 = "finalSipCode";
        final_sip_code_phrase / set_final_sip_code_phrase: String = "finalSipCodePhrase";
        id / set_id: String = "id";
        invite_date_time / set_invite_date_time: DateTime<Utc> = "inviteDateTime";
        media_bypass_enabled / set_media_bypass_enabled: bool = "mediaBypassEnabled";
        media_path_location / set_media_path_location: String = "mediaPathLocation";
        signaling_location / set_signaling_location: String = "signalingLocation";
        start_date_time / set_start_date_time: DateTime<Utc> = "startDateTime";
        successful_call / set_successful_call: bool = "successfulCall";
        /// FQDN of the session border controller
        trunk_fully_qualified_domain_name / set_trunk_fully_qualified_domain_name: String = "trunkFullyQualifiedDomainName";
        user_display_name / set_user_display_name: String = "userDisplayName";
        user_id / set_user_id: String = "userId";
        user_principal_name / set_user_principal_name: String = "userPrincipalName";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("calleeNumber", self.callee_number()?.as_deref())?;
        writer.write_int32_value("callEndSubReason", self.call_end_sub_reason()?)?;
        writer.write_string_value("callerNumber", self.caller_number()?.as_deref())?;
        writer.write_string_value("callType", self.call_type()?.as_deref())?;
        writer.write_string_value("correlationId", self.correlation_id()?.as_deref())?;
        writer.write_int32_value("duration", self.duration()?)?;
        writer.write_time_value("endDateTime", self.end_date_time()?)?;
        writer.write_time_value("failureDateTime", self.failure_date_time()?)?;
        writer.write_int32_value("finalSipCode", self.final_sip_code()?)?;
        writer.write_string_value("finalSipCodePhrase", self.final_sip_code_phrase()?.as_deref())?;
        writer.write_string_value("id", self.id()?.as_deref())?;
        writer.write_time_value("inviteDateTime", self.invite_date_time()?)?;
        writer.write_bool_value("mediaBypassEnabled", self.media_bypass_enabled()?)?;
        writer.write_string_value("mediaPathLocation", self.media_path_location()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_string_value("signalingLocation", self.signaling_location()?.as_deref())?;
        writer.write_time_value("startDateTime", self.start_date_time()?)?;
        writer.write_bool_value("successfulCall", self.successful_call()?)?;
        writer.write_string_value(
            "trunkFullyQualifiedDomainName",
            self.trunk_fully_qualified_domain_name()?.as_deref(),
        )?;
        writer.write_string_value("userDisplayName", self.user_display_name()?.as_deref())?;
        writer.write_string_value("userId", self.user_id()?.as_deref())?;
        writer.write_string_value("userPrincipalName", self.user_principal_name()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for DirectRoutingLogRow {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "calleeNumber",
            field(|m: &mut Self, n| Ok(m.set_callee_number(n.get_string_value()?)?)),
        );
        fields.insert(
            "callEndSubReason",
            field(|m: &mut Self, n| Ok(m.set_call_end_sub_reason(n.get_int32_value()?)?)),
        );
        fields.insert(
            "callerNumber",
            field(|m: &mut Self, n| Ok(m.set_caller_number(n.get_string_value()?)?)),
        );
        fields.insert(
            "callType",
            field(|m: &mut Self, n| Ok(m.set_call_type(n.get_string_value()?)?)),
        );
        fields.insert(
            "correlationId",
            field(|m: &mut Self, n| Ok(m.set_correlation_id(n.get_string_value()?)?)),
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
            "failureDateTime",
            field(|m: &mut Self, n| Ok(m.set_failure_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "finalSipCode",
            field(|m: &mut Self, n| Ok(m.set_final_sip_code(n.get_int32_value()?)?)),
        );
        fields.insert(
            "finalSipCodePhrase",
            field(|m: &mut Self, n| Ok(m.set_final_sip_code_phrase(n.get_string_value()?)?)),
        );
        fields.insert(
            "id",
            field(|m: &mut Self, n| Ok(m.set_id(n.get_string_value()?)?)),
        );
        fields.insert(
            "inviteDateTime",
            field(|m: &mut Self, n| Ok(m.set_invite_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "mediaBypassEnabled",
            field(|m: &mut Self, n| Ok(m.set_media_bypass_enabled(n.get_bool_value()?)?)),
        );
        fields.insert(
            "mediaPathLocation",
            field(|m: &mut Self, n| Ok(m.set_media_path_location(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "signalingLocation",
            field(|m: &mut Self, n| Ok(m.set_signaling_location(n.get_string_value()?)?)),
        );
        fields.insert(
            "startDateTime",
            field(|m: &mut Self, n| Ok(m.set_start_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "successfulCall",
            field(|m: &mut Self, n| Ok(m.set_successful_call(n.get_bool_value()?)?)),
        );
        fields.insert(
            "trunkFullyQualifiedDomainName",
            field(|m: &mut Self, n| {
                Ok(m.set_trunk_fully_qualified_domain_name(n.get_string_value()?)?)
            }),
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

impl_parsable!(DirectRoutingLogRow { store: store });
