//! Sign-in page layout and text visibility

use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, field,
};
use crate::store::ModelStore;
use strum::{Display, EnumString};

/// Layout template of the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum LayoutTemplateType {
    Default,
    VerticalSplit,
    UnknownFutureValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginPageLayoutConfiguration {
    store: ModelStore,
}

impl LoginPageLayoutConfiguration {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Whether the footer is shown on the sign-in page
        is_footer_shown / set_is_footer_shown: bool = "isFooterShown";
        /// Whether the header is shown on the sign-in page
        is_header_shown / set_is_header_shown: bool = "isHeaderShown";
        layout_template_type / set_layout_template_type: LayoutTemplateType = "layoutTemplateType";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_bool_value("isFooterShown", self.is_footer_shown()?)?;
        writer.write_bool_value("isHeaderShown", self.is_header_shown()?)?;
        writer.write_enum_value(
            "layoutTemplateType",
            self.layout_template_type()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for LoginPageLayoutConfiguration {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "isFooterShown",
            field(|m: &mut Self, n| Ok(m.set_is_footer_shown(n.get_bool_value()?)?)),
        );
        fields.insert(
            "isHeaderShown",
            field(|m: &mut Self, n| Ok(m.set_is_header_shown(n.get_bool_value()?)?)),
        );
        fields.insert(
            "layoutTemplateType",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<LayoutTemplateType>()? {
                    m.set_layout_template_type(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(LoginPageLayoutConfiguration { store: store });

/// Which optional texts and links the sign-in page hides
#[derive(Debug, Clone, PartialEq)]
pub struct LoginPageTextVisibilitySettings {
    store: ModelStore,
}

impl LoginPageTextVisibilitySettings {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        hide_account_reset_credentials / set_hide_account_reset_credentials: bool = "hideAccountResetCredentials";
        hide_cannot_access_your_account / set_hide_cannot_access_your_account: bool = "hideCannotAccessYourAccount";
        hide_forgot_my_password / set_hide_forgot_my_password: bool = "hideForgotMyPassword";
        hide_privacy_and_cookies / set_hide_privacy_and_cookies: bool = "hidePrivacyAndCookies";
        hide_reset_it_now / set_hide_reset_it_now: bool = "hideResetItNow";
        hide_terms_of_use / set_hide_terms_of_use: bool = "hideTermsOfUse";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_bool_value(
            "hideAccountResetCredentials",
            self.hide_account_reset_credentials()?,
        )?;
        writer.write_bool_value(
            "hideCannotAccessYourAccount",
            self.hide_cannot_access_your_account()?,
        )?;
        writer.write_bool_value("hideForgotMyPassword", self.hide_forgot_my_password()?)?;
        writer.write_bool_value("hidePrivacyAndCookies", self.hide_privacy_and_cookies()?)?;
        writer.write_bool_value("hideResetItNow", self.hide_reset_it_now()?)?;
        writer.write_bool_value("hideTermsOfUse", self.hide_terms_of_use()?)?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for LoginPageTextVisibilitySettings {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "hideAccountResetCredentials",
            field(|m: &mut Self, n| Ok(m.set_hide_account_reset_credentials(n.get_bool_value()?)?)),
        );
        fields.insert(
            "hideCannotAccessYourAccount",
            field(|m: &mut Self, n| {
                Ok(m.set_hide_cannot_access_your_account(n.get_bool_value()?)?)
            }),
        );
        fields.insert(
            "hideForgotMyPassword",
            field(|m: &mut Self, n| Ok(m.set_hide_forgot_my_password(n.get_bool_value()?)?)),
        );
        fields.insert(
            "hidePrivacyAndCookies",
            field(|m: &mut Self, n| Ok(m.set_hide_privacy_and_cookies(n.get_bool_value()?)?)),
        );
        fields.insert(
            "hideResetItNow",
            field(|m: &mut Self, n| Ok(m.set_hide_reset_it_now(n.get_bool_value()?)?)),
        );
        fields.insert(
            "hideTermsOfUse",
            field(|m: &mut Self, n| Ok(m.set_hide_terms_of_use(n.get_bool_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(LoginPageTextVisibilitySettings { store: store });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn test_layout_template_names() {
        assert_eq!(LayoutTemplateType::VerticalSplit.to_string(), "verticalSplit");
        assert_eq!(
            "unknownFutureValue".parse::<LayoutTemplateType>().unwrap(),
            LayoutTemplateType::UnknownFutureValue
        );
    }

    #[test]
    fn test_unknown_layout_template_is_skipped() {
        let config: LoginPageLayoutConfiguration =
            from_json_value(&json!({"isHeaderShown": true, "layoutTemplateType": "diagonal"}))
                .unwrap();
        assert_eq!(config.is_header_shown().unwrap(), Some(true));
        assert_eq!(config.layout_template_type().unwrap(), None);
    }

    #[test]
    fn test_visibility_round_trip() {
        let mut settings = LoginPageTextVisibilitySettings::new();
        settings.set_hide_forgot_my_password(Some(true)).unwrap();
        settings.set_hide_terms_of_use(Some(false)).unwrap();

        let value = to_json_value(&settings).unwrap();
        assert_eq!(
            value,
            json!({"hideForgotMyPassword": true, "hideTermsOfUse": false})
        );
        let decoded: LoginPageTextVisibilitySettings = from_json_value(&value).unwrap();
        assert_eq!(decoded, settings);
    }
}
