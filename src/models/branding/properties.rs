//! Branding properties shared by the default branding and its localizations

use super::{ContentCustomization, LoginPageLayoutConfiguration, LoginPageTextVisibilitySettings};
use crate::models::Entity;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ParseNodeExt, SerializationError,
    SerializationWriter, as_parsable, field, inherit_field_deserializers,
};

/// Customizable sign-in experience of a tenant
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationalBrandingProperties {
    base: Entity,
}

impl OrganizationalBrandingProperties {
    pub fn new() -> Self {
        Self {
            base: Entity::new(),
        }
    }

    store_accessors! {
        /// Color shown in place of the background image in low-bandwidth connections
        background_color / set_background_color: String = "backgroundColor";
        /// Image that appears as the background of the sign-in page
        background_image / set_background_image: Vec<u8> = "backgroundImage";
        background_image_relative_url / set_background_image_relative_url: String = "backgroundImageRelativeUrl";
        /// Banner version of the company logo shown on the sign-in page
        banner_logo / set_banner_logo: Vec<u8> = "bannerLogo";
        banner_logo_relative_url / set_banner_logo_relative_url: String = "bannerLogoRelativeUrl";
        /// Base URLs of the CDN providers serving branding assets
        cdn_list / set_cdn_list: Vec<String> = "cdnList";
        /// Authentication flow texts, honored by external tenants only
        content_customization / set_content_customization: ContentCustomization = "contentCustomization";
        custom_account_reset_credentials_url / set_custom_account_reset_credentials_url: String = "customAccountResetCredentialsUrl";
        custom_cannot_access_your_account_text / set_custom_cannot_access_your_account_text: String = "customCannotAccessYourAccountText";
        custom_cannot_access_your_account_url / set_custom_cannot_access_your_account_url: String = "customCannotAccessYourAccountUrl";
        /// CSS styling applied to the sign-in page
        custom_css / set_custom_css: Vec<u8> = "customCSS";
        custom_css_relative_url / set_custom_css_relative_url: String = "customCSSRelativeUrl";
        custom_forgot_my_password_text / set_custom_forgot_my_password_text: String = "customForgotMyPasswordText";
        custom_privacy_and_cookies_text / set_custom_privacy_and_cookies_text: String = "customPrivacyAndCookiesText";
        custom_privacy_and_cookies_url / set_custom_privacy_and_cookies_url: String = "customPrivacyAndCookiesUrl";
        custom_reset_it_now_text / set_custom_reset_it_now_text: String = "customResetItNowText";
        custom_terms_of_use_text / set_custom_terms_of_use_text: String = "customTermsOfUseText";
        custom_terms_of_use_url / set_custom_terms_of_use_url: String = "customTermsOfUseUrl";
        favicon / set_favicon: Vec<u8> = "favicon";
        favicon_relative_url / set_favicon_relative_url: String = "faviconRelativeUrl";
        header_background_color / set_header_background_color: String = "headerBackgroundColor";
        /// Company logo shown in the header of the sign-in page
        header_logo / set_header_logo: Vec<u8> = "headerLogo";
        header_logo_relative_url / set_header_logo_relative_url: String = "headerLogoRelativeUrl";
        login_page_layout_configuration / set_login_page_layout_configuration: LoginPageLayoutConfiguration = "loginPageLayoutConfiguration";
        login_page_text_visibility_settings / set_login_page_text_visibility_settings: LoginPageTextVisibilitySettings = "loginPageTextVisibilitySettings";
        /// Text shown at the bottom of the sign-in box
        sign_in_page_text / set_sign_in_page_text: String = "signInPageText";
        /// Square version of the company logo shown in Windows 10 OOBE
        square_logo / set_square_logo: Vec<u8> = "squareLogo";
        square_logo_dark / set_square_logo_dark: Vec<u8> = "squareLogoDark";
        square_logo_dark_relative_url / set_square_logo_dark_relative_url: String = "squareLogoDarkRelativeUrl";
        square_logo_relative_url / set_square_logo_relative_url: String = "squareLogoRelativeUrl";
        /// Hint shown in the username textbox of the sign-in screen
        username_hint_text / set_username_hint_text: String = "usernameHintText";
    }

    /// Write the fields declared by this type after those of [`Entity`]
    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_string_value("backgroundColor", self.background_color()?.as_deref())?;
        writer.write_byte_array_value("backgroundImage", self.background_image()?.as_deref())?;
        writer.write_string_value(
            "backgroundImageRelativeUrl",
            self.background_image_relative_url()?.as_deref(),
        )?;
        writer.write_byte_array_value("bannerLogo", self.banner_logo()?.as_deref())?;
        writer.write_string_value(
            "bannerLogoRelativeUrl",
            self.banner_logo_relative_url()?.as_deref(),
        )?;
        writer.write_collection_of_string_values("cdnList", self.cdn_list()?.as_deref())?;
        writer.write_object_value(
            "contentCustomization",
            as_parsable(&self.content_customization()?),
        )?;
        writer.write_string_value(
            "customAccountResetCredentialsUrl",
            self.custom_account_reset_credentials_url()?.as_deref(),
        )?;
        writer.write_string_value(
            "customCannotAccessYourAccountText",
            self.custom_cannot_access_your_account_text()?.as_deref(),
        )?;
        writer.write_string_value(
            "customCannotAccessYourAccountUrl",
            self.custom_cannot_access_your_account_url()?.as_deref(),
        )?;
        writer.write_byte_array_value("customCSS", self.custom_css()?.as_deref())?;
        writer.write_string_value(
            "customCSSRelativeUrl",
            self.custom_css_relative_url()?.as_deref(),
        )?;
        writer.write_string_value(
            "customForgotMyPasswordText",
            self.custom_forgot_my_password_text()?.as_deref(),
        )?;
        writer.write_string_value(
            "customPrivacyAndCookiesText",
            self.custom_privacy_and_cookies_text()?.as_deref(),
        )?;
        writer.write_string_value(
            "customPrivacyAndCookiesUrl",
            self.custom_privacy_and_cookies_url()?.as_deref(),
        )?;
        writer.write_string_value(
            "customResetItNowText",
            self.custom_reset_it_now_text()?.as_deref(),
        )?;
        writer.write_string_value(
            "customTermsOfUseText",
            self.custom_terms_of_use_text()?.as_deref(),
        )?;
        writer.write_string_value(
            "customTermsOfUseUrl",
            self.custom_terms_of_use_url()?.as_deref(),
        )?;
        writer.write_byte_array_value("favicon", self.favicon()?.as_deref())?;
        writer.write_string_value("faviconRelativeUrl", self.favicon_relative_url()?.as_deref())?;
        writer.write_string_value(
            "headerBackgroundColor",
            self.header_background_color()?.as_deref(),
        )?;
        writer.write_byte_array_value("headerLogo", self.header_logo()?.as_deref())?;
        writer.write_string_value(
            "headerLogoRelativeUrl",
            self.header_logo_relative_url()?.as_deref(),
        )?;
        writer.write_object_value(
            "loginPageLayoutConfiguration",
            as_parsable(&self.login_page_layout_configuration()?),
        )?;
        writer.write_object_value(
            "loginPageTextVisibilitySettings",
            as_parsable(&self.login_page_text_visibility_settings()?),
        )?;
        writer.write_string_value("signInPageText", self.sign_in_page_text()?.as_deref())?;
        writer.write_byte_array_value("squareLogo", self.square_logo()?.as_deref())?;
        writer.write_byte_array_value("squareLogoDark", self.square_logo_dark()?.as_deref())?;
        writer.write_string_value(
            "squareLogoDarkRelativeUrl",
            self.square_logo_dark_relative_url()?.as_deref(),
        )?;
        writer.write_string_value(
            "squareLogoRelativeUrl",
            self.square_logo_relative_url()?.as_deref(),
        )?;
        writer.write_string_value("usernameHintText", self.username_hint_text()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for OrganizationalBrandingProperties {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit_field_deserializers(Entity::field_deserializers(), |m: &mut Self| {
            &mut m.base
        });
        fields.insert(
            "backgroundColor",
            field(|m: &mut Self, n| Ok(m.set_background_color(n.get_string_value()?)?)),
        );
        fields.insert(
            "backgroundImage",
            field(|m: &mut Self, n| Ok(m.set_background_image(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "backgroundImageRelativeUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_background_image_relative_url(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "bannerLogo",
            field(|m: &mut Self, n| Ok(m.set_banner_logo(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "bannerLogoRelativeUrl",
            field(|m: &mut Self, n| Ok(m.set_banner_logo_relative_url(n.get_string_value()?)?)),
        );
        fields.insert(
            "cdnList",
            field(|m: &mut Self, n| {
                Ok(m.set_cdn_list(n.get_collection_of_primitive_values::<String>()?)?)
            }),
        );
        fields.insert(
            "contentCustomization",
            field(|m: &mut Self, n| {
                Ok(m.set_content_customization(n.get_object_value::<ContentCustomization>()?)?)
            }),
        );
        fields.insert(
            "customAccountResetCredentialsUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_custom_account_reset_credentials_url(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "customCannotAccessYourAccountText",
            field(|m: &mut Self, n| {
                Ok(m.set_custom_cannot_access_your_account_text(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "customCannotAccessYourAccountUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_custom_cannot_access_your_account_url(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "customCSS",
            field(|m: &mut Self, n| Ok(m.set_custom_css(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "customCSSRelativeUrl",
            field(|m: &mut Self, n| Ok(m.set_custom_css_relative_url(n.get_string_value()?)?)),
        );
        fields.insert(
            "customForgotMyPasswordText",
            field(|m: &mut Self, n| {
                Ok(m.set_custom_forgot_my_password_text(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "customPrivacyAndCookiesText",
            field(|m: &mut Self, n| {
                Ok(m.set_custom_privacy_and_cookies_text(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "customPrivacyAndCookiesUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_custom_privacy_and_cookies_url(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "customResetItNowText",
            field(|m: &mut Self, n| Ok(m.set_custom_reset_it_now_text(n.get_string_value()?)?)),
        );
        fields.insert(
            "customTermsOfUseText",
            field(|m: &mut Self, n| Ok(m.set_custom_terms_of_use_text(n.get_string_value()?)?)),
        );
        fields.insert(
            "customTermsOfUseUrl",
            field(|m: &mut Self, n| Ok(m.set_custom_terms_of_use_url(n.get_string_value()?)?)),
        );
        fields.insert(
            "favicon",
            field(|m: &mut Self, n| Ok(m.set_favicon(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "faviconRelativeUrl",
            field(|m: &mut Self, n| Ok(m.set_favicon_relative_url(n.get_string_value()?)?)),
        );
        fields.insert(
            "headerBackgroundColor",
            field(|m: &mut Self, n| Ok(m.set_header_background_color(n.get_string_value()?)?)),
        );
        fields.insert(
            "headerLogo",
            field(|m: &mut Self, n| Ok(m.set_header_logo(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "headerLogoRelativeUrl",
            field(|m: &mut Self, n| Ok(m.set_header_logo_relative_url(n.get_string_value()?)?)),
        );
        fields.insert(
            "loginPageLayoutConfiguration",
            field(|m: &mut Self, n| {
                Ok(m.set_login_page_layout_configuration(
                    n.get_object_value::<LoginPageLayoutConfiguration>()?,
                )?)
            }),
        );
        fields.insert(
            "loginPageTextVisibilitySettings",
            field(|m: &mut Self, n| {
                Ok(m.set_login_page_text_visibility_settings(
                    n.get_object_value::<LoginPageTextVisibilitySettings>()?,
                )?)
            }),
        );
        fields.insert(
            "signInPageText",
            field(|m: &mut Self, n| Ok(m.set_sign_in_page_text(n.get_string_value()?)?)),
        );
        fields.insert(
            "squareLogo",
            field(|m: &mut Self, n| Ok(m.set_square_logo(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "squareLogoDark",
            field(|m: &mut Self, n| Ok(m.set_square_logo_dark(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "squareLogoDarkRelativeUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_square_logo_dark_relative_url(n.get_string_value()?)?)
            }),
        );
        fields.insert(
            "squareLogoRelativeUrl",
            field(|m: &mut Self, n| Ok(m.set_square_logo_relative_url(n.get_string_value()?)?)),
        );
        fields.insert(
            "usernameHintText",
            field(|m: &mut Self, n| Ok(m.set_username_hint_text(n.get_string_value()?)?)),
        );
        fields
    }
}

impl_parsable!(OrganizationalBrandingProperties { base: base });
derive_base!(OrganizationalBrandingProperties => Entity);
