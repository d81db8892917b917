//! Organizational branding models

pub mod content_customization;
pub mod login_page;
pub mod organizational_branding;
pub mod properties;

pub use content_customization::{ContentCustomization, KeyValue};
pub use login_page::{
    LayoutTemplateType, LoginPageLayoutConfiguration, LoginPageTextVisibilitySettings,
};
pub use organizational_branding::{OrganizationalBranding, OrganizationalBrandingLocalization};
pub use properties::OrganizationalBrandingProperties;

discriminated_family! {
    /// Branding properties resolved to the concrete branding type
    pub enum OrganizationalBrandingPropertiesKind {
        base Properties(OrganizationalBrandingProperties),
        "#microsoft.graph.organizationalBranding" => Branding(OrganizationalBranding),
        "#microsoft.graph.organizationalBrandingLocalization" => Localization(OrganizationalBrandingLocalization),
    }
}
