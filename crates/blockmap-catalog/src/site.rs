//! Built-in block catalog of the marketing site

use crate::entry::Catalog;

/// Every content-block type the site's CMS space defines, with the
/// component that renders it
pub const SITE_CATALOG: &[(&str, &str)] = &[
    // Base
    ("page", "Page"),
    ("teaser", "Teaser"),
    ("hero_teaser", "HeroTeaser"),
    ("grid", "Grid"),
    ("feature", "Feature"),
    ("hero", "Hero"),
    ("testimonial", "Testimonial"),
    // Layout
    ("header_nav", "HeaderNav"),
    ("nav_item", "NavItem"),
    ("footer", "Footer"),
    ("navigation_column", "NavigationColumn"),
    ("navigation_item", "NavigationItem"),
    // Content blocks
    ("image_text_section", "ImageTextSection"),
    ("cta_banner", "CtaBanner"),
    ("cta_button", "CtaButton"),
    ("testimonial_section", "TestimonialSection"),
    ("testimonial_card", "TestimonialCard"),
    ("client_logos", "ClientLogos"),
    ("accordion", "Accordion"),
    ("accordion_item", "AccordionItem"),
    ("booking_form", "BookingForm"),
    ("fleet_list", "FleetList"),
    ("fleet_item", "FleetItem"),
    ("tab_module", "TabModule"),
    ("tab_item", "TabItem"),
    ("services_slider", "ServicesSlider"),
    ("services_slide", "ServicesSlide"),
];

/// [`SITE_CATALOG`] as an owned catalog
#[must_use]
pub fn site_catalog() -> Catalog {
    Catalog::from_table(SITE_CATALOG)
}
