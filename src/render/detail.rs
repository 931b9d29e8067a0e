use crate::config::BasePath;
use crate::models::{Property, Settings};
use crate::render::encode_component;
use crate::render::labels::{status_badge, type_badge};
use crate::render::placeholder_icon;
use maud::{html, Markup};

pub const DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// Image selection state of a property gallery.
///
/// The active index only moves through [`Gallery::select`], which rejects
/// indices outside the image list.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    images: &'a [String],
    active: usize,
}

impl<'a> Gallery<'a> {
    pub fn new(images: &'a [String]) -> Self {
        Self { images, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_image(&self) -> Option<&'a str> {
        self.images.get(self.active).map(String::as_str)
    }

    /// Thumbnails only make sense with something to switch between
    pub fn shows_thumbnails(&self) -> bool {
        self.images.len() > 1
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn thumbnails(&self) -> impl Iterator<Item = (usize, &'a str, bool)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(move |(i, src)| (i, src.as_str(), i == self.active))
    }
}

/// WhatsApp chat link for the configured phone, optionally with a prefilled
/// message. `None` when no usable phone number is configured.
pub fn whatsapp_link(settings: &Settings, message: Option<&str>) -> Option<String> {
    let number = settings.phone_digits()?;
    Some(match message {
        Some(text) => format!("https://wa.me/{}?text={}", number, encode_component(text)),
        None => format!("https://wa.me/{}", number),
    })
}

/// Mail link asking about `title`, `None` without a contact email
pub fn mail_link(settings: &Settings, title: &str) -> Option<String> {
    let email = settings.contact_email()?;
    let subject = format!("Inquiry about property: {}", title);
    Some(format!("mailto:{}?subject={}", email, encode_component(&subject)))
}

fn greeting(title: &str) -> String {
    format!("Hello! I'm interested in this property: {}", title)
}

fn gallery(property: &Property, state: &Gallery) -> Markup {
    html! {
        div.gallery {
            div.gallery__main {
                @if let Some(src) = state.active_image() {
                    img #gallery-main src=(src) alt=(property.title);
                } @else {
                    div.gallery__placeholder { (placeholder_icon("icon icon--xl")) }
                }
            }
            @if state.shows_thumbnails() {
                div.gallery__thumbs {
                    @for (index, src, active) in state.thumbnails() {
                        button.thumb.active[active] type="button" data-index=(index) data-src=(src) {
                            img src=(src) alt="";
                        }
                    }
                }
            }
        }
    }
}

/// Body of a property page
pub fn property_details(property: &Property, settings: &Settings, base: &BasePath) -> Markup {
    let status = status_badge(&property.status);
    let kind = type_badge(&property.kind);
    let images = Gallery::new(&property.images);
    let whatsapp = whatsapp_link(settings, Some(greeting(&property.title).as_str()));
    let mail = mail_link(settings, &property.title);

    html! {
        div.detail {
            nav.breadcrumb {
                a href=(base.home()) { "← Back to listings" }
            }
            div.detail__layout {
                (gallery(property, &images))
                div.detail__info {
                    div.chips {
                        span class={ "badge " (status.class) } { (status.label) }
                        span class={ "badge " (kind.class) } { (kind.label) }
                    }
                    h1.detail__title { (property.title) }
                    div.detail__location { (property.location) }
                    div.detail__price { (property.formatted_price()) }
                    section.detail__description {
                        h3 { "Description" }
                        p { (property.description().unwrap_or(DESCRIPTION_PLACEHOLDER)) }
                    }
                    div.cta {
                        @if let Some(href) = &whatsapp {
                            a.btn-primary.cta__whatsapp href=(href) target="_blank" rel="noopener noreferrer" {
                                "Message on WhatsApp"
                            }
                        }
                        @if let Some(href) = &mail {
                            a.btn-outline.cta__email href=(href) { "Send an email" }
                        }
                    }
                }
            }
        }
    }
}

/// Shown for a property id the API does not know (or could not serve)
pub fn not_found(base: &BasePath) -> Markup {
    html! {
        div.not-found {
            h1 { "Property not found" }
            a.btn-primary href=(base.home()) { "Back to home page" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::models::{sample_property, PropertyStatus, PropertyType};
    use scraper::{Html, Selector};

    fn contact_settings() -> Settings {
        Settings {
            contact_email: Some("sales@example.com".to_string()),
            contact_phone: Some("+55 48 99999-0000".to_string()),
            ..Settings::default()
        }
    }

    fn select_count(html: &str, selector: &str) -> usize {
        let doc = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector).count()
    }

    #[test]
    fn test_gallery_selection_is_bounded() {
        let images = vec!["x".to_string(), "y".to_string()];
        let mut gallery = Gallery::new(&images);
        assert_eq!(gallery.active_image(), Some("x"));

        assert!(gallery.select(1));
        assert_eq!(gallery.active_image(), Some("y"));
        assert!(!gallery.select(2));
        assert_eq!(gallery.active_index(), 1);
        assert!(gallery.select(0));
        assert_eq!(gallery.active_image(), Some("x"));
    }

    #[test]
    fn test_no_images_renders_placeholder_without_thumbnails() {
        let property = sample_property(1, PropertyType::House, PropertyStatus::Active);
        let html = property_details(&property, &Settings::default(), &BasePath::default())
            .into_string();
        assert_eq!(select_count(&html, ".gallery__placeholder"), 1);
        assert_eq!(select_count(&html, "button.thumb"), 0);
        assert_eq!(select_count(&html, "#gallery-main"), 0);
    }

    #[test]
    fn test_single_image_has_no_thumbnail_strip() {
        let mut property = sample_property(1, PropertyType::House, PropertyStatus::Active);
        property.images = vec!["only.jpg".to_string()];
        let html = property_details(&property, &Settings::default(), &BasePath::default())
            .into_string();
        assert_eq!(select_count(&html, "#gallery-main"), 1);
        assert_eq!(select_count(&html, ".gallery__thumbs"), 0);
    }

    #[test]
    fn test_two_images_default_to_first_with_two_thumbnails() {
        let mut property = sample_property(1, PropertyType::House, PropertyStatus::Active);
        property.images = vec!["x".to_string(), "y".to_string()];
        let html = property_details(&property, &Settings::default(), &BasePath::default())
            .into_string();

        let doc = Html::parse_fragment(&html);
        let main = Selector::parse("#gallery-main").unwrap();
        let src = doc.select(&main).next().unwrap().value().attr("src");
        assert_eq!(src, Some("x"));

        let thumbs = Selector::parse("button.thumb").unwrap();
        let indices: Vec<&str> = doc
            .select(&thumbs)
            .filter_map(|el| el.value().attr("data-index"))
            .collect();
        assert_eq!(indices, vec!["0", "1"]);
        assert_eq!(select_count(&html, "button.thumb.active"), 1);
    }

    #[test]
    fn test_contact_links_include_title() {
        let mut property = sample_property(1, PropertyType::House, PropertyStatus::Active);
        property.title = "Casa & Mar".to_string();
        let settings = contact_settings();

        let whatsapp = whatsapp_link(&settings, Some(greeting(&property.title).as_str())).unwrap();
        assert!(whatsapp.starts_with("https://wa.me/5548999990000?text="));
        assert!(whatsapp.contains("Casa%20%26%20Mar"));

        let mail = mail_link(&settings, &property.title).unwrap();
        assert!(mail.starts_with("mailto:sales@example.com?subject="));
        assert!(mail.contains("Casa%20%26%20Mar"));

        let html = property_details(&property, &settings, &BasePath::default()).into_string();
        assert_eq!(select_count(&html, "a.cta__whatsapp"), 1);
        assert_eq!(select_count(&html, "a.cta__email"), 1);
    }

    #[test]
    fn test_contact_links_absent_without_settings() {
        let property = sample_property(1, PropertyType::House, PropertyStatus::Active);
        let settings = Settings::default();
        assert!(whatsapp_link(&settings, None).is_none());
        assert!(mail_link(&settings, "x").is_none());

        let html = property_details(&property, &settings, &BasePath::default()).into_string();
        assert!(!html.contains("wa.me"));
        assert!(!html.contains("mailto:"));
    }

    #[test]
    fn test_missing_description_and_bad_price_degrade() {
        let mut property = sample_property(1, PropertyType::Land, PropertyStatus::Sold);
        property.description = None;
        property.price = "n/a".to_string();
        let html = property_details(&property, &Settings::default(), &BasePath::default())
            .into_string();
        assert!(html.contains(DESCRIPTION_PLACEHOLDER));
        assert!(!html.contains("NaN"));
        assert!(html.contains("Sold"));
    }

    #[test]
    fn test_not_found_links_home_through_base_path() {
        let base = BasePath::for_environment(Environment::Production);
        let html = not_found(&base).into_string();
        assert!(html.contains("Property not found"));
        assert!(html.contains(r#"href="/migronis-brazil/""#));
    }
}
