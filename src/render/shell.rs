//! Page chrome shared by every exported page.
//!
//! This is the only module that writes markup from the settings endpoint
//! without escaping: the chat widget and the analytics snippet.

use crate::config::BasePath;
use crate::models::{Settings, TrustedMarkup};
use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title and description of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

fn trusted(markup: &TrustedMarkup) -> PreEscaped<&str> {
    PreEscaped(markup.as_str())
}

fn analytics_head(gtm_id: &str) -> Markup {
    // gtm_id is restricted to [A-Za-z0-9_-] by Settings::gtm_id
    let snippet = format!(
        "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\
new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\
j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\
'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\
}})(window,document,'script','dataLayer','{}');",
        gtm_id
    );
    html! { script { (PreEscaped(snippet)) } }
}

fn analytics_noscript(gtm_id: &str) -> Markup {
    html! {
        noscript {
            iframe src=(format!("https://www.googletagmanager.com/ns.html?id={}", gtm_id))
                height="0" width="0" style="display:none;visibility:hidden" {}
        }
    }
}

fn header(settings: &Settings, base: &BasePath) -> Markup {
    html! {
        header.site-header {
            div.container {
                a.brand href=(base.home()) { (settings.site_name()) }
                nav {
                    a href=(base.home()) { "Home" }
                    a href=(base.link("/#properties")) { "Properties" }
                    a href=(base.link("/#contact")) { "Contact" }
                }
            }
        }
    }
}

fn footer(settings: &Settings) -> Markup {
    let year = Utc::now().year();

    html! {
        footer #contact.site-footer {
            div.container.footer__columns {
                div {
                    h3 { (settings.site_name()) }
                    p { "Premium real estate in Santa Catarina, Brazil. Investments and life by the ocean." }
                }
                div {
                    h4 { "Contacts" }
                    @if let Some(email) = settings.contact_email() {
                        a href=(format!("mailto:{}", email)) { (email) }
                    }
                    @if let Some(phone) = settings.contact_phone() {
                        a href=(format!("tel:{}", phone)) { (phone) }
                    }
                }
                div {
                    h4 { "Location" }
                    p {
                        "Santa Catarina, Brasil" br;
                        "Florianópolis • Balneário Camboriú" br;
                        "Itapema • Porto Belo"
                    }
                }
            }
            div.footer__copyright {
                "© " (year) " " (settings.site_name()) ". All rights reserved."
            }
        }
    }
}

/// Wrap a page body in the full document
pub fn layout(meta: &PageMeta, settings: &Settings, base: &BasePath, body: Markup) -> String {
    let gtm_id = settings.gtm_id();

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("listing-site v{}", VERSION));
                title { (meta.title) }
                @if let Some(description) = &meta.description {
                    meta name="description" content=(description);
                }
                link rel="stylesheet" href=(base.asset("site.css"));
                @if let Some(id) = gtm_id {
                    (analytics_head(id))
                }
            }
            body {
                @if let Some(id) = gtm_id {
                    (analytics_noscript(id))
                }
                (header(settings, base))
                main { (body) }
                (footer(settings))
                @if let Some(widget) = settings.chat_widget() {
                    div.chat-widget { (trusted(widget)) }
                }
                script src=(base.asset("site.js")) defer {}
            }
        }
    };
    markup.into_string()
}
