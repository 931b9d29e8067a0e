//! Static generation driver: fetches everything once and writes the export.

use crate::api::ListingApi;
use crate::config::{BasePath, SiteConfig};
use crate::render::{self, PageMeta};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SITE_JS: &str = include_str!("../../assets/site.js");
const SITE_CSS: &str = include_str!("../../assets/site.css");

/// Outcome of a full site build
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of HTML pages written
    pub pages: usize,
    /// Property ids that got a detail page
    pub property_ids: Vec<u64>,
    /// Ids that were enumerated but could not be fetched individually
    pub missing: Vec<u64>,
}

/// A rendered property page
#[derive(Debug)]
pub struct DetailPage {
    pub id: u64,
    pub meta: PageMeta,
    /// False when the property fetch failed and the not-found body was used
    pub found: bool,
    pub html: String,
}

/// Every property id known to the API.
///
/// A failed listing call yields no ids, so the rest of the site still builds.
pub async fn enumerate_ids<A: ListingApi + ?Sized>(api: &A) -> Vec<u64> {
    match api.list_properties(None).await {
        Ok(listing) => listing.data.iter().map(|p| p.id).collect(),
        Err(err) => {
            warn!("Could not enumerate properties, skipping detail pages: {}", err);
            Vec::new()
        }
    }
}

/// Home page with the unfiltered listing pre-rendered into the grid
pub async fn render_home<A: ListingApi + ?Sized>(api: &A, base: &BasePath, api_base: &str) -> String {
    let (listing, settings) = tokio::join!(api.list_properties(None), api.get_settings());

    let properties = match listing {
        Ok(listing) => listing.data,
        Err(err) => {
            warn!("Failed to load properties for home page: {}", err);
            Vec::new()
        }
    };
    debug!("Home page gets {} properties", properties.len());

    let meta = PageMeta::new(format!("{} | Real Estate in Santa Catarina", settings.site_name()))
        .with_description(Some(
            "Premium real estate in Brazil. Houses, apartments and land in Santa Catarina.".to_string(),
        ));
    let body = render::home(properties, &settings, base, api_base);
    render::layout(&meta, &settings, base, body)
}

/// Property page for `id`, falling back to a generic title and the
/// not-found body when the property cannot be fetched
pub async fn render_detail<A: ListingApi + ?Sized>(api: &A, id: u64, base: &BasePath) -> DetailPage {
    let (property, settings) = tokio::join!(api.get_property(id), api.get_settings());

    match property {
        Ok(property) => {
            let meta = PageMeta::new(format!("{} | {}", property.title, settings.site_name()))
                .with_description(property.summary());
            let body = render::property_details(&property, &settings, base);
            DetailPage {
                id,
                html: render::layout(&meta, &settings, base, body),
                meta,
                found: true,
            }
        }
        Err(err) => {
            if err.is_not_found() {
                info!("Property {} no longer exists", id);
            } else {
                warn!("Failed to load property {}: {}", id, err);
            }
            let meta = PageMeta::new(format!("Property | {}", settings.site_name()));
            DetailPage {
                id,
                html: render::layout(&meta, &settings, base, render::not_found(base)),
                meta,
                found: false,
            }
        }
    }
}

/// Stand-alone not-found page served for unknown paths
pub async fn render_not_found<A: ListingApi + ?Sized>(api: &A, base: &BasePath) -> String {
    let settings = api.get_settings().await;
    let meta = PageMeta::new(format!("Not found | {}", settings.site_name()));
    render::layout(&meta, &settings, base, render::not_found(base))
}

/// Relative output path of a property page
pub fn detail_path(id: u64) -> PathBuf {
    Path::new("property").join(id.to_string()).join("index.html")
}

async fn write_page(out_dir: &Path, relative: &Path, contents: &str) -> Result<()> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("wrote {}", relative.display());
    Ok(())
}

/// Generate the whole export into `config.out_dir`
pub async fn build_site<A: ListingApi + ?Sized>(api: &A, config: &SiteConfig) -> Result<BuildReport> {
    let base = &config.base_path;
    let out_dir = &config.out_dir;
    let mut report = BuildReport::default();

    info!("Building site into {} (base path {:?})", out_dir.display(), base.as_str());

    let home = render_home(api, base, &config.api_base).await;
    write_page(out_dir, Path::new("index.html"), &home).await?;
    report.pages += 1;

    let ids = enumerate_ids(api).await;
    info!("Route expansion: {} property pages to generate", ids.len());

    for id in ids {
        let page = render_detail(api, id, base).await;
        write_page(out_dir, &detail_path(id), &page.html).await?;
        report.pages += 1;
        if page.found {
            report.property_ids.push(id);
        } else {
            report.missing.push(id);
        }
    }

    let not_found = render_not_found(api, base).await;
    write_page(out_dir, Path::new("404.html"), &not_found).await?;
    report.pages += 1;

    write_page(out_dir, Path::new("assets/site.js"), SITE_JS).await?;
    write_page(out_dir, Path::new("assets/site.css"), SITE_CSS).await?;

    info!(
        "Site generation complete: {} pages ({} properties, {} missing)",
        report.pages,
        report.property_ids.len(),
        report.missing.len()
    );
    Ok(report)
}
