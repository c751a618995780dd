//! Site data context: menu, contact numbers and site name.
//!
//! Starts from the data handed in by the caller (built-in defaults on the
//! client, configuration on the server). In the browser it then asks the
//! server for its configured data and swaps it in.

use dioxus::prelude::*;

use crate::nav::SiteData;

/// Global site state shared via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    data: Signal<SiteData>,
    /// Whether server data has replaced the initial data
    loaded: Signal<bool>,
}

impl SiteContext {
    pub fn data(&self) -> SiteData {
        (self.data)()
    }

    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }

    pub fn replace(&self, site: SiteData) {
        let mut data = self.data;
        let mut loaded = self.loaded;
        data.set(site);
        loaded.set(true);
    }
}

/// Initialize site context provider - call once at app root
pub fn use_site_provider(initial: SiteData) -> SiteContext {
    let data = use_signal(move || initial);
    let loaded = use_signal(|| false);

    let ctx = use_context_provider(|| SiteContext { data, loaded });

    // Fetch configured site data from server
    #[cfg(target_arch = "wasm32")]
    {
        use crate::app::api::{fetch_json, SITE_ENDPOINT};
        use crate::nav::SitePayload;

        use_effect(move || {
            spawn(async move {
                match fetch_json::<SitePayload>(SITE_ENDPOINT).await {
                    Ok(payload) => match SiteData::try_from(payload) {
                        Ok(site) => ctx.replace(site),
                        Err(e) => tracing::warn!("server site data rejected: {}", e),
                    },
                    Err(e) => tracing::warn!("using built-in site data: {}", e),
                }
            });
        });
    }

    ctx
}

/// Get site context - use in any component
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}
