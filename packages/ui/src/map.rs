//! # Leaflet map bridge
//!
//! The page has one Leaflet map. [`MapProvider`] owns a [`MapHandle`] and
//! shares it through context; [`MapView`] renders the container, loads
//! Leaflet from the CDN, creates the map at the configured center and flips
//! the handle to ready. Everything else ([`crate::ReviewForm`],
//! [`crate::ReviewList`], [`crate::MapSearch`]) calls [`use_map`] and pushes
//! view changes or markers.
//!
//! Markers are fire-and-forget: no identity, no removal. Calls made before the
//! map is ready are dropped.

use api::GeoPoint;
use dioxus::prelude::*;
use store::MapConfig;

use crate::script::{js_string_escape, load_script, load_stylesheet_js};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Global holding the live `L.Map`.
const MAP_GLOBAL: &str = "window.__reviewsMap";

/// Handle to the page's map. `Copy`, so it moves freely into closures.
#[derive(Clone, Copy, PartialEq)]
pub struct MapHandle {
    ready: Signal<bool>,
}

impl MapHandle {
    pub fn is_ready(&self) -> bool {
        (self.ready)()
    }

    /// Recentre the map.
    pub fn set_view(&self, point: GeoPoint, zoom: u8) {
        if !*self.ready.peek() {
            tracing::debug!("map not ready, dropping set_view");
            return;
        }
        document::eval(&set_view_js(point, zoom));
    }

    /// Drop a marker with an HTML popup, optionally opened.
    pub fn add_marker(&self, point: GeoPoint, popup_html: &str, open: bool) {
        if !*self.ready.peek() {
            tracing::debug!("map not ready, dropping marker");
            return;
        }
        document::eval(&add_marker_js(point, popup_html, open));
    }
}

/// Where a lookup lands: a recentre plus one opened marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MapFocus {
    pub point: GeoPoint,
    pub zoom: u8,
    pub popup_html: String,
}

impl MapHandle {
    pub fn focus(&self, focus: &MapFocus) {
        self.set_view(focus.point, focus.zoom);
        self.add_marker(focus.point, &focus.popup_html, true);
    }
}

/// Get the page's map handle.
pub fn use_map() -> MapHandle {
    use_context::<MapHandle>()
}

/// Provides a [`MapHandle`] to its children.
#[component]
pub fn MapProvider(children: Element) -> Element {
    let ready = use_signal(|| false);
    use_context_provider(|| MapHandle { ready });

    rsx! {
        {children}
    }
}

/// The map container. Must sit under a [`MapProvider`].
#[component]
pub fn MapView(#[props(default = "map".to_string())] id: String) -> Element {
    let mut handle = use_map();
    let config = crate::use_config().map;

    {
        let id = id.clone();
        use_effect(move || {
            let id = id.clone();
            let config = config.clone();
            spawn(async move {
                document::eval(&load_stylesheet_js("leaflet-css", LEAFLET_CSS));
                if !load_script("leaflet-js", LEAFLET_JS).await {
                    crate::alert("Could not load the map");
                    return;
                }
                document::eval(&init_map_js(&id, &config));
                handle.ready.set(true);
                tracing::info!("map ready at {},{}", config.center_lat, config.center_lng);
            });
        });
    }

    rsx! {
        div {
            id: "{id}",
            class: "map",
        }
    }
}

/// Leaflet `L.LatLng` literal.
fn lat_lng(point: GeoPoint) -> String {
    format!("[{}, {}]", point.lat, point.lng)
}

fn init_map_js(container_id: &str, config: &MapConfig) -> String {
    format!(
        r#"(function() {{
            var el = document.getElementById({id_js});
            if (!el || el._map || typeof L === 'undefined') return;
            var map = L.map(el).setView({center}, {zoom});
            L.tileLayer({tiles_js}, {{ attribution: {attribution_js} }}).addTo(map);
            el._map = map;
            {global} = map;
        }})();"#,
        id_js = js_string_escape(container_id),
        center = lat_lng(GeoPoint::new(config.center_lat, config.center_lng)),
        zoom = config.zoom,
        tiles_js = js_string_escape(&config.tile_url),
        attribution_js = js_string_escape(TILE_ATTRIBUTION),
        global = MAP_GLOBAL,
    )
}

fn set_view_js(point: GeoPoint, zoom: u8) -> String {
    format!(
        r#"(function() {{
            var map = {global};
            if (!map) return;
            map.setView({at}, {zoom});
        }})();"#,
        global = MAP_GLOBAL,
        at = lat_lng(point),
    )
}

fn add_marker_js(point: GeoPoint, popup_html: &str, open: bool) -> String {
    format!(
        r#"(function() {{
            var map = {global};
            if (!map) return;
            var marker = L.marker({at}).addTo(map).bindPopup({popup_js});
            if ({open}) marker.openPopup();
        }})();"#,
        global = MAP_GLOBAL,
        at = lat_lng(point),
        popup_js = js_string_escape(popup_html),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_map_uses_config() {
        let js = init_map_js("map", &MapConfig::default());
        assert!(js.contains(r#"document.getElementById("map")"#));
        assert!(js.contains("setView([36.7213, -4.4214], 13)"));
        assert!(js.contains(r#"L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png""#));
        assert!(js.contains("window.__reviewsMap = map;"));
    }

    #[test]
    fn test_set_view() {
        let js = set_view_js(GeoPoint::new(40.4168, -3.7038), 16);
        assert!(js.contains("map.setView([40.4168, -3.7038], 16);"));
    }

    #[test]
    fn test_marker_popup_is_js_escaped() {
        let js = add_marker_js(GeoPoint::new(1.5, -2.0), "<b>Bar \"Paco\"</b>", true);
        assert!(js.contains("L.marker([1.5, -2])"));
        assert!(js.contains(r#"bindPopup("\u003cb>Bar \"Paco\"\u003c/b>")"#));
        assert!(js.contains("if (true) marker.openPopup();"));

        let closed = add_marker_js(GeoPoint::new(0.0, 0.0), "x", false);
        assert!(closed.contains("if (false)"));
    }
}
