use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use dioxus::prelude::*;
use store::MarketConfig;

use views::{AppLayout, Home, Profile, SellerDashboard, ServiceDetails, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/signup")]
        SignUp {},
        #[route("/signin")]
        SignIn {},
        #[route("/seller-dashboard")]
        SellerDashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/service/:id")]
        ServiceDetails { id: String },
}

fn main() {
    dioxus::launch(App);
}

/// Read `khidma.toml` from the data directory, writing the defaults on first run.
fn load_config() -> MarketConfig {
    load_config_from(&ui::data_dir())
}

/// Only a missing file gets the defaults written; any other read failure
/// leaves the file alone.
fn load_config_from(dir: &Path) -> MarketConfig {
    let path = dir.join(MarketConfig::filename());

    match fs::read_to_string(&path) {
        Ok(text) => match MarketConfig::from_toml(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid config at {}: {}", path.display(), e);
                MarketConfig::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = MarketConfig::default();
            if let Err(e) = write_default_config(dir, &path, &config) {
                tracing::warn!("Failed to write default config: {}", e);
            }
            config
        }
        Err(e) => {
            tracing::warn!("Failed to read config at {}: {}", path.display(), e);
            MarketConfig::default()
        }
    }
}

fn write_default_config(dir: &Path, path: &Path, config: &MarketConfig) -> Result<(), String> {
    let text = config.to_toml().map_err(|e| e.to_string())?;
    fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    fs::write(path, text).map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("khidma");

        assert_eq!(load_config_from(&base), MarketConfig::default());
        let written = fs::read_to_string(base.join("khidma.toml")).unwrap();
        assert_eq!(MarketConfig::from_toml(&written).unwrap(), MarketConfig::default());
    }

    #[test]
    fn test_existing_config_is_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("khidma.toml"),
            "[carousel]\nautoplay_interval_ms = 0\n",
        )
        .unwrap();

        let config = load_config_from(dir.path());
        assert_eq!(config.carousel.autoplay_interval_ms, 0);
    }

    #[test]
    fn test_unreadable_config_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("khidma.toml");
        let original = [b'[', 0xFF, b']'];
        fs::write(&path, original).unwrap();

        assert_eq!(load_config_from(dir.path()), MarketConfig::default());
        assert_eq!(fs::read(&path).unwrap(), original);
    }
}
