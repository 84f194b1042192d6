//! Print transport - writes the route listing.

use std::io::Write;
use tracing::info;

use super::config::{PrintConfig, PrintFormat};
use super::TransportResult;
use crate::domains::resources::Application;

/// Renders an application's resources and writes them out.
pub struct PrintTransport {
    config: PrintConfig,
}

impl PrintTransport {
    pub fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    /// Render the listing in the configured format.
    pub fn render<R>(&self, app: &Application<R>) -> TransportResult<String> {
        Ok(match self.config.format {
            PrintFormat::Text => app.to_string(),
            PrintFormat::Json => serde_json::to_string_pretty(app.resources())?,
        })
    }

    /// Write the listing to `out`.
    pub fn run<R, W: Write>(&self, app: &Application<R>, mut out: W) -> TransportResult<()> {
        let listing = self.render(app)?;
        out.write_all(listing.as_bytes())?;
        if !listing.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()?;

        info!("Printed {} resource(s)", app.resources().len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::RouteTable;
    use crate::domains::controllers::ControllerDefinition;

    fn app() -> Application<RouteTable<()>> {
        let mut app = Application::new(RouteTable::new());
        app.resource(
            "photos",
            ControllerDefinition::new()
                .action("index", ())
                .action("show", ()),
        );
        app
    }

    #[test]
    fn test_text_listing() {
        let mut out = Vec::new();
        PrintTransport::new(PrintConfig::default())
            .run(&app(), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "photos:\nGET\tindex\t/photos.:format?\nGET\tshow\t/photos/:photo.:format?\n"
        );
    }

    #[test]
    fn test_json_listing() {
        let transport = PrintTransport::new(PrintConfig {
            format: PrintFormat::Json,
        });
        let rendered = transport.render(&app()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["photos"]["id"], "photo");
        assert_eq!(value["photos"]["root"], false);
        assert_eq!(value["photos"]["routes"][1]["method"], "GET");
        assert_eq!(value["photos"]["routes"][1]["path"], "/photos/:photo.:format?");
    }

    #[test]
    fn test_empty_listing() {
        let empty: Application<RouteTable<()>> = Application::new(RouteTable::new());
        let mut out = Vec::new();
        PrintTransport::new(PrintConfig::default())
            .run(&empty, &mut out)
            .unwrap();
        assert_eq!(out, b"\n");
    }
}
