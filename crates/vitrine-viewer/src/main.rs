mod app;

use anyhow::Result;

use vitrine_engine::device::GpuInit;
use vitrine_engine::field::FieldConfig;
use vitrine_engine::logging::init_logging;
use vitrine_engine::window::{Runtime, RuntimeConfig};
use vitrine_records::{RecordSource, StaticSource, current_year, footer_line, render_list};

use app::FieldApp;

fn main() -> Result<()> {
    init_logging();

    // Record display and the 3D panel share the startup trigger but nothing
    // else; a record failure must not keep the window from opening.
    match StaticSource::projects().list() {
        Ok(records) => {
            println!("{}", render_list(&records));
            println!("{}", footer_line(current_year()));
        }
        Err(e) => log::warn!("record display unavailable: {e:#}"),
    }

    let config = RuntimeConfig {
        title: "vitrine".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), FieldApp::new(FieldConfig::default()))
}
