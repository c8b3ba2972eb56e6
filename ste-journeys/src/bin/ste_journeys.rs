//! queries transit directions for student-to-school trips and converts the
//! responses into GeoJSON trip lines and itinerary tables.
use clap::Parser;
use ste_journeys::app::JourneysApp;

fn main() {
    env_logger::init();
    let args = JourneysApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("ste-journeys failed: {e}");
            std::process::exit(1);
        }
    }
}
