//! Sub-command handlers. Each builds a request definition through the
//! request model and hands it to the resolver.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use gmlink_core::{Coordinate, TravelMode, ViewOptions};
use gmlink_launch::{AppLauncher, LaunchResolver};

use crate::request_file::{load_request_file, RequestFile};
use crate::request_model::{LocationGroup, MapRequestModel, PickedLocation};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a map by search query and/or center coordinate
    Map {
        /// Place or search to look up (e.g. "Ice cream")
        #[arg(long)]
        query: Option<String>,
        /// Map center as LAT,LON
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        center: Option<Coordinate>,
        /// Layers to turn on (repeatable)
        #[arg(long = "view", value_enum)]
        views: Vec<ViewLayer>,
        /// Zoom level, 0 (whole Earth) to 21
        #[arg(long, default_value = "0")]
        zoom: f32,
    },
    /// Open a Street View location
    StreetView {
        /// Location as LAT,LON
        #[arg(value_parser = parse_coordinate, allow_hyphen_values = true)]
        center: Coordinate,
    },
    /// Open directions between two waypoints
    Directions {
        #[command(flatten)]
        from: StartArgs,
        #[command(flatten)]
        to: EndArgs,
        /// Travel mode: driving, transit, biking or walking
        #[arg(long, default_value = "driving")]
        mode: TravelMode,
    },
    /// Open a request described in a YAML or JSON file
    File {
        /// Path to a .yaml, .yml or .json request file
        path: PathBuf,
    },
    /// Show which apps are installed and the active configuration
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewLayer {
    Satellite,
    Traffic,
    Transit,
}

impl From<ViewLayer> for ViewOptions {
    fn from(layer: ViewLayer) -> Self {
        match layer {
            ViewLayer::Satellite => ViewOptions::SATELLITE,
            ViewLayer::Traffic => ViewOptions::TRAFFIC,
            ViewLayer::Transit => ViewOptions::TRANSIT,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct StartArgs {
    /// Start search text (omit all --from options to start at the current location)
    #[arg(long)]
    from: Option<String>,
    /// Start coordinate as LAT,LON
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    from_center: Option<Coordinate>,
    /// Start at the current location
    #[arg(long)]
    from_current: bool,
}

#[derive(Debug, clap::Args)]
pub struct EndArgs {
    /// Destination search text
    #[arg(long)]
    to: Option<String>,
    /// Destination coordinate as LAT,LON
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    to_center: Option<Coordinate>,
    /// End at the current location
    #[arg(long)]
    to_current: bool,
}

/// Parse `LAT,LON` into a coordinate, rejecting out-of-range values.
pub(crate) fn parse_coordinate(raw: &str) -> Result<Coordinate, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got \"{raw}\""))?;
    let latitude = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid latitude \"{lat}\": {e}"))?;
    let longitude = lon
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid longitude \"{lon}\": {e}"))?;

    let coordinate = Coordinate::new(latitude, longitude);
    if coordinate.is_valid() {
        Ok(coordinate)
    } else {
        Err(format!("coordinate {raw} is out of range"))
    }
}

/// Dispatch a sub-command.
///
/// # Errors
///
/// Returns an error when the request cannot be built or when neither Google
/// Maps nor the configured fallback accepted the launch.
pub(crate) fn run_command<L: AppLauncher>(
    command: Commands,
    resolver: &LaunchResolver<L>,
) -> anyhow::Result<()> {
    match command {
        Commands::Map {
            query,
            center,
            views,
            zoom,
        } => {
            let mut model = MapRequestModel::new();
            model.apply_pick(
                LocationGroup::Start,
                PickedLocation::from_parts(query, center, false),
                false,
            );
            let view_options = views
                .into_iter()
                .fold(ViewOptions::empty(), |acc, layer| acc | ViewOptions::from(layer));
            let request = model.map_request(view_options, zoom);
            tracing::debug!(
                search = %model.description_for_group(LocationGroup::Start),
                "opening map"
            );
            report(resolver.open_map(&request), "map")
        }
        Commands::StreetView { center } => {
            let mut model = MapRequestModel::new();
            model.apply_pick(
                LocationGroup::Start,
                PickedLocation::LocationOnly(center),
                false,
            );
            let request = model
                .street_view_request()
                .context("street view needs a coordinate")?;
            report(resolver.open_street_view(&request), "street view")
        }
        Commands::Directions { from, to, mode } => {
            let mut model = MapRequestModel::new();
            model.apply_pick(
                LocationGroup::Start,
                PickedLocation::from_parts(from.from, from.from_center, from.from_current),
                true,
            );
            model.apply_pick(
                LocationGroup::End,
                PickedLocation::from_parts(to.to, to.to_center, to.to_current),
                true,
            );
            model.travel_mode = mode;

            println!(
                "{} from {} to {}",
                model.travel_mode_description(),
                model.description_for_group(LocationGroup::Start),
                model.description_for_group(LocationGroup::End),
            );
            report(resolver.open_directions(&model.directions_request()), "directions")
        }
        Commands::File { path } => {
            let request = load_request_file(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let opened = match &request {
                RequestFile::Map(request) => resolver.open_map(request),
                RequestFile::StreetView(request) => resolver.open_street_view(request),
                RequestFile::Directions(request) => resolver.open_directions(request),
            };
            report(opened, "request")
        }
        Commands::Status => {
            let config = resolver.config();
            println!("google maps installed: {}", resolver.is_google_maps_installed());
            println!("chrome installed:      {}", resolver.is_chrome_installed());
            println!("fallback strategy:     {}", config.fallback_strategy);
            println!(
                "callback url:          {}",
                config
                    .callback_url
                    .as_ref()
                    .map_or("(none)", gmlink_launch::Url::as_str)
            );
            println!("app name:              {}", config.app_name);
            Ok(())
        }
    }
}

fn report(opened: bool, what: &str) -> anyhow::Result<()> {
    if opened {
        println!("opened {what}");
        Ok(())
    } else {
        anyhow::bail!(
            "could not open {what}: google maps unavailable and fallback did not succeed"
        )
    }
}
