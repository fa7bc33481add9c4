use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{debug, error, info};

use crate::app::{PlotSettings, run_pipeline};
use crate::args::PlotArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        apply_config(&mut args, &matches, config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);
    debug!("Resolved arguments: {:?}", args);

    let settings = PlotSettings::from_args(args);
    match run_pipeline(&settings) {
        Ok(report) => {
            info!(
                "Wrote {}x{} chart of {} containers ({} rows) to {}",
                report.width,
                report.height,
                report.containers,
                report.rows,
                settings.output.display()
            );
            Ok(())
        }
        Err(err) => {
            error!("{}", err);
            Err(err)
        }
    }
}

fn parse_args() -> AppResult<(PlotArgs, ArgMatches)> {
    let matches = PlotArgs::command().get_matches();
    let args = PlotArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
