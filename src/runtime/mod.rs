use clap::Parser;
use tracing::warn;

use wpass::Error;
use wpass::config::Settings;
use wpass::diff::{DiffReport, FolderDiffer, SyncDirection};
use wpass::metadata::DecoderRegistry;
use wpass::playlist::{PlaylistBuilder, PlaylistJob, PlaylistRequest, SubfolderRequest};

use cli::{Cli, Command, DiffArgs, PlaylistArgs};
use progress_bar::ProgressReporter;

mod cli;
mod logging;
mod progress_bar;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (settings, config_problem) = match settings::load_settings(cli.config.as_deref()) {
        Ok(s) => (s, None),
        // Config is optional; failures should not prevent the tool from running.
        Err(msg) => (Settings::default(), Some(msg)),
    };

    logging::init(&settings.logging, cli.verbose);
    if let Some(msg) = config_problem {
        warn!("{msg}; using defaults");
    }

    match cli.command {
        Command::Playlist(args) => run_playlist(&settings, args),
        Command::Diff(args) => run_diff(&settings, args),
        Command::Config => {
            print!("{}", toml::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}

fn playlist_job(args: PlaylistArgs) -> Result<PlaylistJob, Error> {
    if args.per_subfolder {
        let output_dir = args.output_dir.ok_or(Error::MissingInput("--output-dir"))?;
        Ok(PlaylistJob::PerSubfolder(SubfolderRequest {
            root: args.music_dir,
            output_dir,
            exclude_instrumental: args.exclude_instrumental,
        }))
    } else {
        let output = args.output.ok_or(Error::MissingInput("--output"))?;
        Ok(PlaylistJob::Single(PlaylistRequest {
            root: args.music_dir,
            base_dir: args.base_dir,
            output,
            exclude_instrumental: args.exclude_instrumental,
        }))
    }
}

fn run_playlist(settings: &Settings, args: PlaylistArgs) -> Result<(), Box<dyn std::error::Error>> {
    let job = playlist_job(args)?;

    let registry = DecoderRegistry::from_settings(&settings.playlist);
    let builder = PlaylistBuilder::new(&registry, &settings.library, &settings.playlist);

    let unit = match job {
        PlaylistJob::Single(_) => "files",
        PlaylistJob::PerSubfolder(_) => "folders",
    };
    let bar = ProgressReporter::new(unit);
    let result = builder.run(&job, &mut |done: usize, total: usize| bar.update(done, total));
    bar.finish();

    let summaries = result?;
    if summaries.is_empty() {
        println!("No subfolder contains audio files; nothing written.");
    }
    for summary in &summaries {
        println!(
            "Wrote {} ({} of {} tracks)",
            summary.path.display(),
            summary.entries,
            summary.scanned
        );
    }
    Ok(())
}

fn run_diff(settings: &Settings, args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let differ = FolderDiffer::new(&settings.library);
    let diff = differ.diff(&args.folder_a, &args.folder_b)?;

    if diff.is_in_sync() {
        println!("Both folders are in sync.");
        return Ok(());
    }

    print!("{}", DiffReport::new(&diff, &args.folder_a, &args.folder_b));

    if let Some(direction) = args.copy {
        let direction = SyncDirection::from(direction);
        let bar = ProgressReporter::new("files");
        let result = differ.reconcile(
            &diff,
            &args.folder_a,
            &args.folder_b,
            direction,
            &mut |done: usize, total: usize| bar.update(done, total),
        );
        bar.finish();

        let report = result?;
        println!("Copied {} file(s).", report.copied);
    }
    Ok(())
}
