extern crate room_heat_balance;

use clap::Parser;
use room_heat_balance::output::FileOutput;
use room_heat_balance::{run_project, ProjectFlags};
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct RoomArgs {
    #[arg(help = "Path to room description in .json format")]
    input_file: String,
    #[arg(
        long,
        short,
        help = "Directory to write results into, defaults to a folder named after the input file"
    )]
    output_dir: Option<String>,
    #[clap(
        long,
        short,
        default_value_t = false,
        help = "Write out the room box and openings as polygons for rendering"
    )]
    geometry: bool,
    #[clap(
        long,
        default_value_t = false,
        help = "Write out a listing of available materials and heat sources"
    )]
    list_catalog: bool,
    #[clap(long, default_value_t = false, help = "Whether to log out spans")]
    log_spans: bool,
}

fn main() -> anyhow::Result<()> {
    let args = RoomArgs::parse();

    // set up basic tracing
    let tracing_subscriber = {
        let mut builder = tracing_subscriber::fmt::fmt().with_max_level(tracing::Level::INFO);

        if args.log_spans {
            builder = builder.with_span_events(FmtSpan::CLOSE);
        }

        builder.finish()
    };
    tracing::subscriber::set_global_default(tracing_subscriber)
        .expect("setting tracing subscriber failed");

    let input_file = args.input_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };
    let input_file_name = Path::new(input_file_stem)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("room");

    let output_path = match args.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(format!("{input_file_stem}__results")),
    };
    fs::create_dir_all(&output_path)?;
    debug!("writing output into {}", output_path.display());

    let file_output = FileOutput::new(output_path, format!("{input_file_name}__{{}}"));

    let mut flags = ProjectFlags::empty();
    if args.geometry {
        flags.insert(ProjectFlags::GEOMETRY);
    }
    if args.list_catalog {
        flags.insert(ProjectFlags::CATALOG);
    }

    match run_project(
        BufReader::new(File::open(Path::new(input_file))?),
        &file_output,
        &flags,
    ) {
        Ok(results) => {
            println!(
                "Estimated interior temperature: {:.1}°C",
                results.interior_temperature()
            );
            Ok(())
        }
        Err(e) => {
            if !e.is_user_error() {
                error!("Unexpected error: {e:?}");
            }
            Err(e.into())
        }
    }
}
