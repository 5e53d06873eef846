//! Identicon viewer.
//!
//! Shows a seed's identicon in a window, or writes it straight to a PNG
//! with `--out`.

mod viewer;

use std::path::PathBuf;
use std::process;

use identicon_core::{Identicon, IdenticonOptions};
use identicon_render::{Framebuffer, render, save_png};
use viewer::{ViewerConfig, run};

struct Args {
    options: IdenticonOptions,
    zoom: u32,
    out: Option<PathBuf>,
}

fn usage() -> ! {
    eprintln!("Usage: identicon-viewer [SEED] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N    grid cells per side (default 8)");
    eprintln!("  --scale N   pixels per cell (default 4)");
    eprintln!("  --zoom N    window zoom factor (default 8)");
    eprintln!("  --color C   foreground color override (#rgb, #rrggbb, hsl(H,S%,L%))");
    eprintln!("  --bg C      background color override");
    eprintln!("  --spot C    spot color override");
    eprintln!("  --out FILE  write a PNG and exit instead of opening a window");
    process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args {
        options: IdenticonOptions::default(),
        zoom: 8,
        out: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next().unwrap_or_else(|| {
                eprintln!("Missing value for {name}");
                usage();
            })
        };
        match arg.as_str() {
            "--size" => match value("--size").parse() {
                Ok(n) => args.options.size = Some(n),
                Err(_) => usage(),
            },
            "--scale" => match value("--scale").parse() {
                Ok(n) => args.options.scale = Some(n),
                Err(_) => usage(),
            },
            "--zoom" => match value("--zoom").parse() {
                Ok(n) if n > 0 => args.zoom = n,
                _ => usage(),
            },
            "--color" => args.options.color = Some(value("--color")),
            "--bg" => args.options.bg_color = Some(value("--bg")),
            "--spot" => args.options.spot_color = Some(value("--spot")),
            "--out" => args.out = Some(PathBuf::from(value("--out"))),
            "--help" | "-h" => usage(),
            seed if !seed.starts_with('-') && args.options.seed.is_none() => {
                args.options.seed = Some(seed.to_string());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                usage();
            }
        }
    }

    args
}

fn main() {
    let args = parse_args();

    let icon = match Identicon::generate(args.options.clone()) {
        Ok(icon) => icon,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if let Some(path) = args.out {
        if let Err(err) = save_png(&icon, &path) {
            eprintln!("Failed to write {}: {err}", path.display());
            process::exit(1);
        }
        println!("Wrote {}", path.display());
        return;
    }

    let mut framebuffer = Framebuffer::new(0, 0);
    if let Err(err) = render(&icon, &mut framebuffer) {
        eprintln!("{err}");
        process::exit(1);
    }

    let title = match &args.options.seed {
        Some(seed) => format!("Identicon: {seed}"),
        None => "Identicon".to_string(),
    };

    run(
        icon,
        framebuffer,
        args.options,
        ViewerConfig {
            title,
            zoom: args.zoom,
        },
    );
}
