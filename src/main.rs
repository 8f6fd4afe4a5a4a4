use std::process::ExitCode;

use layout::{ApproxTextMeasurer, DisplayList, FontCache, VSTEP, Viewport};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: soupview <url-or-path> [--scroll <px>] [--tree]";
const TREE_OUTLINE_CAP: usize = 10_000;

struct Args {
    target: String,
    scroll: f32,
    tree: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut target = None;
    let mut scroll = 0.0;
    let mut tree = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tree" => tree = true,
            "--scroll" => {
                let value = args.next().ok_or("--scroll needs a value")?;
                scroll = value
                    .parse::<f32>()
                    .map_err(|e| format!("bad --scroll value {value:?}: {e}"))?
                    .max(0.0);
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if target.is_none() => target = Some(arg),
            _ => return Err(format!("unexpected argument {arg:?}\n{USAGE}")),
        }
    }
    let target = target.ok_or_else(|| USAGE.to_string())?;
    Ok(Args {
        target,
        scroll,
        tree,
    })
}

fn print_visible(list: &DisplayList, viewport: &Viewport) {
    for (screen_y, item) in list.visible(viewport, VSTEP) {
        let key = item.font.key();
        println!(
            "{:7.1} {:7.1} {:>3} {:<6} {:<6} {}",
            item.x, screen_y, key.size, key.weight, key.style, item.text
        );
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let fetched = net::load(&args.target)?;
    log::info!(
        "loaded {} ({} bytes, status {:?}, type {:?})",
        fetched.url,
        fetched.body.len(),
        fetched.status,
        fetched.content_type
    );

    let dom = html::parse_bytes(&fetched.body)?;
    if args.tree {
        for line in html::debug::outline(&dom, TREE_OUTLINE_CAP) {
            println!("{line}");
        }
        println!();
    }

    let mut fonts = FontCache::new();
    let list = layout::layout(&dom, &ApproxTextMeasurer, &mut fonts)?;

    let viewport = Viewport {
        scroll: args.scroll,
        ..Viewport::browser_defaults()
    };
    print_visible(&list, &viewport);
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("soupview: {err}");
            ExitCode::FAILURE
        }
    }
}
