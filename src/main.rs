//! IdentityPage simulator CLI.
//!
//! Boots a markup file into the headless page environment, runs the
//! behavior layer against it and prints what a browser would show in its
//! DOM inspector and console.
//!
//! Usage:
//!   identity-sim run                          # boot the bundled demo page
//!   identity-sim run --page site.xhtml --hover ".actions a"
//!   identity-sim run --touch                  # tooltip stays disabled
//!   identity-sim dump-tree --raw              # tree as parsed, no behaviors
//!   identity-sim console --json               # captured console as JSON

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use identity_page_sim::{behavior, dump, markup, DeviceProfile, Page};

/// Markup served when no `--page` is given.
const DEMO_PAGE: &str = include_str!("demo_page.xhtml");

#[derive(Parser)]
#[command(name = "identity-sim")]
#[command(about = "Headless simulator for the IdentityPage behavior layer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PageArgs {
    /// Markup file to host (defaults to the bundled demo page)
    #[arg(long)]
    page: Option<PathBuf>,

    /// Device profile JSON file
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Use the built-in touch device profile
    #[arg(long, conflicts_with = "profile")]
    touch: bool,

    /// Viewport size override, e.g. 1280x800
    #[arg(long, value_name = "WxH")]
    viewport: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Boot the page, settle all timers and print console plus tree
    Run {
        #[command(flatten)]
        page: PageArgs,

        /// Scroll offset applied after load, e.g. 0,340
        #[arg(long, value_name = "X,Y")]
        scroll: Option<String>,

        /// Advance the clock by this many milliseconds instead of settling
        #[arg(long, value_name = "MS")]
        advance: Option<u64>,

        /// Hover the first element matching this selector at the end
        #[arg(long, value_name = "SELECTOR")]
        hover: Option<String>,
    },

    /// Print the element tree
    DumpTree {
        #[command(flatten)]
        page: PageArgs,

        /// Dump the tree as parsed, without booting the behavior layer
        #[arg(long)]
        raw: bool,

        /// Keep only elements whose selector notation contains this substring
        #[arg(long, value_name = "SUBSTR")]
        filter: Option<String>,

        /// Skip elements carrying the `hidden` class, subtree included
        #[arg(long)]
        visible_only: bool,
    },

    /// Print captured console output
    Console {
        #[command(flatten)]
        page: PageArgs,

        /// Emit entries as JSON, styling included
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            page,
            scroll,
            advance,
            hover,
        } => {
            let page = build_page(&page)?;
            run(&page, scroll, advance, hover)
        }
        Commands::DumpTree {
            page,
            raw,
            filter,
            visible_only,
        } => {
            let page = build_page(&page)?;
            if !raw {
                boot(&page);
            }
            print!(
                "{}",
                dump::dump_tree_with(&page, filter.as_deref(), visible_only)
            );
            Ok(())
        }
        Commands::Console { page, json } => {
            let page = build_page(&page)?;
            boot(&page);
            if json {
                println!("{}", serde_json::to_string_pretty(&page.console_entries())?);
            } else {
                let out = dump::dump_console(&page);
                if !out.is_empty() {
                    println!("{out}");
                }
            }
            Ok(())
        }
    }
}

fn build_page(args: &PageArgs) -> Result<Page, Box<dyn std::error::Error>> {
    let dom = match &args.page {
        Some(path) => markup::load_document(path)?,
        None => markup::parse_document(DEMO_PAGE)?,
    };
    let mut device = if let Some(path) = &args.profile {
        DeviceProfile::from_path(path)?
    } else if args.touch {
        DeviceProfile::touch()
    } else {
        DeviceProfile::desktop()
    };
    if let Some(raw) = &args.viewport {
        let (width, height) = parse_pair(raw, 'x')
            .ok_or_else(|| format!("invalid viewport {raw:?}, expected WxH"))?;
        device.viewport_width = width;
        device.viewport_height = height;
    }
    Ok(Page::new(dom, device))
}

/// Install the behaviors and play the full load sequence through to idle.
fn boot(page: &Page) {
    behavior::install(page);
    page.fire_ready();
    page.fire_load();
    page.run_until_idle();
}

fn run(
    page: &Page,
    scroll: Option<String>,
    advance: Option<u64>,
    hover: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    behavior::install(page);
    page.fire_ready();
    page.fire_load();
    if let Some(raw) = &scroll {
        let (x, y) = parse_pair(raw, ',')
            .ok_or_else(|| format!("invalid scroll {raw:?}, expected X,Y"))?;
        page.scroll_to(x, y);
    }
    match advance {
        Some(ms) => page.advance(Duration::from_millis(ms)),
        None => page.run_until_idle(),
    }
    if let Some(selector) = &hover {
        match page.query_selector(selector)? {
            Some(node) => page.hover(node),
            None => eprintln!("no element matches {selector:?}"),
        }
    }

    let console = dump::dump_console(page);
    if !console.is_empty() {
        println!("{console}");
        println!();
    }
    print!("{}", dump::dump_tree(page));
    Ok(())
}

/// Parse `"a<sep>b"` into two floats.
fn parse_pair(raw: &str, sep: char) -> Option<(f32, f32)> {
    let (a, b) = raw.split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}
