mod ops;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::json;
use stories_engine::coords::Rect;
use stories_engine::input::KeyEvent;
use stories_engine::logging::{init_logging, LoggingConfig};
use stories_engine::paint::{css, GradientPattern, Pattern, Rgba, Stop};
use stories_engine::storage::JsonFileStore;
use stories_engine::time::ManualClock;
use stories_ui::color_picker::{ColorPicker, GradientEditorConfig};
use stories_ui::event::UiEvent;
use stories_ui::help_center::{HelpCenter, HelpCenterConfig, StoreUserApi, TipCatalog};

use ops::{GradientOp, TipsOp};

/// Gradient line used for pointer operations: 200px wide, 20px tall, at the origin.
const LINE: Rect = Rect::new(0.0, 0.0, 200.0, 20.0);

#[derive(Parser, Debug)]
#[command(name = "stories-studio", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edit a pattern and print the result as JSON.
    Gradient(GradientArgs),
    /// Drive the help center against a JSON file store.
    Tips(TipsArgs),
}

#[derive(Parser, Debug)]
struct GradientArgs {
    /// Starting pattern JSON. Defaults to a black-to-white linear gradient.
    #[arg(long)]
    pattern: Option<String>,

    /// Comma-separated operations, e.g. `add:0.5,move:0.1,rotate,down:20;10,key:Delete,wait:100`.
    #[arg(long, default_value = "")]
    ops: String,
}

#[derive(Parser, Debug)]
struct TipsArgs {
    /// JSON file standing in for local storage and the user service.
    #[arg(long, default_value = "help_center.json")]
    store: PathBuf,

    /// Comma-separated operations, e.g. `hydrate,toggle,tip:safeZone,next`.
    #[arg(long, default_value = "")]
    ops: String,

    /// Never auto-open after hydration.
    #[arg(long)]
    disable_quick_tips: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });
    match cli.cmd {
        Command::Gradient(args) => cmd_gradient(args),
        Command::Tips(args) => cmd_tips(args),
    }
}

fn cmd_gradient(args: GradientArgs) -> anyhow::Result<()> {
    let initial = match &args.pattern {
        Some(text) => ops::parse_pattern(text)?,
        None => Pattern::Linear(GradientPattern::new(vec![
            Stop::new(0.0, Rgba::black()),
            Stop::new(1.0, Rgba::white()),
        ])),
    };
    let ops = ops::parse_gradient_ops(&args.ops)?;

    let clock = ManualClock::new();
    let delivered = Rc::new(RefCell::new(Vec::new()));
    let sink = delivered.clone();
    let mut picker = ColorPicker::with_clock(&initial, GradientEditorConfig::default(), clock.clone())
        .on_change(move |p| sink.borrow_mut().push(p.clone()));

    for op in ops {
        log::debug!("{op:?}");
        match op {
            GradientOp::Edit(action) => picker.dispatch(action),
            GradientOp::SetType(kind) => picker.set_type(kind),
            GradientOp::Pointer(ev) => {
                picker.handle_line_event(&UiEvent::Pointer(ev), LINE);
            }
            GradientOp::Key(key) => {
                picker.handle_key(&KeyEvent::new(key));
            }
            GradientOp::Wait(ms) => {
                clock.advance(Duration::from_millis(ms));
                picker.tick();
            }
        }
    }
    picker.close();

    let pattern = picker.pattern();
    let output = json!({
        "pattern": pattern,
        "css": css::to_css(&pattern),
        "currentStop": picker.state().map(|s| s.current_stop_index),
        "delivered": *delivered.borrow(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn cmd_tips(args: TipsArgs) -> anyhow::Result<()> {
    let ops = ops::parse_tips_ops(&args.ops)?;
    let config = HelpCenterConfig {
        disable_quick_tips: args.disable_quick_tips || HelpCenterConfig::default().disable_quick_tips,
        ..HelpCenterConfig::default()
    };
    let store = JsonFileStore::new(args.store.clone());
    let api = StoreUserApi::new(Box::new(store.clone()));
    let mut center = HelpCenter::new(TipCatalog::quick_tips(), config, Box::new(store), Box::new(api));

    for op in ops {
        match op {
            TipsOp::Hydrate => center.hydrate(),
            TipsOp::Action(action) => {
                if !center.dispatch(action.clone()) {
                    log::info!("{action:?} had no effect");
                }
            }
        }
    }

    let output = json!({
        "state": center.state(),
        "currentTip": center.current_tip().map(|(key, tip)| json!({ "key": key, "tip": tip })),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
