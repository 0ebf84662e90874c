//! Text form of editor operations, as passed to `--ops`.
//!
//! Operations are comma separated; arguments follow a colon.

use anyhow::{anyhow, bail, Context as _};
use stories_engine::input::{Key, PointerEvent, PointerKind};
use stories_engine::paint::{GradientKind, Pattern, Rgba};
use stories_ui::color_picker::ColorAction;
use stories_ui::help_center::HelpCenterAction;

/// One step of a `gradient` run.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientOp {
    Edit(ColorAction),
    /// Switch to solid (`None`) or a gradient kind.
    SetType(Option<GradientKind>),
    /// Pointer event on the gradient line.
    Pointer(PointerEvent),
    Key(Key),
    /// Advance the clock by this many milliseconds, then tick.
    Wait(u64),
}

/// One step of a `tips` run.
#[derive(Debug, Clone, PartialEq)]
pub enum TipsOp {
    Action(HelpCenterAction),
    Hydrate,
}

fn split(list: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    list.split(',')
        .map(str::trim)
        .filter(|op| !op.is_empty())
        .map(|op| match op.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (op, None),
        })
}

fn arg<'a>(name: &str, arg: Option<&'a str>) -> anyhow::Result<&'a str> {
    arg.ok_or_else(|| anyhow!("operation '{name}' needs an argument"))
}

fn float(name: &str, value: Option<&str>) -> anyhow::Result<f32> {
    let value = arg(name, value)?;
    let f: f32 = value.parse().with_context(|| format!("'{name}': bad number '{value}'"))?;
    if !f.is_finite() {
        bail!("'{name}': number must be finite");
    }
    Ok(f)
}

fn point(name: &str, value: Option<&str>) -> anyhow::Result<(f32, f32)> {
    let value = arg(name, value)?;
    let (x, y) = value.split_once(';').unwrap_or((value, "0"));
    Ok((float(name, Some(x))?, float(name, Some(y))?))
}

/// Parses `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex(value: &str) -> anyhow::Result<Rgba> {
    let hex = value.trim_start_matches('#');
    let byte = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(|| anyhow!("bad color '{value}'"))
    };
    match hex.len() {
        6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, f32::from(byte(6)?) / 255.0)),
        _ => bail!("bad color '{value}'"),
    }
}

/// Parses a pattern from JSON, rejecting gradients the editor cannot load.
pub fn parse_pattern(text: &str) -> anyhow::Result<Pattern> {
    let pattern: Pattern = serde_json::from_str(text).context("parse --pattern")?;
    if let Some((kind, _)) = pattern.as_gradient().filter(|(_, g)| !g.is_valid()) {
        bail!("invalid {kind:?} gradient: needs two or more stops with finite values");
    }
    Ok(pattern)
}

fn kind(value: &str) -> anyhow::Result<Option<GradientKind>> {
    Ok(match value {
        "solid" => None,
        "linear" => Some(GradientKind::Linear),
        "radial" => Some(GradientKind::Radial),
        "conic" => Some(GradientKind::Conic),
        _ => bail!("unknown pattern type '{value}'"),
    })
}

pub fn parse_gradient_ops(list: &str) -> anyhow::Result<Vec<GradientOp>> {
    split(list)
        .map(|(name, value)| -> anyhow::Result<GradientOp> {
            Ok(match name {
                "select" => GradientOp::Edit(ColorAction::SelectStop(arg(name, value)?.parse()?)),
                "add" => GradientOp::Edit(ColorAction::AddStopAt(float(name, value)?)),
                "delete" => GradientOp::Edit(ColorAction::DeleteStop(arg(name, value)?.parse()?)),
                "remove" => GradientOp::Edit(ColorAction::RemoveCurrentStop),
                "move" => GradientOp::Edit(ColorAction::MoveCurrentStopBy(float(name, value)?)),
                "reverse" => GradientOp::Edit(ColorAction::ReverseStops),
                "rotate" => {
                    let step = match value {
                        Some(_) => float(name, value)?,
                        None => 0.25,
                    };
                    GradientOp::Edit(ColorAction::RotateClockwise(step))
                }
                "color" => GradientOp::Edit(ColorAction::SetCurrentColor(parse_hex(arg(name, value)?)?)),
                "alpha" => GradientOp::Edit(ColorAction::SetAlpha(float(name, value)?)),
                "type" => GradientOp::SetType(kind(arg(name, value)?)?),
                "down" | "drag" | "up" | "leave" => {
                    let (x, y) = point(name, value)?;
                    let kind = match name {
                        "down" => PointerKind::Down,
                        "drag" => PointerKind::Move,
                        "up" => PointerKind::Up,
                        _ => PointerKind::Leave,
                    };
                    GradientOp::Pointer(PointerEvent::new(kind, x, y))
                }
                "key" => match Key::from_name(arg(name, value)?) {
                    Key::Unknown(_) => bail!("unknown key '{}'", value.unwrap_or_default()),
                    key => GradientOp::Key(key),
                },
                "wait" => GradientOp::Wait(arg(name, value)?.parse()?),
                _ => bail!("unknown gradient operation '{name}'"),
            })
        })
        .collect()
}

pub fn parse_tips_ops(list: &str) -> anyhow::Result<Vec<TipsOp>> {
    split(list)
        .map(|(name, value)| -> anyhow::Result<TipsOp> {
            Ok(match name {
                "next" => TipsOp::Action(HelpCenterAction::GoToNext),
                "prev" => TipsOp::Action(HelpCenterAction::GoToPrev),
                "menu" => TipsOp::Action(HelpCenterAction::GoToMenu),
                "tip" => TipsOp::Action(HelpCenterAction::GoToTip(arg(name, value)?.to_string())),
                "open" => TipsOp::Action(HelpCenterAction::OpenToUnreadTip(arg(name, value)?.to_string())),
                "toggle" => TipsOp::Action(HelpCenterAction::Toggle),
                "close" => TipsOp::Action(HelpCenterAction::Close),
                "hydrate" => TipsOp::Hydrate,
                _ => bail!("unknown tips operation '{name}'"),
            })
        })
        .collect()
}
