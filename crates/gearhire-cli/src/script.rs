//! Session scripts replayed by `gearhire simulate`.
//!
//! One step per line, `#` starts a comment:
//!
//! ```text
//! trigger tent 200,100,140,240     # owner and rect (top,left,right,bottom)
//! trigger banner -                 # mounted but not measurable
//! click tent Tent 10x20            # user click on a trigger, with a title
//! open banner                      # programmatic activation
//! move tent 120,100,140,160
//! scroll
//! resize 1024x600
//! click popover                    # pointer-down inside the menu
//! click outside
//! key Escape
//! select 0
//! close
//! remove tent
//! ```
//!
//! `popover` and `outside` are click targets, so they cannot be trigger owners.

use std::fmt;

use anyhow::{anyhow, bail, Context, Result};
use gearhire_core::{OwnerId, Rect, Size};

const RESERVED_OWNERS: [&str; 2] = ["popover", "outside"];

/// Where a scripted pointer-down lands.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickTarget {
    Popover,
    Outside,
    Trigger(OwnerId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Trigger { owner: OwnerId, rect: Option<Rect> },
    Move { owner: OwnerId, rect: Option<Rect> },
    Remove(OwnerId),
    Open { owner: OwnerId, title: String },
    Click { target: ClickTarget, title: String },
    Resize(Size),
    Scroll,
    Key(String),
    Select(usize),
    Close,
}

/// `1280x800`
pub fn parse_size(s: &str) -> Result<Size> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got '{}'", s))?;
    Ok(Size::new(
        w.trim().parse().with_context(|| format!("bad width in '{}'", s))?,
        h.trim().parse().with_context(|| format!("bad height in '{}'", s))?,
    ))
}

/// `top,left,right,bottom`
pub fn parse_rect(s: &str) -> Result<Rect> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("bad rect '{}'", s))?;
    match parts.as_slice() {
        [top, left, right, bottom] => Ok(Rect::new(*top, *left, *right, *bottom)),
        _ => bail!("expected top,left,right,bottom, got '{}'", s),
    }
}

fn parse_optional_rect(s: &str) -> Result<Option<Rect>> {
    if s == "-" {
        Ok(None)
    } else {
        parse_rect(s).map(Some)
    }
}

fn parse_line(line: &str) -> Result<Option<Step>> {
    let line = line.split('#').next().unwrap_or("").trim();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let mut arg = |name: &str| {
        words
            .next()
            .ok_or_else(|| anyhow!("'{}' needs {}", command, name))
    };

    let step = match command {
        "trigger" => {
            let owner = arg("an owner")?;
            if RESERVED_OWNERS.contains(&owner) {
                bail!("'{}' is a click target and cannot name a trigger", owner);
            }
            Step::Trigger {
                owner: owner.into(),
                rect: parse_optional_rect(arg("a rect")?)?,
            }
        }
        "move" => Step::Move {
            owner: arg("an owner")?.into(),
            rect: parse_optional_rect(arg("a rect")?)?,
        },
        "remove" => Step::Remove(arg("an owner")?.into()),
        "open" => Step::Open {
            owner: arg("an owner")?.into(),
            title: words.collect::<Vec<_>>().join(" "),
        },
        "click" => {
            let target = match arg("a target")? {
                "popover" => ClickTarget::Popover,
                "outside" => ClickTarget::Outside,
                owner => ClickTarget::Trigger(owner.into()),
            };
            Step::Click {
                target,
                title: words.collect::<Vec<_>>().join(" "),
            }
        }
        "resize" => Step::Resize(parse_size(arg("a size")?)?),
        "scroll" => Step::Scroll,
        "key" => Step::Key(arg("a key name")?.to_string()),
        "select" => Step::Select(
            arg("an index")?
                .parse()
                .context("action index must be a number")?,
        ),
        "close" => Step::Close,
        other => bail!("unknown step '{}'", other),
    };
    Ok(Some(step))
}

/// Parse a whole script; errors name the offending line.
pub fn parse_script(source: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(step) = parse_line(line).with_context(|| format!("line {}", index + 1))? {
            steps.push(step);
        }
    }
    Ok(steps)
}

fn fmt_rect(rect: &Option<Rect>) -> String {
    match rect {
        Some(r) => format!("{},{},{},{}", r.top, r.left, r.right, r.bottom),
        None => "-".to_string(),
    }
}

fn with_title(base: String, title: &str) -> String {
    if title.is_empty() {
        base
    } else {
        format!("{} {}", base, title)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Step::Trigger { owner, rect } => format!("trigger {} {}", owner, fmt_rect(rect)),
            Step::Move { owner, rect } => format!("move {} {}", owner, fmt_rect(rect)),
            Step::Remove(owner) => format!("remove {}", owner),
            Step::Open { owner, title } => with_title(format!("open {}", owner), title),
            Step::Click { target, title } => {
                let target = match target {
                    ClickTarget::Popover => "popover".to_string(),
                    ClickTarget::Outside => "outside".to_string(),
                    ClickTarget::Trigger(owner) => owner.to_string(),
                };
                with_title(format!("click {}", target), title)
            }
            Step::Resize(size) => format!("resize {}", size),
            Step::Scroll => "scroll".to_string(),
            Step::Key(key) => format!("key {}", key),
            Step::Select(index) => format!("select {}", index),
            Step::Close => "close".to_string(),
        };
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sizes_and_rects() {
        assert_eq!(parse_size("1280x800").unwrap(), Size::new(1280.0, 800.0));
        assert!(parse_size("1280").is_err());
        assert_eq!(
            parse_rect("750,1160,1200,780").unwrap(),
            Rect::new(750.0, 1160.0, 1200.0, 780.0)
        );
        assert!(parse_rect("1,2,3").is_err());
    }

    #[test]
    fn parses_full_script() {
        let steps = parse_script(
            "# product grid\n\
             trigger tent 200,100,140,240\n\
             trigger banner -\n\
             click tent Tent 10x20\n\
             \n\
             scroll\n\
             key Escape   # dismiss\n\
             select 1\n",
        )
        .unwrap();

        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps[2],
            Step::Click {
                target: ClickTarget::Trigger("tent".into()),
                title: "Tent 10x20".into()
            }
        );
        assert_eq!(steps[1], Step::Trigger { owner: "banner".into(), rect: None });
        assert_eq!(steps[5], Step::Select(1));
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_script("scroll\nwiggle tent\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
        assert!(format!("{:#}", err).contains("unknown step 'wiggle'"));
    }

    #[test]
    fn click_target_names_cannot_be_triggers() {
        for name in ["popover", "outside"] {
            let err = parse_script(&format!("trigger {} 200,100,140,240\n", name)).unwrap_err();
            assert!(format!("{:#}", err).contains("cannot name a trigger"));
        }
        assert_eq!(
            parse_script("click outside\n").unwrap(),
            vec![Step::Click {
                target: ClickTarget::Outside,
                title: String::new(),
            }]
        );
    }

    #[test]
    fn steps_display_as_script_lines() {
        let line = "click tent Tent 10x20";
        let steps = parse_script(line).unwrap();
        assert_eq!(steps[0].to_string(), line);
        assert_eq!(Step::Resize(Size::new(1024.0, 600.0)).to_string(), "resize 1024x600");
    }
}
