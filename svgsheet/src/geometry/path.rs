use anyhow::{Result, anyhow, bail};
use itertools::Itertools;
use svg::node::element::path::{Command, Data, Position};

use crate::geometry::Offset;
use crate::geometry::geo_traits::Translatable;

/// The kind of drawing command, independent of whether its coordinates are absolute or relative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    EllipticalArc,
    ClosePath,
}

impl CommandKind {
    /// The absolute (upper case) command letter
    pub fn letter(&self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CurveTo => 'C',
            CommandKind::SmoothCurveTo => 'S',
            CommandKind::QuadraticCurveTo => 'Q',
            CommandKind::SmoothQuadraticCurveTo => 'T',
            CommandKind::EllipticalArc => 'A',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// Number of numeric parameters a single segment of this kind consumes
    fn arity(&self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticCurveTo => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::CurveTo => 6,
            CommandKind::SmoothCurveTo | CommandKind::QuadraticCurveTo => 4,
            CommandKind::EllipticalArc => 7,
            CommandKind::ClosePath => 0,
        }
    }
}

/// The parameters of an elliptical arc which are not positional.
/// They are never shifted by a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcParameters {
    pub rx: f32,
    pub ry: f32,
    pub x_axis_rotation: f32,
    pub large_arc: bool,
    pub sweep: bool,
}

/// A single segment of a path's drawing-command sequence.
///
/// Only the fields used by `kind` are set: `x1`/`y1` for the first control point, `x2`/`y2` for the second
/// and `x`/`y` for the end point. Horizontal and vertical lines only carry `x` or `y` respectively.
#[derive(Clone, Debug, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    /// Whether the coordinates are relative to the current point (lower case command letter)
    pub relative: bool,
    pub x1: Option<f32>,
    pub y1: Option<f32>,
    pub x2: Option<f32>,
    pub y2: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    /// Only set for [`CommandKind::EllipticalArc`]
    pub arc: Option<ArcParameters>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, relative: bool) -> Self {
        Self {
            kind,
            relative,
            x1: None,
            y1: None,
            x2: None,
            y2: None,
            x: None,
            y: None,
            arc: None,
        }
    }

    pub fn line_to(x: f32, y: f32) -> Self {
        Self::new(CommandKind::LineTo, false).with_end(x, y)
    }

    pub fn close() -> Self {
        Self::new(CommandKind::ClosePath, false)
    }

    pub fn with_end(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn relative(mut self) -> Self {
        self.relative = true;
        self
    }

    /// The command letter, lower case for relative commands
    pub fn code(&self) -> char {
        match self.relative {
            true => self.kind.letter().to_ascii_lowercase(),
            false => self.kind.letter(),
        }
    }

    /// Builds one segment of `kind` from exactly [`CommandKind::arity`] parameters.
    fn from_parameters(kind: CommandKind, relative: bool, p: &[f32]) -> Self {
        let mut cmd = PathCommand::new(kind, relative);
        match kind {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticCurveTo => {
                (cmd.x, cmd.y) = (Some(p[0]), Some(p[1]));
            }
            CommandKind::HorizontalLineTo => cmd.x = Some(p[0]),
            CommandKind::VerticalLineTo => cmd.y = Some(p[0]),
            CommandKind::CurveTo => {
                (cmd.x1, cmd.y1) = (Some(p[0]), Some(p[1]));
                (cmd.x2, cmd.y2) = (Some(p[2]), Some(p[3]));
                (cmd.x, cmd.y) = (Some(p[4]), Some(p[5]));
            }
            CommandKind::SmoothCurveTo => {
                (cmd.x2, cmd.y2) = (Some(p[0]), Some(p[1]));
                (cmd.x, cmd.y) = (Some(p[2]), Some(p[3]));
            }
            CommandKind::QuadraticCurveTo => {
                (cmd.x1, cmd.y1) = (Some(p[0]), Some(p[1]));
                (cmd.x, cmd.y) = (Some(p[2]), Some(p[3]));
            }
            CommandKind::EllipticalArc => {
                cmd.arc = Some(ArcParameters {
                    rx: p[0],
                    ry: p[1],
                    x_axis_rotation: p[2],
                    large_arc: p[3] != 0.0,
                    sweep: p[4] != 0.0,
                });
                (cmd.x, cmd.y) = (Some(p[5]), Some(p[6]));
            }
            CommandKind::ClosePath => {}
        }
        cmd
    }

    /// Textual form: the command letter followed by its parameters in the order
    /// `x1 y1 x2 y2 x y`, or `rx ry x-axis-rotation large-arc sweep x y` for arcs.
    pub fn to_path_string(&self) -> String {
        let parameters = match &self.arc {
            Some(arc) => [
                Some(arc.rx.to_string()),
                Some(arc.ry.to_string()),
                Some(arc.x_axis_rotation.to_string()),
                Some(flag(arc.large_arc).to_string()),
                Some(flag(arc.sweep).to_string()),
                self.x.map(|v| v.to_string()),
                self.y.map(|v| v.to_string()),
            ]
            .into_iter()
            .flatten()
            .join(" "),
            None => [self.x1, self.y1, self.x2, self.y2, self.x, self.y]
                .into_iter()
                .flatten()
                .join(" "),
        };
        format!("{}{}", self.code(), parameters)
    }
}

impl Translatable for PathCommand {
    /// Shifts every positional field of an absolute command. Relative commands are offset-invariant.
    fn translate(&mut self, offset: Offset) -> &mut Self {
        if !self.relative {
            for x in [&mut self.x1, &mut self.x2, &mut self.x].into_iter().flatten() {
                *x += offset.dx;
            }
            for y in [&mut self.y1, &mut self.y2, &mut self.y].into_iter().flatten() {
                *y += offset.dy;
            }
        }
        self
    }
}

fn flag(value: bool) -> char {
    match value {
        true => '1',
        false => '0',
    }
}

/// Parses the content of a `d` attribute into one [`PathCommand`] per segment.
///
/// Repeated parameter groups are split into separate commands, the extra pairs following a moveto becoming
/// linetos of the same relativity. A relative moveto which starts the path is relative to the origin and is
/// therefore normalized into an absolute one.
pub fn parse_path_data(d: &str) -> Result<Vec<PathCommand>> {
    let data = Data::parse(d).map_err(|e| anyhow!("{e}"))?;

    let mut commands = vec![];
    for command in data.iter() {
        let (kind, position, parameters) = match command {
            Command::Move(pos, params) => (CommandKind::MoveTo, pos, params),
            Command::Line(pos, params) => (CommandKind::LineTo, pos, params),
            Command::HorizontalLine(pos, params) => (CommandKind::HorizontalLineTo, pos, params),
            Command::VerticalLine(pos, params) => (CommandKind::VerticalLineTo, pos, params),
            Command::CubicCurve(pos, params) => (CommandKind::CurveTo, pos, params),
            Command::SmoothCubicCurve(pos, params) => (CommandKind::SmoothCurveTo, pos, params),
            Command::QuadraticCurve(pos, params) => (CommandKind::QuadraticCurveTo, pos, params),
            Command::SmoothQuadraticCurve(pos, params) => {
                (CommandKind::SmoothQuadraticCurveTo, pos, params)
            }
            Command::EllipticalArc(pos, params) => (CommandKind::EllipticalArc, pos, params),
            Command::Close => {
                commands.push(PathCommand::close());
                continue;
            }
        };
        let relative = matches!(position, Position::Relative);
        let parameters: &[f32] = parameters;
        let arity = kind.arity();

        if parameters.is_empty() || parameters.len() % arity != 0 {
            bail!(
                "'{}' expects a multiple of {} parameters, got {}",
                kind.letter(),
                arity,
                parameters.len()
            );
        }
        for (i, segment) in parameters.chunks(arity).enumerate() {
            let kind = match kind {
                CommandKind::MoveTo if i > 0 => CommandKind::LineTo,
                _ => kind,
            };
            commands.push(PathCommand::from_parameters(kind, relative, segment));
        }
    }

    if let Some(first) = commands.first_mut() {
        if first.kind == CommandKind::MoveTo {
            first.relative = false;
        }
    }

    Ok(commands)
}

/// Reassembles a `d` attribute from a sequence of commands.
pub fn serialize_path_data(commands: &[PathCommand]) -> String {
    commands.iter().map(PathCommand::to_path_string).join(" ")
}
